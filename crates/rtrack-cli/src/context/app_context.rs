use std::path::Path;

use anyhow::Context;
use rtrack_config::TrackerConfig;
use rtrack_db::service::TrackerService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TrackerService,
    pub config: TrackerConfig,
}

impl AppContext {
    /// Open the configured database, creating its directory if needed.
    pub async fn init(config: TrackerConfig) -> anyhow::Result<Self> {
        if !config.database.is_in_memory()
            && let Some(parent) = Path::new(&config.database.path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let service = TrackerService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        tracing::debug!(path = %config.database.path, "tracker database opened");

        Ok(Self { service, config })
    }
}
