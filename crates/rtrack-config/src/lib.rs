//! # rtrack-config
//!
//! Layered configuration loading for the release tracker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RTRACK_*` prefix, `__` as separator)
//! 2. Project-level `.rtrack/config.toml`
//! 3. User-level `~/.config/rtrack/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `RTRACK_DATABASE__PATH` -> `database.path`,
//! `RTRACK_MATRIX__NOTES_COMPONENT` -> `matrix.notes_component`.
//!
//! # Usage
//!
//! ```no_run
//! use rtrack_config::TrackerConfig;
//!
//! let config = TrackerConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod general;
mod matrix;

pub use database::{DEFAULT_DB_PATH, DatabaseConfig};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use matrix::MatrixConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub matrix: MatrixConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TrackerConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and callers can layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".rtrack/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("RTRACK_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rtrack").join("config.toml"))
    }

    /// Reject values no component can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.matrix.notes_component.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "matrix.notes_component".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
