use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(module: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    match module {
        Some(module_id) => {
            let mut developers = ctx.service.developers_for_module(module_id).await?;
            truncate_to(&mut developers, limit);
            output(&developers, flags.format)
        }
        None => {
            let mut developers = ctx.service.try_developers_with_modules().await?;
            truncate_to(&mut developers, limit);
            output(&developers, flags.format)
        }
    }
}
