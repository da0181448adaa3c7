#[path = "developer/create.rs"]
mod create;
#[path = "developer/list.rs"]
mod list;
#[path = "developer/update.rs"]
mod update;

use rtrack_core::entities::Developer;
use rtrack_db::repos::catalog::CatalogRecord;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DeveloperCommands;
use crate::commands::shared::Deleted;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rtrack developer`.
pub async fn handle(
    action: &DeveloperCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DeveloperCommands::Create {
            name,
            email,
            modules,
        } => create::run(name, email.as_deref(), modules, ctx, flags).await,
        DeveloperCommands::Update {
            id,
            name,
            email,
            clear_email,
            modules,
            clear_modules,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    name: name.clone(),
                    email: email.clone(),
                    clear_email: *clear_email,
                    modules: modules.clone(),
                    clear_modules: *clear_modules,
                },
                ctx,
                flags,
            )
            .await
        }
        DeveloperCommands::Delete { id } => {
            ctx.service.delete_developer(id).await?;
            output(
                &Deleted {
                    table: Developer::TABLE.as_str(),
                    id: id.clone(),
                },
                flags.format,
            )
        }
        DeveloperCommands::List { module } => list::run(module.as_deref(), ctx, flags).await,
    }
}
