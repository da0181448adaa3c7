use rtrack_core::drafts::{NewEnvironment, NewTeam};
use rtrack_core::entities::{Environment, Team};
use rtrack_db::repos::catalog::CatalogRecord;
use rtrack_db::updates::named::NameUpdate;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NamedCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Catalogs whose rows carry nothing but a name.
pub trait NamedRecord: CatalogRecord<Update = NameUpdate> + Serialize {
    fn draft(name: String) -> Self::New;
}

impl NamedRecord for Team {
    fn draft(name: String) -> NewTeam {
        NewTeam { name }
    }
}

impl NamedRecord for Environment {
    fn draft(name: String) -> NewEnvironment {
        NewEnvironment { name }
    }
}

/// Handle `rtrack team` and `rtrack environment`.
pub async fn handle<T: NamedRecord>(
    action: &NamedCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NamedCommands::Create { name } => {
            let item = ctx
                .service
                .create_catalog_item::<T>(&T::draft(name.clone()))
                .await?;
            output(&item, flags.format)
        }
        NamedCommands::Update { id, name } => {
            let item = ctx
                .service
                .update_catalog_item::<T>(id, &NameUpdate::name(name.as_str()))
                .await?;
            output(&item, flags.format)
        }
        NamedCommands::Delete { id } => {
            ctx.service.delete_catalog_item::<T>(id).await?;
            output(
                &Deleted {
                    table: T::TABLE.as_str(),
                    id: id.clone(),
                },
                flags.format,
            )
        }
        NamedCommands::List { sort } => {
            let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
            let items = ctx
                .service
                .try_list_catalog::<T>(sort.as_order(), Some(limit))
                .await?;
            output(&items, flags.format)
        }
    }
}
