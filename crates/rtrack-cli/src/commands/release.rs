use rtrack_core::drafts::NewRelease;
use rtrack_core::entities::Release;
use rtrack_db::repos::catalog::CatalogRecord;
use rtrack_db::updates::release::ReleaseUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReleaseCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

/// Handle `rtrack release`.
pub async fn handle(
    action: &ReleaseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReleaseCommands::Create {
            name,
            module,
            start,
            end,
            active,
            responsible,
        } => {
            let release = ctx
                .service
                .create_release(&NewRelease {
                    name: name.clone(),
                    module_id: module.clone(),
                    start_date: *start,
                    end_date: *end,
                    active: *active,
                    responsible_id: responsible.clone(),
                })
                .await?;
            output(&release, flags.format)
        }
        ReleaseCommands::Update {
            id,
            name,
            module,
            start,
            clear_start,
            end,
            clear_end,
            active,
            responsible,
            clear_responsible,
        } => {
            let mut builder = ReleaseUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(module) = module {
                builder = builder.module_id(module);
            }
            if start.is_some() || *clear_start {
                builder = builder.start_date(*start);
            }
            if end.is_some() || *clear_end {
                builder = builder.end_date(*end);
            }
            if let Some(active) = active {
                builder = builder.active(*active);
            }
            if responsible.is_some() || *clear_responsible {
                builder = builder.responsible_id(responsible.clone());
            }
            let release = ctx.service.update_release(id, &builder.build()).await?;
            output(&release, flags.format)
        }
        ReleaseCommands::Delete { id } => {
            ctx.service.delete_release(id).await?;
            output(
                &Deleted {
                    table: Release::TABLE.as_str(),
                    id: id.clone(),
                },
                flags.format,
            )
        }
        ReleaseCommands::List { module } => {
            let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
            let mut releases = ctx.service.try_releases(module.as_deref()).await?;
            truncate_to(&mut releases, limit);
            output(&releases, flags.format)
        }
    }
}
