use rtrack_core::drafts::NewComponent;
use rtrack_core::entities::Component;
use rtrack_db::repos::catalog::CatalogRecord;
use rtrack_db::updates::component::ComponentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ComponentCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

/// Handle `rtrack component`.
pub async fn handle(
    action: &ComponentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ComponentCommands::Create {
            name,
            module,
            position,
        } => {
            let component = ctx
                .service
                .create_component(&NewComponent {
                    name: name.clone(),
                    module_id: module.clone(),
                    sort_order: *position,
                })
                .await?;
            output(&component, flags.format)
        }
        ComponentCommands::Update {
            id,
            name,
            module,
            position,
        } => {
            let mut builder = ComponentUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(module) = module {
                builder = builder.module_id(module);
            }
            if let Some(position) = position {
                builder = builder.sort_order(*position);
            }
            let component = ctx
                .service
                .update_catalog_item::<Component>(id, &builder.build())
                .await?;
            output(&component, flags.format)
        }
        ComponentCommands::Delete { id } => {
            ctx.service.delete_catalog_item::<Component>(id).await?;
            output(
                &Deleted {
                    table: Component::TABLE.as_str(),
                    id: id.clone(),
                },
                flags.format,
            )
        }
        ComponentCommands::List { module, sort } => {
            let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
            let mut components = match module {
                Some(module_id) => ctx.service.try_components_for_module(module_id).await?,
                None => {
                    ctx.service
                        .try_list_catalog::<Component>(sort.as_order(), Some(limit))
                        .await?
                }
            };
            truncate_to(&mut components, limit);
            output(&components, flags.format)
        }
        ComponentCommands::Reorder { module, ids } => {
            ctx.service.reorder_components_by_ids(module, ids).await?;
            let components = ctx.service.try_components_for_module(module).await?;
            output(&components, flags.format)
        }
    }
}
