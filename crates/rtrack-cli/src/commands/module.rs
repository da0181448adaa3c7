use rtrack_core::drafts::NewModule;
use rtrack_core::entities::Module;
use rtrack_db::repos::catalog::CatalogRecord;
use rtrack_db::updates::module::ModuleUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModuleCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rtrack module`.
pub async fn handle(
    action: &ModuleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ModuleCommands::Create { name, description } => {
            let module = ctx
                .service
                .create_catalog_item::<Module>(&NewModule {
                    name: name.clone(),
                    description: description.clone(),
                })
                .await?;
            output(&module, flags.format)
        }
        ModuleCommands::Update {
            id,
            name,
            description,
            clear_description,
        } => {
            let mut builder = ModuleUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(description) = description {
                builder = builder.description(Some(description.clone()));
            } else if *clear_description {
                builder = builder.description(None);
            }
            let module = ctx
                .service
                .update_catalog_item::<Module>(id, &builder.build())
                .await?;
            output(&module, flags.format)
        }
        ModuleCommands::Delete { id } => {
            ctx.service.delete_catalog_item::<Module>(id).await?;
            output(
                &Deleted {
                    table: Module::TABLE.as_str(),
                    id: id.clone(),
                },
                flags.format,
            )
        }
        ModuleCommands::List { sort } => {
            let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
            let modules = ctx
                .service
                .try_list_catalog::<Module>(sort.as_order(), Some(limit))
                .await?;
            output(&modules, flags.format)
        }
    }
}
