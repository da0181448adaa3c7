use rtrack_core::drafts::NewStatus;
use rtrack_core::entities::Status;
use rtrack_db::repos::catalog::CatalogRecord;
use rtrack_db::updates::status::StatusUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StatusCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse::parse_category;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rtrack status`.
pub async fn handle(
    action: &StatusCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StatusCommands::Create {
            name,
            category,
            color,
        } => {
            let status = ctx
                .service
                .create_catalog_item::<Status>(&NewStatus {
                    name: name.clone(),
                    category: parse_category(category)?,
                    color: color.clone(),
                })
                .await?;
            output(&status, flags.format)
        }
        StatusCommands::Update {
            id,
            name,
            category,
            color,
            clear_color,
        } => {
            let mut builder = StatusUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(category) = category {
                builder = builder.category(parse_category(category)?);
            }
            if let Some(color) = color {
                builder = builder.color(Some(color.clone()));
            } else if *clear_color {
                builder = builder.color(None);
            }
            let status = ctx
                .service
                .update_catalog_item::<Status>(id, &builder.build())
                .await?;
            output(&status, flags.format)
        }
        StatusCommands::Delete { id } => {
            ctx.service.delete_catalog_item::<Status>(id).await?;
            output(
                &Deleted {
                    table: Status::TABLE.as_str(),
                    id: id.clone(),
                },
                flags.format,
            )
        }
        StatusCommands::List { category, sort } => {
            let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
            let mut statuses = match category {
                Some(raw) => {
                    let category = parse_category(raw)?;
                    let mut all = ctx
                        .service
                        .try_list_catalog::<Status>(sort.as_order(), None)
                        .await?;
                    all.retain(|status| status.category == category);
                    all
                }
                None => {
                    ctx.service
                        .try_list_catalog::<Status>(sort.as_order(), Some(limit))
                        .await?
                }
            };
            truncate_to(&mut statuses, limit);
            output(&statuses, flags.format)
        }
    }
}
