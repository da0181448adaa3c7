#[path = "ticket/create.rs"]
mod create;
#[path = "ticket/list.rs"]
mod list;
#[path = "ticket/update.rs"]
mod update;

use rtrack_core::entities::Ticket;
use rtrack_db::repos::catalog::CatalogRecord;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketCommands;
use crate::commands::shared::Deleted;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rtrack ticket`.
pub async fn handle(
    action: &TicketCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TicketCommands::Create {
            title,
            description,
            status,
            qa_status,
            dev,
            team,
            environment,
            release,
            code_freeze,
        } => {
            create::run(
                create::Params {
                    title: title.clone(),
                    description: description.clone(),
                    status: status.clone(),
                    qa_status: qa_status.clone(),
                    dev: dev.clone(),
                    team: team.clone(),
                    environment: environment.clone(),
                    release: release.clone(),
                    code_freeze: *code_freeze,
                },
                ctx,
                flags,
            )
            .await
        }
        TicketCommands::Update {
            id,
            title,
            description,
            status,
            qa_status,
            dev,
            team,
            environment,
            release,
            unassign,
            code_freeze,
            clear,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    status: status.clone(),
                    qa_status: qa_status.clone(),
                    dev: dev.clone(),
                    team: team.clone(),
                    environment: environment.clone(),
                    release: release.clone(),
                    unassign: *unassign,
                    code_freeze: *code_freeze,
                    clear: clear.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TicketCommands::Delete { id } => {
            ctx.service.delete_ticket(id).await?;
            output(
                &Deleted {
                    table: Ticket::TABLE.as_str(),
                    id: id.clone(),
                },
                flags.format,
            )
        }
        TicketCommands::List {
            release,
            unassigned,
        } => list::run(release.as_deref(), *unassigned, ctx, flags).await,
    }
}
