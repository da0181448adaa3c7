use rtrack_core::entities::MatrixEntry;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MatrixCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rtrack matrix`.
pub async fn handle(
    action: &MatrixCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MatrixCommands::Get { tickets } => {
            let entries = ctx.service.try_fetch_matrix(tickets).await?;
            output(&entries, flags.format)
        }
        MatrixCommands::Apply {
            ticket,
            component,
            off,
        } => {
            ctx.service.set_applies(ticket, component, !*off).await?;
            output(&read_back(ctx, ticket, component).await?, flags.format)
        }
        MatrixCommands::Note {
            ticket,
            component,
            text,
        } => {
            ctx.service.set_notes(ticket, component, text).await?;
            output(&read_back(ctx, ticket, component).await?, flags.format)
        }
    }
}

async fn read_back(
    ctx: &AppContext,
    ticket_id: &str,
    component_id: &str,
) -> anyhow::Result<MatrixEntry> {
    ctx.service
        .get_matrix_entry(ticket_id, component_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("matrix entry {ticket_id}/{component_id} missing after write"))
}
