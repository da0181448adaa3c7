use rtrack_core::entities::{Environment, Team};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Module { action } => commands::module::handle(&action, ctx, flags).await,
        Commands::Team { action } => commands::named::handle::<Team>(&action, ctx, flags).await,
        Commands::Environment { action } => {
            commands::named::handle::<Environment>(&action, ctx, flags).await
        }
        Commands::Status { action } => commands::status::handle(&action, ctx, flags).await,
        Commands::Component { action } => commands::component::handle(&action, ctx, flags).await,
        Commands::Developer { action } => commands::developer::handle(&action, ctx, flags).await,
        Commands::Release { action } => commands::release::handle(&action, ctx, flags).await,
        Commands::Ticket { action } => commands::ticket::handle(&action, ctx, flags).await,
        Commands::Matrix { action } => commands::matrix::handle(&action, ctx, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
    }
}
