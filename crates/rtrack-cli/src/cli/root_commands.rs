use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ComponentCommands, DeveloperCommands, MatrixCommands, ModuleCommands, NamedCommands,
    ReleaseCommands, StatusCommands, TicketCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Modules (product areas).
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },
    /// Teams.
    Team {
        #[command(subcommand)]
        action: NamedCommands,
    },
    /// Environments.
    Environment {
        #[command(subcommand)]
        action: NamedCommands,
    },
    /// Ticket and QA statuses.
    Status {
        #[command(subcommand)]
        action: StatusCommands,
    },
    /// Components (matrix columns) and their order.
    Component {
        #[command(subcommand)]
        action: ComponentCommands,
    },
    /// Developers and their module links.
    Developer {
        #[command(subcommand)]
        action: DeveloperCommands,
    },
    /// Releases.
    Release {
        #[command(subcommand)]
        action: ReleaseCommands,
    },
    /// Tickets.
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// Ticket x component matrix.
    Matrix {
        #[command(subcommand)]
        action: MatrixCommands,
    },
    /// Release-scoped dashboard of one module.
    Dashboard(DashboardArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Module ID.
    pub module: String,
    /// Show this release instead of the active one.
    #[arg(long)]
    pub release: Option<String>,
}
