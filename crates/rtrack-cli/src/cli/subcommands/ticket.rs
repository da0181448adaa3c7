use clap::{Subcommand, ValueEnum};

/// Nullable ticket references that `update --clear` can reset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TicketField {
    Description,
    Status,
    QaStatus,
    Dev,
    Team,
    Environment,
}

/// Ticket commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TicketCommands {
    /// Create a ticket. A release is required.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        qa_status: Option<String>,
        #[arg(long)]
        dev: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        environment: Option<String>,
        #[arg(long)]
        release: Option<String>,
        #[arg(long)]
        code_freeze: bool,
    },
    /// Update a ticket.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        qa_status: Option<String>,
        #[arg(long)]
        dev: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        environment: Option<String>,
        /// Move the ticket to another release.
        #[arg(long, conflicts_with = "unassign")]
        release: Option<String>,
        /// Detach the ticket from its release.
        #[arg(long)]
        unassign: bool,
        #[arg(long)]
        code_freeze: Option<bool>,
        /// Reset a nullable field (repeatable).
        #[arg(long, value_enum)]
        clear: Vec<TicketField>,
    },
    /// Delete a ticket.
    Delete { id: String },
    /// List tickets with their relations, newest first.
    List {
        #[arg(long, conflicts_with = "unassigned")]
        release: Option<String>,
        /// Only tickets without a release.
        #[arg(long)]
        unassigned: bool,
    },
}
