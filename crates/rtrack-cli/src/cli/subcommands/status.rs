use clap::Subcommand;

use super::SortArgs;

/// Status catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StatusCommands {
    /// Create a status.
    Create {
        #[arg(long)]
        name: String,
        /// ticket or qa
        #[arg(long)]
        category: String,
        /// Display color, e.g. `#3a3`.
        #[arg(long)]
        color: Option<String>,
    },
    /// Update a status.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, conflicts_with = "clear_color")]
        color: Option<String>,
        #[arg(long)]
        clear_color: bool,
    },
    /// Delete a status.
    Delete { id: String },
    /// List statuses, optionally of one category.
    List {
        #[arg(long)]
        category: Option<String>,
        #[command(flatten)]
        sort: SortArgs,
    },
}
