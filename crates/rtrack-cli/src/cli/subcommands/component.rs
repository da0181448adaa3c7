use clap::Subcommand;

use super::SortArgs;

/// Component (matrix column) commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ComponentCommands {
    /// Create a component. Without --position it is appended after the last column.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        module: String,
        #[arg(long)]
        position: Option<i64>,
    },
    /// Update a component.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        module: Option<String>,
        #[arg(long)]
        position: Option<i64>,
    },
    /// Delete a component.
    Delete { id: String },
    /// List components, in column order when --module is given.
    List {
        #[arg(long, conflicts_with = "sort")]
        module: Option<String>,
        #[command(flatten)]
        sort: SortArgs,
    },
    /// Reorder a module's columns to the given ID sequence.
    Reorder {
        #[arg(long)]
        module: String,
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}
