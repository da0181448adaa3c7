use clap::Subcommand;

use super::SortArgs;

/// Module catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModuleCommands {
    /// Create a module.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a module.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        #[arg(long)]
        clear_description: bool,
    },
    /// Delete a module.
    Delete { id: String },
    /// List modules.
    List {
        #[command(flatten)]
        sort: SortArgs,
    },
}
