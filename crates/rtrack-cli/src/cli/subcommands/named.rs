use clap::Subcommand;

use super::SortArgs;

/// Commands for name-only catalogs (teams, environments).
#[derive(Clone, Debug, Subcommand)]
pub enum NamedCommands {
    /// Create an entry.
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename an entry.
    Update {
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete an entry.
    Delete { id: String },
    /// List entries.
    List {
        #[command(flatten)]
        sort: SortArgs,
    },
}
