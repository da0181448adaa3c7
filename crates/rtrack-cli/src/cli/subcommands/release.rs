use chrono::NaiveDate;
use clap::Subcommand;

/// Release commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReleaseCommands {
    /// Create a release.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        module: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: Option<NaiveDate>,
        /// YYYY-MM-DD
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long)]
        active: bool,
        /// Responsible developer ID.
        #[arg(long)]
        responsible: Option<String>,
    },
    /// Update a release.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        module: Option<String>,
        #[arg(long, conflicts_with = "clear_start")]
        start: Option<NaiveDate>,
        #[arg(long)]
        clear_start: bool,
        #[arg(long, conflicts_with = "clear_end")]
        end: Option<NaiveDate>,
        #[arg(long)]
        clear_end: bool,
        #[arg(long)]
        active: Option<bool>,
        #[arg(long, conflicts_with = "clear_responsible")]
        responsible: Option<String>,
        #[arg(long)]
        clear_responsible: bool,
    },
    /// Delete a release.
    Delete { id: String },
    /// List releases, newest first.
    List {
        #[arg(long)]
        module: Option<String>,
    },
}
