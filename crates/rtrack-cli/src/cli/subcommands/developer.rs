use clap::Subcommand;

/// Developer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DeveloperCommands {
    /// Create a developer linked to zero or more modules.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        /// Module ID (repeatable).
        #[arg(long = "module")]
        modules: Vec<String>,
    },
    /// Update a developer. Any --module replaces all module links.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, conflicts_with = "clear_email")]
        email: Option<String>,
        #[arg(long)]
        clear_email: bool,
        #[arg(long = "module", conflicts_with = "clear_modules")]
        modules: Vec<String>,
        /// Remove every module link.
        #[arg(long)]
        clear_modules: bool,
    },
    /// Delete a developer.
    Delete { id: String },
    /// List developers with their modules.
    List {
        #[arg(long)]
        module: Option<String>,
    },
}
