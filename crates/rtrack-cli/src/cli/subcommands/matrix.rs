use clap::Subcommand;

/// Ticket x component matrix commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MatrixCommands {
    /// Show the entries of the given tickets.
    Get {
        #[arg(num_args = 0..)]
        tickets: Vec<String>,
    },
    /// Mark a component as applying to a ticket (or not, with --off).
    Apply {
        #[arg(long)]
        ticket: String,
        #[arg(long)]
        component: String,
        #[arg(long)]
        off: bool,
    },
    /// Write a note on a cell. Noted cells always apply.
    Note {
        #[arg(long)]
        ticket: String,
        #[arg(long)]
        component: String,
        text: String,
    },
}
