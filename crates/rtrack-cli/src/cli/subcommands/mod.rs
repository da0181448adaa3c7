mod component;
mod developer;
mod matrix;
mod module;
mod named;
mod release;
mod status;
mod ticket;

pub use component::ComponentCommands;
pub use developer::DeveloperCommands;
pub use matrix::MatrixCommands;
pub use module::ModuleCommands;
pub use named::NamedCommands;
pub use release::ReleaseCommands;
pub use status::StatusCommands;
pub use ticket::{TicketCommands, TicketField};

use clap::{Args, ValueEnum};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ordering flags shared by catalog `list` commands.
#[derive(Clone, Debug, Default, Args)]
pub struct SortArgs {
    /// Column to sort by; unknown columns fall back to the default order.
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort direction (default asc when --sort is given).
    #[arg(long, value_enum, requires = "sort")]
    pub order: Option<SortDirection>,
}

impl SortArgs {
    /// `(column, ascending)` for the store, or `None` for the default order.
    #[must_use]
    pub fn as_order(&self) -> Option<(&str, bool)> {
        self.sort
            .as_deref()
            .map(|column| (column, self.order != Some(SortDirection::Desc)))
    }
}
