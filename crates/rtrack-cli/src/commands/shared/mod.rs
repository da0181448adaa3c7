pub mod limit;
pub mod parse;

use serde::Serialize;

/// Confirmation printed by every `delete` command.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub table: &'static str,
    pub id: String,
}
