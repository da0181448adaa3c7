use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Applicability and notes for one `(ticket, component)` pair.
///
/// The table is sparse: a missing row reads as `applies = false, notes = None`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MatrixEntry {
    pub ticket_id: String,
    pub component_id: String,
    pub applies: bool,
    pub notes: Option<String>,
}
