//! Ticket matrix rendering options.

use serde::{Deserialize, Serialize};

fn default_notes_component() -> String {
    "COMMENTS".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatrixConfig {
    /// Component name rendered as a free-text notes column instead of a toggle.
    #[serde(default = "default_notes_component")]
    pub notes_component: String,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            notes_component: default_notes_component(),
        }
    }
}
