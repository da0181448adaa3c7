//! Update for name-only records (teams, environments).

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct NameUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NameUpdate {
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
