use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StatusCategory;

/// A ticket or QA status. Not scoped to a module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Status {
    pub id: String,
    pub name: String,
    pub category: StatusCategory,
    /// Display color, e.g. `#22c55e`.
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}
