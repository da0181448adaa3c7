use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A matrix column belonging to exactly one module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub module_id: String,
    /// Left-to-right column position, unique within `module_id`.
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
}
