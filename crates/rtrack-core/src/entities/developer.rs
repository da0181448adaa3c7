use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Join row: the developer is assignable within the module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeveloperModule {
    pub developer_id: String,
    pub module_id: String,
    pub created_at: DateTime<Utc>,
}

/// A developer with the IDs of every module it is linked to.
///
/// Order of `module_ids` is not meaningful.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeveloperWithModules {
    #[serde(flatten)]
    pub developer: Developer,
    pub module_ids: Vec<String>,
}
