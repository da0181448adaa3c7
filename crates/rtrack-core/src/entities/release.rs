use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A time-boxed unit of work within a module. Tickets are scoped to it.
///
/// Several releases of one module may be flagged `active` at once; the
/// scoping logic resolves that at read time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Release {
    pub id: String,
    pub name: String,
    pub module_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
    pub responsible_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A release joined with its module's and responsible developer's names.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReleaseWithModule {
    #[serde(flatten)]
    pub release: Release,
    pub module_name: Option<String>,
    pub responsible_name: Option<String>,
}
