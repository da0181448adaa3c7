use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A unit of work tracked against a release.
///
/// `release_id` is required on creation but may later be cleared
/// (ticket moved back to "unassigned").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status_id: Option<String>,
    pub qa_status_id: Option<String>,
    pub dev_id: Option<String>,
    pub team_id: Option<String>,
    pub environment_id: Option<String>,
    pub release_id: Option<String>,
    pub code_freeze: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `{id, name}` of a joined reference row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RelatedRef {
    pub id: String,
    pub name: String,
}

/// A joined status with its display color.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusRef {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}

/// A ticket with every referenced row resolved for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TicketWithRelations {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub status: Option<StatusRef>,
    pub qa_status: Option<StatusRef>,
    pub developer: Option<RelatedRef>,
    pub team: Option<RelatedRef>,
    pub environment: Option<RelatedRef>,
    pub release: Option<RelatedRef>,
}
