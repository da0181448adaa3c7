//! Ticket update builder.
//!
//! Unlike creation, an update may clear `release_id`, moving the ticket to
//! the unassigned bucket.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_status_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_freeze: Option<bool>,
}

#[derive(Default)]
pub struct TicketUpdateBuilder(TicketUpdate);

impl TicketUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn status_id(mut self, status_id: Option<String>) -> Self {
        self.0.status_id = Some(status_id);
        self
    }

    #[must_use]
    pub fn qa_status_id(mut self, qa_status_id: Option<String>) -> Self {
        self.0.qa_status_id = Some(qa_status_id);
        self
    }

    #[must_use]
    pub fn dev_id(mut self, dev_id: Option<String>) -> Self {
        self.0.dev_id = Some(dev_id);
        self
    }

    #[must_use]
    pub fn team_id(mut self, team_id: Option<String>) -> Self {
        self.0.team_id = Some(team_id);
        self
    }

    #[must_use]
    pub fn environment_id(mut self, environment_id: Option<String>) -> Self {
        self.0.environment_id = Some(environment_id);
        self
    }

    #[must_use]
    pub fn release_id(mut self, release_id: Option<String>) -> Self {
        self.0.release_id = Some(release_id);
        self
    }

    #[must_use]
    pub const fn code_freeze(mut self, code_freeze: bool) -> Self {
        self.0.code_freeze = Some(code_freeze);
        self
    }

    #[must_use]
    pub fn build(self) -> TicketUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_set_fields_serialize() {
        let update = TicketUpdateBuilder::new()
            .title("Retry payment")
            .release_id(None)
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["title"], "Retry payment");
        assert!(json["release_id"].is_null());
        assert!(json.get("release_id").is_some());
        assert!(json.get("status_id").is_none());
    }
}
