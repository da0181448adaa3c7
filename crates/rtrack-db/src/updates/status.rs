//! Status update builder.

use rtrack_core::enums::StatusCategory;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<StatusCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<String>>,
}

#[derive(Default)]
pub struct StatusUpdateBuilder(StatusUpdate);

impl StatusUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: StatusCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn color(mut self, color: Option<String>) -> Self {
        self.0.color = Some(color);
        self
    }

    #[must_use]
    pub fn build(self) -> StatusUpdate {
        self.0
    }
}
