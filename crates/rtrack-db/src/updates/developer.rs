//! Developer update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeveloperUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
}

#[derive(Default)]
pub struct DeveloperUpdateBuilder(DeveloperUpdate);

impl DeveloperUpdateBuilder {
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
    pub fn email(mut self, email: Option<String>) -> Self {
        self.0.email = Some(email);
        self
    }

    #[must_use]
    pub fn build(self) -> DeveloperUpdate {
        self.0
    }
}
