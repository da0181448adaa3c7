//! Component update builder.
//!
//! Changing `sort_order` here writes a single row; use the reorder operation
//! to move several columns without colliding on `(module_id, sort_order)`.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

#[derive(Default)]
pub struct ComponentUpdateBuilder(ComponentUpdate);

impl ComponentUpdateBuilder {
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
    pub fn module_id(mut self, module_id: impl Into<String>) -> Self {
        self.0.module_id = Some(module_id.into());
        self
    }

    #[must_use]
    pub const fn sort_order(mut self, sort_order: i64) -> Self {
        self.0.sort_order = Some(sort_order);
        self
    }

    #[must_use]
    pub fn build(self) -> ComponentUpdate {
        self.0
    }
}
