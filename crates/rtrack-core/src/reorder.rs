//! Two-phase component reorder plan.
//!
//! `sort_order` is unique per module in the store, so writing final positions
//! one row at a time can collide with a row that still holds its old value
//! (swapping 1 and 2, for instance). The plan therefore writes every row
//! twice:
//!
//! 1. **displace**: each row gets `-(position) - 1000`, distinct and negative,
//!    disjoint from every valid final value;
//! 2. **commit**: each row gets its final positive `position`.
//!
//! Rows are written individually; nothing here is atomic. Module membership
//! is not checked: all IDs are assumed to belong to the same module.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Offset pushing displaced values below any final value.
pub const DISPLACEMENT_OFFSET: i64 = 1000;

/// Largest position whose displaced value still fits in an `i64`.
pub const MAX_POSITION: i64 = i64::MAX - DISPLACEMENT_OFFSET;

/// Temporary value written during the displacement phase.
#[must_use]
pub const fn displaced_sort_order(position: i64) -> i64 {
    0_i64
        .saturating_sub(position)
        .saturating_sub(DISPLACEMENT_OFFSET)
}

/// Requested final position of a component (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentPosition {
    pub id: String,
    pub position: i64,
}

/// A single row write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortWrite {
    pub component_id: String,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReorderPhase {
    Displace,
    Commit,
}

impl ReorderPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Displace => "displace",
            Self::Commit => "commit",
        }
    }
}

impl std::fmt::Display for ReorderPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered row writes for both phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReorderPlan {
    pub displace: Vec<SortWrite>,
    pub commit: Vec<SortWrite>,
}

impl ReorderPlan {
    /// Plan from explicit positions.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a position is outside
    /// `1..=MAX_POSITION`, or if a component or position appears twice (the
    /// commit phase would collide).
    pub fn from_positions(items: &[ComponentPosition]) -> Result<Self, CoreError> {
        let mut ids = HashSet::new();
        let mut positions = HashSet::new();
        for item in items {
            if item.position < 1 {
                return Err(CoreError::Validation(format!(
                    "position for component {} must be positive, got {}",
                    item.id, item.position
                )));
            }
            if item.position > MAX_POSITION {
                return Err(CoreError::Validation(format!(
                    "position for component {} must be at most {MAX_POSITION}, got {}",
                    item.id, item.position
                )));
            }
            if !ids.insert(item.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "component {} appears more than once",
                    item.id
                )));
            }
            if !positions.insert(item.position) {
                return Err(CoreError::Validation(format!(
                    "position {} is assigned more than once",
                    item.position
                )));
            }
        }

        let displace = items
            .iter()
            .map(|item| SortWrite {
                component_id: item.id.clone(),
                sort_order: displaced_sort_order(item.position),
            })
            .collect();
        let commit = items
            .iter()
            .map(|item| SortWrite {
                component_id: item.id.clone(),
                sort_order: item.position,
            })
            .collect();
        Ok(Self { displace, commit })
    }

    /// Plan placing the IDs at positions `1..=N` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if an ID appears twice.
    pub fn from_order<S: AsRef<str>>(ids: &[S]) -> Result<Self, CoreError> {
        let items = ids
            .iter()
            .zip(1_i64..)
            .map(|(id, position)| ComponentPosition {
                id: id.as_ref().to_string(),
                position,
            })
            .collect::<Vec<_>>();
        Self::from_positions(&items)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commit.is_empty()
    }

    /// Both phases in execution order.
    #[must_use]
    pub fn phases(&self) -> [(ReorderPhase, &[SortWrite]); 2] {
        [
            (ReorderPhase::Displace, self.displace.as_slice()),
            (ReorderPhase::Commit, self.commit.as_slice()),
        ]
    }
}
