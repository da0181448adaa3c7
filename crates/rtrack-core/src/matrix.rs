//! The sparse ticket x component matrix.
//!
//! Entries are persisted only once a cell has been touched. Reading an absent
//! cell yields `applies = false, notes = None`. The toggle view keeps an
//! optimistic per-cell state machine that reverts to the committed value
//! when the store write fails.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::MatrixEntry;

/// Value of one cell as rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CellValue {
    pub applies: bool,
    pub notes: Option<String>,
}

/// Lookup structure over the entries fetched for a set of tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixGrid {
    by_ticket: BTreeMap<String, BTreeMap<String, CellValue>>,
}

impl MatrixGrid {
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = MatrixEntry>) -> Self {
        let mut by_ticket: BTreeMap<String, BTreeMap<String, CellValue>> = BTreeMap::new();
        for entry in entries {
            by_ticket.entry(entry.ticket_id).or_default().insert(
                entry.component_id,
                CellValue {
                    applies: entry.applies,
                    notes: entry.notes,
                },
            );
        }
        Self { by_ticket }
    }

    /// Cell value, defaulting for pairs that were never evaluated.
    #[must_use]
    pub fn cell(&self, ticket_id: &str, component_id: &str) -> CellValue {
        self.by_ticket
            .get(ticket_id)
            .and_then(|row| row.get(component_id))
            .cloned()
            .unwrap_or_default()
    }

    /// Whether a row exists for the pair.
    #[must_use]
    pub fn is_evaluated(&self, ticket_id: &str, component_id: &str) -> bool {
        self.by_ticket
            .get(ticket_id)
            .is_some_and(|row| row.contains_key(component_id))
    }

    /// Number of persisted entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_ticket.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How a component column is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Boolean applies / not-applies toggle.
    Toggle,
    /// Free-text column with no toggle of its own; written via notes.
    Notes,
}

/// Column kind of a component given the configured notes column name.
#[must_use]
pub fn column_kind(component_name: &str, notes_component: &str) -> ColumnKind {
    if component_name == notes_component {
        ColumnKind::Notes
    } else {
        ColumnKind::Toggle
    }
}

/// Optimistic state of one toggle cell.
///
/// ```text
/// Committed(v) --begin_toggle--> Pending { next: !v, previous: v }
/// Pending { next, .. }     --resolve(ok)-->  Committed(next)
/// Pending { previous, .. } --resolve(err)--> Committed(previous)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Committed(bool),
    Pending { next: bool, previous: bool },
}

impl CellState {
    /// The value currently shown to the user.
    #[must_use]
    pub const fn shown(self) -> bool {
        match self {
            Self::Committed(value) => value,
            Self::Pending { next, .. } => next,
        }
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Start a toggle. Returns `None` while a previous write is in flight.
    #[must_use]
    pub const fn begin_toggle(self) -> Option<Self> {
        match self {
            Self::Committed(value) => Some(Self::Pending {
                next: !value,
                previous: value,
            }),
            Self::Pending { .. } => None,
        }
    }

    /// Settle a pending write. Committed states are returned unchanged.
    #[must_use]
    pub const fn resolve(self, succeeded: bool) -> Self {
        match self {
            Self::Pending { next, .. } if succeeded => Self::Committed(next),
            Self::Pending { previous, .. } => Self::Committed(previous),
            committed @ Self::Committed(_) => committed,
        }
    }
}
