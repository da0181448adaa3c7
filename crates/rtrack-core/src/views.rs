//! Composite read views returned to the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Component, MatrixEntry, Module, Status, TicketWithRelations};
use crate::matrix::{CellValue, ColumnKind, MatrixGrid};
use crate::scoping::ReleaseScope;

/// A component rendered as a matrix column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentColumn {
    #[serde(flatten)]
    pub component: Component,
    pub kind: ColumnKind,
}

/// Everything the module dashboard renders.
///
/// When `scope.current` is `None`, `tickets` and `matrix` are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DashboardView {
    pub module: Module,
    pub scope: ReleaseScope,
    pub tickets: Vec<TicketWithRelations>,
    /// Columns in `sort_order`.
    pub components: Vec<ComponentColumn>,
    pub matrix: Vec<MatrixEntry>,
    pub ticket_statuses: Vec<Status>,
    pub qa_statuses: Vec<Status>,
}

/// One rendered matrix row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatrixRow {
    pub ticket_id: String,
    pub title: String,
    /// Cells in column order.
    pub cells: Vec<CellValue>,
}

impl DashboardView {
    #[must_use]
    pub fn grid(&self) -> MatrixGrid {
        MatrixGrid::from_entries(self.matrix.iter().cloned())
    }

    /// Ticket rows with a cell per in-scope component.
    ///
    /// Entries for components outside the module are ignored here; the store
    /// does not filter them.
    #[must_use]
    pub fn rows(&self) -> Vec<MatrixRow> {
        let grid = self.grid();
        self.tickets
            .iter()
            .map(|t| MatrixRow {
                ticket_id: t.ticket.id.clone(),
                title: t.ticket.title.clone(),
                cells: self
                    .components
                    .iter()
                    .map(|c| grid.cell(&t.ticket.id, &c.component.id))
                    .collect(),
            })
            .collect()
    }
}
