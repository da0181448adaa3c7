//! Matrix repository: the sparse ticket x component grid.
//!
//! Every write is an upsert on `(ticket_id, component_id)`; concurrent
//! writers to one cell resolve by last write wins. Absent rows read as
//! "not applicable, no notes".

use rtrack_core::entities::MatrixEntry;
use rtrack_core::enums::DASHBOARD_PATH;
use rtrack_core::matrix::CellState;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, placeholders};
use crate::service::TrackerService;

const SELECT_COLS: &str = "ticket_id, component_id, applies, notes";

fn row_to_entry(row: &libsql::Row) -> Result<MatrixEntry, DatabaseError> {
    Ok(MatrixEntry {
        ticket_id: row.get(0)?,
        component_id: row.get(1)?,
        applies: get_bool(row, 2)?,
        notes: get_opt_string(row, 3)?,
    })
}

/// Result of an applicability toggle driven through [`CellState`].
#[derive(Debug)]
pub struct ToggleOutcome {
    /// Committed state after the write settled (reverted on failure).
    pub state: CellState,
    pub error: Option<DatabaseError>,
}

impl TrackerService {
    /// Entries for the given tickets. An empty ticket set returns an empty
    /// list without querying.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn try_fetch_matrix(
        &self,
        ticket_ids: &[String],
    ) -> Result<Vec<MatrixEntry>, DatabaseError> {
        if ticket_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {SELECT_COLS} FROM ticket_component_matrix WHERE ticket_id IN ({})",
            placeholders(1, ticket_ids.len())
        );
        let params: Vec<libsql::Value> = ticket_ids.iter().map(|id| id.as_str().into()).collect();
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }

    /// Like [`Self::try_fetch_matrix`], degrading to an empty list.
    pub async fn fetch_matrix(&self, ticket_ids: &[String]) -> Vec<MatrixEntry> {
        self.try_fetch_matrix(ticket_ids)
            .await
            .unwrap_or_else(|error| {
                tracing::error!(tickets = ticket_ids.len(), %error, "matrix fetch failed");
                Vec::new()
            })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_matrix_entry(
        &self,
        ticket_id: &str,
        component_id: &str,
    ) -> Result<Option<MatrixEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM ticket_component_matrix \
                     WHERE ticket_id = ?1 AND component_id = ?2"
                ),
                [ticket_id, component_id],
            )
            .await?;
        rows.next().await?.map(|row| row_to_entry(&row)).transpose()
    }

    /// Upsert the applicability flag, keeping any existing notes.
    ///
    /// # Errors
    ///
    /// Returns the store error, e.g. for an unknown ticket or component.
    pub async fn set_applies(
        &self,
        ticket_id: &str,
        component_id: &str,
        applies: bool,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO ticket_component_matrix (ticket_id, component_id, applies)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT (ticket_id, component_id) DO UPDATE SET applies = excluded.applies",
                libsql::params![ticket_id, component_id, i64::from(applies)],
            )
            .await?;
        tracing::debug!(ticket_id, component_id, applies, "matrix applies set");
        self.views().invalidate(DASHBOARD_PATH);
        Ok(())
    }

    /// Upsert notes on a cell. A noted cell always applies.
    ///
    /// # Errors
    ///
    /// Returns the store error, e.g. for an unknown ticket or component.
    pub async fn set_notes(
        &self,
        ticket_id: &str,
        component_id: &str,
        notes: &str,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO ticket_component_matrix (ticket_id, component_id, applies, notes)
                 VALUES (?1, ?2, 1, ?3)
                 ON CONFLICT (ticket_id, component_id)
                 DO UPDATE SET applies = 1, notes = excluded.notes",
                [ticket_id, component_id, notes],
            )
            .await?;
        tracing::debug!(ticket_id, component_id, "matrix notes set");
        self.views().invalidate(DASHBOARD_PATH);
        Ok(())
    }

    /// Flip a cell optimistically: write the pending value, then commit it or
    /// fall back to the previous value if the write fails.
    ///
    /// A cell that is already pending is left as is and reported as
    /// `DatabaseError::InvalidState`.
    pub async fn toggle_cell(
        &self,
        ticket_id: &str,
        component_id: &str,
        current: CellState,
    ) -> ToggleOutcome {
        let Some(pending) = current.begin_toggle() else {
            return ToggleOutcome {
                state: current,
                error: Some(DatabaseError::InvalidState(format!(
                    "cell {ticket_id}/{component_id} already has a write in flight"
                ))),
            };
        };

        match self.set_applies(ticket_id, component_id, pending.shown()).await {
            Ok(()) => ToggleOutcome {
                state: pending.resolve(true),
                error: None,
            },
            Err(error) => {
                tracing::warn!(ticket_id, component_id, %error, "toggle reverted");
                ToggleOutcome {
                    state: pending.resolve(false),
                    error: Some(error),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{
        seed_components, seed_module, seed_release, seed_ticket, test_service,
    };

    struct Fixture {
        svc: TrackerService,
        tickets: Vec<String>,
        components: Vec<String>,
    }

    async fn fixture() -> Fixture {
        let svc = test_service().await;
        let module = seed_module(&svc, "Checkout").await;
        let release = seed_release(&svc, &module.id, "2026.10", true).await;
        let components = seed_components(&svc, &module.id, &["API", "Web", "COMMENTS"])
            .await
            .into_iter()
            .map(|c| c.id)
            .collect();
        let mut tickets = Vec::new();
        for title in ["Totals", "Coupons"] {
            tickets.push(seed_ticket(&svc, &release.id, title).await.id);
        }
        Fixture {
            svc,
            tickets,
            components,
        }
    }

    #[tokio::test]
    async fn empty_ticket_set_short_circuits() {
        let f = fixture().await;
        f.svc.set_applies(&f.tickets[0], &f.components[0], true).await.unwrap();
        assert!(f.svc.try_fetch_matrix(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn set_applies_then_fetch_yields_one_entry() {
        let f = fixture().await;
        let (t, c) = (&f.tickets[0], &f.components[1]);
        f.svc.set_applies(t, c, true).await.unwrap();
        f.svc.set_applies(t, c, true).await.unwrap();

        let entries = f.svc.fetch_matrix(&[t.clone()]).await;
        assert_eq!(
            entries,
            vec![MatrixEntry {
                ticket_id: t.clone(),
                component_id: c.clone(),
                applies: true,
                notes: None,
            }]
        );
    }

    #[tokio::test]
    async fn fetch_restricts_to_requested_tickets() {
        let f = fixture().await;
        f.svc.set_applies(&f.tickets[0], &f.components[0], true).await.unwrap();
        f.svc.set_applies(&f.tickets[1], &f.components[0], false).await.unwrap();

        let only_second = f.svc.fetch_matrix(&[f.tickets[1].clone()]).await;
        assert_eq!(only_second.len(), 1);
        assert!(!only_second[0].applies);
        assert_eq!(f.svc.fetch_matrix(&f.tickets).await.len(), 2);
    }

    #[tokio::test]
    async fn set_notes_forces_applies() {
        let f = fixture().await;
        let (t, c) = (&f.tickets[0], &f.components[2]);
        f.svc.set_applies(t, c, false).await.unwrap();
        f.svc.set_notes(t, c, "needs QA sign-off").await.unwrap();

        let entry = f.svc.get_matrix_entry(t, c).await.unwrap().unwrap();
        assert!(entry.applies);
        assert_eq!(entry.notes.as_deref(), Some("needs QA sign-off"));

        // Clearing applicability keeps the notes.
        f.svc.set_applies(t, c, false).await.unwrap();
        let entry = f.svc.get_matrix_entry(t, c).await.unwrap().unwrap();
        assert!(!entry.applies);
        assert_eq!(entry.notes.as_deref(), Some("needs QA sign-off"));
    }

    #[tokio::test]
    async fn notes_on_fresh_cell_apply() {
        let f = fixture().await;
        let (t, c) = (&f.tickets[1], &f.components[0]);
        assert!(f.svc.get_matrix_entry(t, c).await.unwrap().is_none());
        f.svc.set_notes(t, c, "").await.unwrap();
        assert!(f.svc.get_matrix_entry(t, c).await.unwrap().unwrap().applies);
        assert!(f.svc.views().is_stale("/dashboard"));
    }

    #[tokio::test]
    async fn failed_matrix_read_degrades_to_empty() {
        let f = fixture().await;
        f.svc.set_applies(&f.tickets[0], &f.components[0], true).await.unwrap();
        f.svc
            .db()
            .conn()
            .execute("DROP TABLE ticket_component_matrix", ())
            .await
            .unwrap();

        assert!(f.svc.try_fetch_matrix(&f.tickets).await.is_err());
        assert_eq!(f.svc.fetch_matrix(&f.tickets).await, vec![]);
    }

    #[tokio::test]
    async fn unknown_component_is_rejected() {
        let f = fixture().await;
        let result = f.svc.set_applies(&f.tickets[0], "cmp-00000000", true).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn toggle_commits_on_success() {
        let f = fixture().await;
        let outcome = f
            .svc
            .toggle_cell(&f.tickets[0], &f.components[0], CellState::Committed(false))
            .await;
        assert!(outcome.error.is_none());
        assert_eq!(outcome.state, CellState::Committed(true));
        let entry = f
            .svc
            .get_matrix_entry(&f.tickets[0], &f.components[0])
            .await
            .unwrap()
            .unwrap();
        assert!(entry.applies);
    }

    #[tokio::test]
    async fn toggle_reverts_on_failure() {
        let f = fixture().await;
        let outcome = f
            .svc
            .toggle_cell(&f.tickets[0], "cmp-00000000", CellState::Committed(true))
            .await;
        assert!(outcome.error.is_some());
        assert_eq!(outcome.state, CellState::Committed(true));
    }

    #[tokio::test]
    async fn toggle_refuses_while_pending() {
        let f = fixture().await;
        let pending = CellState::Pending {
            next: true,
            previous: false,
        };
        let outcome = f
            .svc
            .toggle_cell(&f.tickets[0], &f.components[0], pending)
            .await;
        assert_eq!(outcome.state, pending);
        assert!(matches!(outcome.error, Some(DatabaseError::InvalidState(_))));
        assert!(
            f.svc
                .get_matrix_entry(&f.tickets[0], &f.components[0])
                .await
                .unwrap()
                .is_none()
        );
    }
}
