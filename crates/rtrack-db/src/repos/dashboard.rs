//! Dashboard loading: release scope, tickets, columns and matrix of a module.

use rtrack_core::entities::{Module, Release, Status};
use rtrack_core::enums::StatusCategory;
use rtrack_core::matrix::column_kind;
use rtrack_core::scoping::ReleaseScope;
use rtrack_core::views::{ComponentColumn, DashboardView};

use crate::error::DatabaseError;
use crate::repos::catalog::CatalogRecord;
use crate::service::TrackerService;

impl TrackerService {
    /// Resolve which release a module view shows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the release query fails.
    pub async fn release_scope(
        &self,
        module_id: &str,
        requested: Option<&str>,
    ) -> Result<ReleaseScope, DatabaseError> {
        let releases: Vec<Release> = self
            .try_releases(Some(module_id))
            .await?
            .into_iter()
            .map(|r| r.release)
            .collect();
        let scope = ReleaseScope::resolve(module_id, releases, requested);
        if let Some(requested) = requested
            && scope.current_id() != Some(requested)
        {
            tracing::warn!(module_id, requested, "requested release not in module, using default");
        }
        Ok(scope)
    }

    /// Statuses of one category, by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn statuses_by_category(
        &self,
        category: StatusCategory,
    ) -> Result<Vec<Status>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {} FROM statuses WHERE category = ?1 ORDER BY name ASC",
                    Status::SELECT_COLS
                ),
                [category.as_str()],
            )
            .await?;
        let mut statuses = Vec::new();
        while let Some(row) = rows.next().await? {
            statuses.push(Status::from_row(&row)?);
        }
        Ok(statuses)
    }

    /// Everything the module dashboard renders.
    ///
    /// With no current release the view carries no tickets and no matrix;
    /// ticket loading is skipped, not filtered to "unassigned". Reads after
    /// the module lookup degrade to empty lists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the module does not exist.
    pub async fn load_dashboard(
        &self,
        module_id: &str,
        requested_release: Option<&str>,
        notes_component: &str,
    ) -> Result<DashboardView, DatabaseError> {
        let module = self.get_catalog_item::<Module>(module_id).await?;

        let scope = self
            .release_scope(module_id, requested_release)
            .await
            .unwrap_or_else(|error| {
                tracing::error!(module_id, %error, "release scope unavailable");
                ReleaseScope::resolve(module_id, Vec::new(), None)
            });

        let (tickets, matrix) = match scope.ticket_filter() {
            Some(filter) => {
                let tickets = self.tickets_with_relations(&filter).await;
                let ids: Vec<String> = tickets.iter().map(|t| t.ticket.id.clone()).collect();
                let matrix = self.fetch_matrix(&ids).await;
                (tickets, matrix)
            }
            None => {
                tracing::debug!(module_id, "no current release, skipping tickets");
                (Vec::new(), Vec::new())
            }
        };

        let components = self
            .components_for_module(module_id)
            .await
            .into_iter()
            .map(|component| ComponentColumn {
                kind: column_kind(&component.name, notes_component),
                component,
            })
            .collect();

        let ticket_statuses = self
            .statuses_by_category(StatusCategory::Ticket)
            .await
            .unwrap_or_else(|error| {
                tracing::error!(%error, "ticket status fetch failed");
                Vec::new()
            });
        let qa_statuses = self
            .statuses_by_category(StatusCategory::Qa)
            .await
            .unwrap_or_else(|error| {
                tracing::error!(%error, "qa status fetch failed");
                Vec::new()
            });

        Ok(DashboardView {
            module,
            scope,
            tickets,
            components,
            matrix,
            ticket_statuses,
            qa_statuses,
        })
    }
}
