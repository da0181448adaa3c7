//! Ticket repository: CRUD and the denormalized relation view.

use libsql::Value;

use rtrack_core::drafts::NewTicket;
use rtrack_core::entities::{RelatedRef, StatusRef, Ticket, TicketWithRelations};
use rtrack_core::enums::CatalogTable;
use rtrack_core::ids::PREFIX_TICKET;
use rtrack_core::scoping::ReleaseFilter;

use crate::error::DatabaseError;
use crate::helpers::{bool_value, get_bool, get_opt_string, opt_text, parse_datetime};
use crate::repos::catalog::CatalogRecord;
use crate::service::TrackerService;
use crate::updates::ticket::TicketUpdate;

const TICKET_COLS: &str = "t.id, t.title, t.description, t.status_id, t.qa_status_id, t.dev_id, \
     t.team_id, t.environment_id, t.release_id, t.code_freeze, t.created_at, t.updated_at";

impl CatalogRecord for Ticket {
    const TABLE: CatalogTable = CatalogTable::Tickets;
    const ID_PREFIX: &'static str = PREFIX_TICKET;
    const SELECT_COLS: &'static str = "id, title, description, status_id, qa_status_id, dev_id, \
         team_id, environment_id, release_id, code_freeze, created_at, updated_at";
    const SORTABLE: &'static [&'static str] = &["title", "created_at", "updated_at"];
    const DEFAULT_ORDER: (&'static str, bool) = ("created_at", false);
    const HAS_UPDATED_AT: bool = true;
    const VIEW_PATHS: &'static [&'static str] = &[CatalogTable::Tickets.view_path()];

    type New = NewTicket;
    type Update = TicketUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: get_opt_string(row, 2)?,
            status_id: get_opt_string(row, 3)?,
            qa_status_id: get_opt_string(row, 4)?,
            dev_id: get_opt_string(row, 5)?,
            team_id: get_opt_string(row, 6)?,
            environment_id: get_opt_string(row, 7)?,
            release_id: get_opt_string(row, 8)?,
            code_freeze: get_bool(row, 9)?,
            created_at: parse_datetime(&row.get::<String>(10)?)?,
            updated_at: parse_datetime(&row.get::<String>(11)?)?,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn insert_values(draft: &NewTicket) -> Result<Vec<(&'static str, Value)>, DatabaseError> {
        Ok(vec![
            ("title", draft.title.trim().into()),
            ("description", opt_text(draft.description.as_deref())),
            ("status_id", opt_text(draft.status_id.as_deref())),
            ("qa_status_id", opt_text(draft.qa_status_id.as_deref())),
            ("dev_id", opt_text(draft.dev_id.as_deref())),
            ("team_id", opt_text(draft.team_id.as_deref())),
            ("environment_id", opt_text(draft.environment_id.as_deref())),
            ("release_id", opt_text(draft.release_id.as_deref())),
            ("code_freeze", bool_value(draft.code_freeze)),
        ])
    }

    fn update_values(update: &TicketUpdate) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(title) = &update.title {
            values.push(("title", title.trim().into()));
        }
        let references = [
            ("description", &update.description),
            ("status_id", &update.status_id),
            ("qa_status_id", &update.qa_status_id),
            ("dev_id", &update.dev_id),
            ("team_id", &update.team_id),
            ("environment_id", &update.environment_id),
            ("release_id", &update.release_id),
        ];
        for (column, value) in references {
            if let Some(value) = value {
                values.push((column, opt_text(value.as_deref())));
            }
        }
        if let Some(code_freeze) = update.code_freeze {
            values.push(("code_freeze", bool_value(code_freeze)));
        }
        values
    }
}

fn related(row: &libsql::Row, idx: i32) -> Result<Option<RelatedRef>, DatabaseError> {
    let Some(id) = get_opt_string(row, idx)? else {
        return Ok(None);
    };
    Ok(Some(RelatedRef {
        id,
        name: get_opt_string(row, idx + 1)?.unwrap_or_default(),
    }))
}

fn status_ref(row: &libsql::Row, idx: i32) -> Result<Option<StatusRef>, DatabaseError> {
    let Some(id) = get_opt_string(row, idx)? else {
        return Ok(None);
    };
    Ok(Some(StatusRef {
        id,
        name: get_opt_string(row, idx + 1)?.unwrap_or_default(),
        color: get_opt_string(row, idx + 2)?,
    }))
}

fn row_to_ticket_with_relations(row: &libsql::Row) -> Result<TicketWithRelations, DatabaseError> {
    Ok(TicketWithRelations {
        ticket: Ticket::from_row(row)?,
        status: status_ref(row, 12)?,
        qa_status: status_ref(row, 15)?,
        developer: related(row, 18)?,
        team: related(row, 20)?,
        environment: related(row, 22)?,
        release: related(row, 24)?,
    })
}

impl TrackerService {
    /// Tickets with every reference resolved, newest first.
    ///
    /// `ReleaseFilter::All` applies no filter; `Unassigned` matches only
    /// tickets with no release.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn try_tickets_with_relations(
        &self,
        filter: &ReleaseFilter,
    ) -> Result<Vec<TicketWithRelations>, DatabaseError> {
        let (clause, params): (&str, Vec<Value>) = match filter {
            ReleaseFilter::All => ("", Vec::new()),
            ReleaseFilter::Unassigned => ("WHERE t.release_id IS NULL", Vec::new()),
            ReleaseFilter::Release(id) => ("WHERE t.release_id = ?1", vec![id.as_str().into()]),
        };
        let sql = format!(
            "SELECT {TICKET_COLS}, \
             s.id, s.name, s.color, q.id, q.name, q.color, \
             d.id, d.name, tm.id, tm.name, e.id, e.name, r.id, r.name \
             FROM tickets t \
             LEFT JOIN statuses s ON s.id = t.status_id \
             LEFT JOIN statuses q ON q.id = t.qa_status_id \
             LEFT JOIN developers d ON d.id = t.dev_id \
             LEFT JOIN teams tm ON tm.id = t.team_id \
             LEFT JOIN environments e ON e.id = t.environment_id \
             LEFT JOIN releases r ON r.id = t.release_id \
             {clause} ORDER BY t.created_at DESC, t.rowid DESC"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut tickets = Vec::new();
        while let Some(row) = rows.next().await? {
            tickets.push(row_to_ticket_with_relations(&row)?);
        }
        Ok(tickets)
    }

    /// Like [`Self::try_tickets_with_relations`], degrading to an empty list.
    pub async fn tickets_with_relations(&self, filter: &ReleaseFilter) -> Vec<TicketWithRelations> {
        self.try_tickets_with_relations(filter)
            .await
            .unwrap_or_else(|error| {
                tracing::error!(?filter, %error, "ticket fetch failed");
                Vec::new()
            })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` without writing if the title is
    /// blank or no release is given, or the store error for a bad reference.
    pub async fn create_ticket(&self, draft: &NewTicket) -> Result<Ticket, DatabaseError> {
        self.create_catalog_item::<Ticket>(draft).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the ticket does not exist.
    pub async fn update_ticket(&self, id: &str, update: &TicketUpdate) -> Result<Ticket, DatabaseError> {
        self.update_catalog_item::<Ticket>(id, update).await
    }

    /// Delete a ticket; its matrix entries go with it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the ticket does not exist.
    pub async fn delete_ticket(&self, id: &str) -> Result<(), DatabaseError> {
        self.delete_catalog_item::<Ticket>(id).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rtrack_core::drafts::{NewStatus, NewTeam};
    use rtrack_core::entities::{Status, Team};
    use rtrack_core::enums::StatusCategory;

    use super::*;
    use crate::test_support::helpers::{seed_module, seed_release, seed_ticket, test_service};
    use crate::updates::ticket::TicketUpdateBuilder;

    #[tokio::test]
    async fn ticket_without_release_writes_nothing() {
        let svc = test_service().await;
        let err = svc
            .create_ticket(&NewTicket {
                title: "Broken totals".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
        assert!(svc.tickets_with_relations(&ReleaseFilter::All).await.is_empty());
        assert!(svc.views().take_stale().is_empty());
    }

    #[tokio::test]
    async fn blank_optional_fields_are_stored_as_null() {
        let svc = test_service().await;
        let module = seed_module(&svc, "Checkout").await;
        let release = seed_release(&svc, &module.id, "2026.10", true).await;

        let ticket = svc
            .create_ticket(&NewTicket {
                title: "Coupon rounding".into(),
                description: Some("   ".into()),
                status_id: Some(String::new()),
                qa_status_id: Some(" ".into()),
                dev_id: Some(String::new()),
                release_id: Some(release.id.clone()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ticket.description, None);
        assert_eq!(ticket.status_id, None);
        assert_eq!(ticket.qa_status_id, None);
        assert_eq!(ticket.dev_id, None);
        assert_eq!(ticket.release_id.as_deref(), Some(release.id.as_str()));

        let updated = svc
            .update_ticket(
                &ticket.id,
                &TicketUpdateBuilder::new()
                    .description(Some("  ".into()))
                    .team_id(Some(String::new()))
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.description, None);
        assert_eq!(updated.team_id, None);
    }

    #[tokio::test]
    async fn failed_ticket_read_degrades_to_empty() {
        let svc = test_service().await;
        let module = seed_module(&svc, "Checkout").await;
        let release = seed_release(&svc, &module.id, "2026.10", true).await;
        seed_ticket(&svc, &release.id, "Totals").await;

        svc.db().conn().execute("DROP TABLE tickets", ()).await.unwrap();

        assert!(
            svc.try_tickets_with_relations(&ReleaseFilter::All)
                .await
                .is_err()
        );
        assert_eq!(svc.tickets_with_relations(&ReleaseFilter::All).await, vec![]);
    }

    #[tokio::test]
    async fn relations_are_resolved() {
        let svc = test_service().await;
        let module = seed_module(&svc, "Checkout").await;
        let release = seed_release(&svc, &module.id, "2026.10", true).await;
        let status = svc
            .create_catalog_item::<Status>(&NewStatus {
                name: "In progress".into(),
                category: StatusCategory::Ticket,
                color: Some("#0af".into()),
            })
            .await
            .unwrap();
        let team = svc
            .create_catalog_item::<Team>(&NewTeam { name: "Payments".into() })
            .await
            .unwrap();

        svc.create_ticket(&NewTicket {
            title: "Broken totals".into(),
            status_id: Some(status.id.clone()),
            team_id: Some(team.id.clone()),
            release_id: Some(release.id.clone()),
            code_freeze: true,
            ..Default::default()
        })
        .await
        .unwrap();

        let tickets = svc.tickets_with_relations(&ReleaseFilter::All).await;
        assert_eq!(tickets.len(), 1);
        let ticket = &tickets[0];
        assert!(ticket.ticket.code_freeze);
        assert_eq!(
            ticket.status,
            Some(StatusRef {
                id: status.id.clone(),
                name: "In progress".into(),
                color: Some("#0af".into()),
            })
        );
        assert_eq!(ticket.team.as_ref().map(|t| t.name.as_str()), Some("Payments"));
        assert_eq!(ticket.release.as_ref().map(|r| r.name.as_str()), Some("2026.10"));
        assert!(ticket.qa_status.is_none());
        assert!(ticket.developer.is_none());
    }

    #[tokio::test]
    async fn all_unassigned_and_release_filters_differ() {
        let svc = test_service().await;
        let module = seed_module(&svc, "Checkout").await;
        let current = seed_release(&svc, &module.id, "2026.10", true).await;
        let next = seed_release(&svc, &module.id, "2026.11", true).await;

        let a = seed_ticket(&svc, &current.id, "A").await;
        seed_ticket(&svc, &next.id, "B").await;
        let c = seed_ticket(&svc, &current.id, "C").await;
        svc.update_ticket(&c.id, &TicketUpdateBuilder::new().release_id(None).build())
            .await
            .unwrap();

        let titles = |tickets: Vec<TicketWithRelations>| -> Vec<String> {
            tickets.into_iter().map(|t| t.ticket.title).collect()
        };

        assert_eq!(
            titles(svc.tickets_with_relations(&ReleaseFilter::All).await),
            vec!["C", "B", "A"]
        );
        assert_eq!(
            titles(svc.tickets_with_relations(&ReleaseFilter::Unassigned).await),
            vec!["C"]
        );
        assert_eq!(
            titles(
                svc.tickets_with_relations(&ReleaseFilter::Release(current.id.clone()))
                    .await
            ),
            vec!["A"]
        );
        assert_eq!(a.release_id.as_deref(), Some(current.id.as_str()));
    }

    #[tokio::test]
    async fn update_bumps_updated_at() {
        let svc = test_service().await;
        let module = seed_module(&svc, "Checkout").await;
        let release = seed_release(&svc, &module.id, "2026.10", true).await;
        let ticket = seed_ticket(&svc, &release.id, "Old title").await;

        let updated = svc
            .update_ticket(
                &ticket.id,
                &TicketUpdateBuilder::new().title("New title").code_freeze(true).build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "New title");
        assert!(updated.code_freeze);
        assert!(updated.updated_at >= ticket.updated_at);
        assert_eq!(updated.created_at, ticket.created_at);
    }

    #[tokio::test]
    async fn delete_ticket_marks_dashboard() {
        let svc = test_service().await;
        let module = seed_module(&svc, "Checkout").await;
        let release = seed_release(&svc, &module.id, "2026.10", true).await;
        let ticket = seed_ticket(&svc, &release.id, "Gone").await;
        svc.views().take_stale();

        svc.delete_ticket(&ticket.id).await.unwrap();
        assert_eq!(svc.views().take_stale(), vec!["/dashboard".to_string()]);
        assert!(matches!(
            svc.delete_ticket(&ticket.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }
}
