//! # rtrack-db
//!
//! libSQL catalog store for the release tracker.
//!
//! Holds every relational table: modules, components, statuses, teams,
//! environments, developers and their module links, releases, tickets, and
//! the sparse ticket x component matrix. [`service::TrackerService`] hosts
//! all repository methods; each `repos` module adds one concern.

pub mod error;
pub mod helpers;
pub mod invalidation;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and connection and generates record IDs.
pub struct TrackerDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TrackerDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Foreign keys are per-connection in SQLite
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let tracker_db = Self { db, conn };
        tracker_db.run_migrations().await?;
        Ok(tracker_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"tkt-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> TrackerDb {
        TrackerDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        let tables = [
            "modules",
            "components",
            "statuses",
            "teams",
            "environments",
            "developers",
            "developer_modules",
            "releases",
            "tickets",
            "ticket_component_matrix",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            assert!(
                rows.next().await.unwrap().is_some(),
                "table '{table}' should exist"
            );
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn generate_id_format_and_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for prefix in rtrack_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
            assert_eq!(id.len(), 12, "3 prefix + dash + 8 hex: {id}");
            assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
            assert!(ids.insert(id));
        }
    }

    #[tokio::test]
    async fn component_sort_order_is_unique_per_module() {
        let db = test_db().await;
        db.conn()
            .execute_batch(
                "INSERT INTO modules (id, name) VALUES ('mod-a', 'A'), ('mod-b', 'B');
                 INSERT INTO components (id, name, module_id, sort_order) VALUES ('cmp-1', 'One', 'mod-a', 1);
                 INSERT INTO components (id, name, module_id, sort_order) VALUES ('cmp-2', 'Two', 'mod-b', 1);",
            )
            .await
            .unwrap();

        let duplicate = db
            .conn()
            .execute(
                "INSERT INTO components (id, name, module_id, sort_order) VALUES ('cmp-3', 'Three', 'mod-a', 1)",
                (),
            )
            .await;
        assert!(duplicate.is_err(), "same sort_order within a module must fail");
    }

    #[tokio::test]
    async fn status_category_is_constrained() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO statuses (id, name, category) VALUES ('sts-1', 'Done', 'OTHER')",
                (),
            )
            .await;
        assert!(result.is_err());
    }
}
