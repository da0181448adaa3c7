//! Service layer hosting every repository method.
//!
//! `TrackerService` wraps `TrackerDb` (raw database access) and the
//! `ViewInvalidator` fed by successful mutations. Repo methods are
//! implemented as `impl TrackerService` blocks under `repos`.
//!
//! Each operation is an independent request against the store; there is no
//! transaction spanning more than one statement. Concurrent writers to the
//! same row resolve by last write wins.

use crate::TrackerDb;
use crate::error::DatabaseError;
use crate::invalidation::ViewInvalidator;

pub struct TrackerService {
    db: TrackerDb,
    views: ViewInvalidator,
}

impl TrackerService {
    /// Open a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TrackerDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    #[must_use]
    pub fn from_db(db: TrackerDb) -> Self {
        Self {
            db,
            views: ViewInvalidator::new(),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TrackerDb {
        &self.db
    }

    /// Stale-view marks produced by this service's mutations.
    #[must_use]
    pub const fn views(&self) -> &ViewInvalidator {
        &self.views
    }
}
