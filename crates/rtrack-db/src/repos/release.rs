//! Release repository: CRUD plus the module and responsible developer join.

use libsql::Value;

use rtrack_core::drafts::NewRelease;
use rtrack_core::entities::{Release, ReleaseWithModule};
use rtrack_core::enums::{CatalogTable, DASHBOARD_PATH};
use rtrack_core::ids::PREFIX_RELEASE;

use crate::error::DatabaseError;
use crate::helpers::{
    bool_value, date_value, get_bool, get_opt_string, opt_text, parse_datetime,
    parse_optional_date,
};
use crate::repos::catalog::CatalogRecord;
use crate::service::TrackerService;
use crate::updates::release::ReleaseUpdate;

impl CatalogRecord for Release {
    const TABLE: CatalogTable = CatalogTable::Releases;
    const ID_PREFIX: &'static str = PREFIX_RELEASE;
    const SELECT_COLS: &'static str =
        "id, name, module_id, start_date, end_date, active, responsible_id, created_at";
    const SORTABLE: &'static [&'static str] =
        &["name", "module_id", "start_date", "end_date", "active", "created_at"];
    const DEFAULT_ORDER: (&'static str, bool) = ("created_at", false);
    const VIEW_PATHS: &'static [&'static str] =
        &[CatalogTable::Releases.view_path(), DASHBOARD_PATH];

    type New = NewRelease;
    type Update = ReleaseUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            module_id: row.get(2)?,
            start_date: parse_optional_date(get_opt_string(row, 3)?.as_deref())?,
            end_date: parse_optional_date(get_opt_string(row, 4)?.as_deref())?,
            active: get_bool(row, 5)?,
            responsible_id: get_opt_string(row, 6)?,
            created_at: parse_datetime(&row.get::<String>(7)?)?,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn insert_values(draft: &NewRelease) -> Result<Vec<(&'static str, Value)>, DatabaseError> {
        Ok(vec![
            ("name", draft.name.trim().into()),
            ("module_id", draft.module_id.as_str().into()),
            ("start_date", date_value(draft.start_date)),
            ("end_date", date_value(draft.end_date)),
            ("active", bool_value(draft.active)),
            ("responsible_id", opt_text(draft.responsible_id.as_deref())),
        ])
    }

    fn update_values(update: &ReleaseUpdate) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(name) = &update.name {
            values.push(("name", name.trim().into()));
        }
        if let Some(module_id) = &update.module_id {
            values.push(("module_id", module_id.as_str().into()));
        }
        if let Some(start_date) = update.start_date {
            values.push(("start_date", date_value(start_date)));
        }
        if let Some(end_date) = update.end_date {
            values.push(("end_date", date_value(end_date)));
        }
        if let Some(active) = update.active {
            values.push(("active", bool_value(active)));
        }
        if let Some(responsible_id) = &update.responsible_id {
            values.push(("responsible_id", opt_text(responsible_id.as_deref())));
        }
        values
    }
}

impl TrackerService {
    /// Releases, newest first, optionally restricted to one module.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn try_releases(
        &self,
        module_id: Option<&str>,
    ) -> Result<Vec<ReleaseWithModule>, DatabaseError> {
        let filter = if module_id.is_some() {
            "WHERE r.module_id = ?1"
        } else {
            ""
        };
        let sql = format!(
            "SELECT r.id, r.name, r.module_id, r.start_date, r.end_date, r.active, \
             r.responsible_id, r.created_at, m.name, d.name \
             FROM releases r \
             LEFT JOIN modules m ON m.id = r.module_id \
             LEFT JOIN developers d ON d.id = r.responsible_id \
             {filter} ORDER BY r.created_at DESC, r.rowid DESC"
        );
        let params: Vec<Value> = module_id.into_iter().map(Into::into).collect();
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut releases = Vec::new();
        while let Some(row) = rows.next().await? {
            releases.push(ReleaseWithModule {
                release: Release::from_row(&row)?,
                module_name: get_opt_string(&row, 8)?,
                responsible_name: get_opt_string(&row, 9)?,
            });
        }
        Ok(releases)
    }

    /// Like [`Self::try_releases`], degrading to an empty list.
    pub async fn releases(&self, module_id: Option<&str>) -> Vec<ReleaseWithModule> {
        self.try_releases(module_id).await.unwrap_or_else(|error| {
            tracing::error!(?module_id, %error, "release fetch failed");
            Vec::new()
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a rejected draft, or the store
    /// error (e.g. an unknown module).
    pub async fn create_release(&self, draft: &NewRelease) -> Result<Release, DatabaseError> {
        self.create_catalog_item::<Release>(draft).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the release does not exist.
    pub async fn update_release(
        &self,
        id: &str,
        update: &ReleaseUpdate,
    ) -> Result<Release, DatabaseError> {
        self.update_catalog_item::<Release>(id, update).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the release does not exist, or the
    /// store error while tickets still reference it.
    pub async fn delete_release(&self, id: &str) -> Result<(), DatabaseError> {
        self.delete_catalog_item::<Release>(id).await
    }
}
