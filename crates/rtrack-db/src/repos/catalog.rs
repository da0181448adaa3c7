//! Generic catalog CRUD over every settings table.
//!
//! Each record type declares its table, ID prefix, column list, sortable
//! columns and the views it feeds through [`CatalogRecord`]. The operations
//! here build the SQL from those declarations, so a new catalog only needs a
//! trait impl. Successful mutations mark the record's views stale.

use libsql::Value;

use rtrack_core::drafts::{Draft, NewEnvironment, NewModule, NewStatus, NewTeam};
use rtrack_core::entities::{Environment, Module, Status, Team};
use rtrack_core::enums::{CatalogTable, DASHBOARD_PATH};
use rtrack_core::ids::{PREFIX_ENVIRONMENT, PREFIX_MODULE, PREFIX_STATUS, PREFIX_TEAM};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, now_str, opt_text, parse_datetime, parse_enum, placeholders};
use crate::service::TrackerService;
use crate::updates::module::ModuleUpdate;
use crate::updates::named::NameUpdate;
use crate::updates::status::StatusUpdate;

/// A row type reachable through the generic catalog operations.
pub trait CatalogRecord: Sized {
    const TABLE: CatalogTable;
    const ID_PREFIX: &'static str;
    /// Column list matching [`CatalogRecord::from_row`]'s indexes.
    const SELECT_COLS: &'static str;
    /// Columns a caller may sort by. Anything else falls back to the default.
    const SORTABLE: &'static [&'static str];
    /// `(column, ascending)`.
    const DEFAULT_ORDER: (&'static str, bool);
    const HAS_UPDATED_AT: bool = false;
    /// Views to mark stale after a successful mutation.
    const VIEW_PATHS: &'static [&'static str];

    type New: Draft;
    type Update;

    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or malformed.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;

    fn id(&self) -> &str;

    /// Column/value pairs for an INSERT, excluding `id` and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the draft cannot be stored as is.
    fn insert_values(draft: &Self::New) -> Result<Vec<(&'static str, Value)>, DatabaseError>;

    /// SET pairs for the fields present in the update.
    fn update_values(update: &Self::Update) -> Vec<(&'static str, Value)>;
}

/// Sort requested by a caller: `(column, ascending)`.
pub type SortOrder<'a> = Option<(&'a str, bool)>;

fn order_clause<T: CatalogRecord>(order: SortOrder<'_>) -> String {
    let (column, ascending) = match order {
        Some((column, ascending)) if T::SORTABLE.iter().any(|c| *c == column) => (column, ascending),
        Some((column, _)) => {
            tracing::warn!(
                table = T::TABLE.as_str(),
                column,
                "unknown sort column, using default order"
            );
            T::DEFAULT_ORDER
        }
        None => T::DEFAULT_ORDER,
    };
    let direction = if ascending { "ASC" } else { "DESC" };
    format!("ORDER BY {column} {direction}, rowid {direction}")
}

pub(crate) fn not_found<T: CatalogRecord>(id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        table: T::TABLE.as_str().to_string(),
        id: id.to_string(),
    }
}

fn reject_blank(values: &[(&'static str, Value)]) -> Result<(), DatabaseError> {
    for (column, value) in values {
        if let ("name" | "title", Value::Text(text)) = (*column, value)
            && text.trim().is_empty()
        {
            return Err(DatabaseError::Validation(format!("{column} is required")));
        }
    }
    Ok(())
}

impl TrackerService {
    /// List every row of a catalog table.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn try_list_catalog<T: CatalogRecord>(
        &self,
        order: SortOrder<'_>,
        limit: Option<u32>,
    ) -> Result<Vec<T>, DatabaseError> {
        let limit_clause = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
        let sql = format!(
            "SELECT {} FROM {} {}{limit_clause}",
            T::SELECT_COLS,
            T::TABLE.as_str(),
            order_clause::<T>(order),
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(T::from_row(&row)?);
        }
        Ok(items)
    }

    /// Like [`Self::try_list_catalog`], but a failed fetch yields an empty list.
    pub async fn list_catalog<T: CatalogRecord>(
        &self,
        order: SortOrder<'_>,
        limit: Option<u32>,
    ) -> Vec<T> {
        match self.try_list_catalog::<T>(order, limit).await {
            Ok(items) => items,
            Err(error) => {
                tracing::error!(table = T::TABLE.as_str(), %error, "catalog fetch failed");
                Vec::new()
            }
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this ID.
    pub async fn get_catalog_item<T: CatalogRecord>(&self, id: &str) -> Result<T, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            T::SELECT_COLS,
            T::TABLE.as_str()
        );
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or_else(|| not_found::<T>(id))?;
        T::from_row(&row)
    }

    /// Validate, insert and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` without writing if the draft is
    /// rejected, or the store error if the insert fails.
    pub async fn create_catalog_item<T: CatalogRecord>(
        &self,
        draft: &T::New,
    ) -> Result<T, DatabaseError> {
        let item = self.insert_record::<T>(draft).await?;
        self.views().invalidate_all(T::VIEW_PATHS);
        Ok(item)
    }

    /// Apply the fields present in `update`. An empty update returns the row
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this ID.
    pub async fn update_catalog_item<T: CatalogRecord>(
        &self,
        id: &str,
        update: &T::Update,
    ) -> Result<T, DatabaseError> {
        let item = self.update_record::<T>(id, update).await?;
        self.views().invalidate_all(T::VIEW_PATHS);
        Ok(item)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this ID, or the store
    /// error if the row is still referenced.
    pub async fn delete_catalog_item<T: CatalogRecord>(&self, id: &str) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", T::TABLE.as_str());
        let affected = self.db().conn().execute(&sql, [id]).await?;
        if affected == 0 {
            return Err(not_found::<T>(id));
        }
        self.views().invalidate_all(T::VIEW_PATHS);
        Ok(())
    }

    pub(crate) async fn insert_record<T: CatalogRecord>(
        &self,
        draft: &T::New,
    ) -> Result<T, DatabaseError> {
        draft.validate()?;
        let values = T::insert_values(draft)?;

        let id = self.db().generate_id(T::ID_PREFIX).await?;
        let now = now_str();

        let mut columns = vec!["id"];
        let mut params: Vec<Value> = vec![id.clone().into()];
        for (column, value) in values {
            columns.push(column);
            params.push(value);
        }
        columns.push("created_at");
        params.push(now.clone().into());
        if T::HAS_UPDATED_AT {
            columns.push("updated_at");
            params.push(now.into());
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::TABLE.as_str(),
            columns.join(", "),
            placeholders(1, columns.len()),
        );
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::debug!(table = T::TABLE.as_str(), id = %id, "record created");
        self.get_catalog_item::<T>(&id).await
    }

    pub(crate) async fn update_record<T: CatalogRecord>(
        &self,
        id: &str,
        update: &T::Update,
    ) -> Result<T, DatabaseError> {
        let values = T::update_values(update);
        reject_blank(&values)?;
        if values.is_empty() {
            return self.get_catalog_item::<T>(id).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<Value> = Vec::new();
        for (column, value) in values {
            params.push(value);
            sets.push(format!("{column} = ?{}", params.len()));
        }
        if T::HAS_UPDATED_AT {
            params.push(now_str().into());
            sets.push(format!("updated_at = ?{}", params.len()));
        }
        params.push(id.into());

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            T::TABLE.as_str(),
            sets.join(", "),
            params.len()
        );
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(not_found::<T>(id));
        }
        self.get_catalog_item::<T>(id).await
    }
}

// ---------------------------------------------------------------------------
// Modules
// ---------------------------------------------------------------------------

impl CatalogRecord for Module {
    const TABLE: CatalogTable = CatalogTable::Modules;
    const ID_PREFIX: &'static str = PREFIX_MODULE;
    const SELECT_COLS: &'static str = "id, name, description, created_at";
    const SORTABLE: &'static [&'static str] = &["name", "created_at"];
    const DEFAULT_ORDER: (&'static str, bool) = ("created_at", false);
    const VIEW_PATHS: &'static [&'static str] = &[CatalogTable::Modules.view_path()];

    type New = NewModule;
    type Update = ModuleUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: get_opt_string(row, 2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn insert_values(draft: &NewModule) -> Result<Vec<(&'static str, Value)>, DatabaseError> {
        Ok(vec![
            ("name", draft.name.trim().into()),
            ("description", opt_text(draft.description.as_deref())),
        ])
    }

    fn update_values(update: &ModuleUpdate) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(name) = &update.name {
            values.push(("name", name.trim().into()));
        }
        if let Some(description) = &update.description {
            values.push(("description", opt_text(description.as_deref())));
        }
        values
    }
}

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

impl CatalogRecord for Status {
    const TABLE: CatalogTable = CatalogTable::Statuses;
    const ID_PREFIX: &'static str = PREFIX_STATUS;
    const SELECT_COLS: &'static str = "id, name, category, color, created_at";
    const SORTABLE: &'static [&'static str] = &["name", "category", "created_at"];
    const DEFAULT_ORDER: (&'static str, bool) = ("created_at", false);
    const VIEW_PATHS: &'static [&'static str] =
        &[CatalogTable::Statuses.view_path(), DASHBOARD_PATH];

    type New = NewStatus;
    type Update = StatusUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            category: parse_enum(&row.get::<String>(2)?)?,
            color: get_opt_string(row, 3)?,
            created_at: parse_datetime(&row.get::<String>(4)?)?,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn insert_values(draft: &NewStatus) -> Result<Vec<(&'static str, Value)>, DatabaseError> {
        Ok(vec![
            ("name", draft.name.trim().into()),
            ("category", draft.category.as_str().into()),
            ("color", opt_text(draft.color.as_deref())),
        ])
    }

    fn update_values(update: &StatusUpdate) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(name) = &update.name {
            values.push(("name", name.trim().into()));
        }
        if let Some(category) = update.category {
            values.push(("category", category.as_str().into()));
        }
        if let Some(color) = &update.color {
            values.push(("color", opt_text(color.as_deref())));
        }
        values
    }
}

// ---------------------------------------------------------------------------
// Teams and environments (name-only)
// ---------------------------------------------------------------------------

fn name_values(update: &NameUpdate) -> Vec<(&'static str, Value)> {
    update
        .name
        .as_deref()
        .map(|name| vec![("name", name.trim().into())])
        .unwrap_or_default()
}

impl CatalogRecord for Team {
    const TABLE: CatalogTable = CatalogTable::Teams;
    const ID_PREFIX: &'static str = PREFIX_TEAM;
    const SELECT_COLS: &'static str = "id, name, created_at";
    const SORTABLE: &'static [&'static str] = &["name", "created_at"];
    const DEFAULT_ORDER: (&'static str, bool) = ("created_at", false);
    const VIEW_PATHS: &'static [&'static str] = &[CatalogTable::Teams.view_path()];

    type New = NewTeam;
    type Update = NameUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: parse_datetime(&row.get::<String>(2)?)?,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn insert_values(draft: &NewTeam) -> Result<Vec<(&'static str, Value)>, DatabaseError> {
        Ok(vec![("name", draft.name.trim().into())])
    }

    fn update_values(update: &NameUpdate) -> Vec<(&'static str, Value)> {
        name_values(update)
    }
}

impl CatalogRecord for Environment {
    const TABLE: CatalogTable = CatalogTable::Environments;
    const ID_PREFIX: &'static str = PREFIX_ENVIRONMENT;
    const SELECT_COLS: &'static str = "id, name, created_at";
    const SORTABLE: &'static [&'static str] = &["name", "created_at"];
    const DEFAULT_ORDER: (&'static str, bool) = ("created_at", false);
    const VIEW_PATHS: &'static [&'static str] = &[CatalogTable::Environments.view_path()];

    type New = NewEnvironment;
    type Update = NameUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: parse_datetime(&row.get::<String>(2)?)?,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn insert_values(draft: &NewEnvironment) -> Result<Vec<(&'static str, Value)>, DatabaseError> {
        Ok(vec![("name", draft.name.trim().into())])
    }

    fn update_values(update: &NameUpdate) -> Vec<(&'static str, Value)> {
        name_values(update)
    }
}
