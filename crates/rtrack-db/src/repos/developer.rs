//! Developer repository: developers and their module links.
//!
//! The composite writes are two steps (developer row, then join rows) with no
//! rollback. A failure in the second step is reported as a
//! `PartialFailure` so callers can tell it apart from a rejected developer.

use std::collections::{BTreeSet, HashMap};

use libsql::Value;

use rtrack_core::drafts::NewDeveloper;
use rtrack_core::entities::{Developer, DeveloperWithModules};
use rtrack_core::enums::CatalogTable;
use rtrack_core::ids::PREFIX_DEVELOPER;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, now_str, opt_text, parse_datetime, placeholders};
use crate::repos::catalog::CatalogRecord;
use crate::service::TrackerService;
use crate::updates::developer::DeveloperUpdate;

impl CatalogRecord for Developer {
    const TABLE: CatalogTable = CatalogTable::Developers;
    const ID_PREFIX: &'static str = PREFIX_DEVELOPER;
    const SELECT_COLS: &'static str = "id, name, email, created_at";
    const SORTABLE: &'static [&'static str] = &["name", "email", "created_at"];
    const DEFAULT_ORDER: (&'static str, bool) = ("created_at", false);
    const VIEW_PATHS: &'static [&'static str] = &[CatalogTable::Developers.view_path()];

    type New = NewDeveloper;
    type Update = DeveloperUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: get_opt_string(row, 2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn insert_values(draft: &NewDeveloper) -> Result<Vec<(&'static str, Value)>, DatabaseError> {
        Ok(vec![
            ("name", draft.name.trim().into()),
            ("email", opt_text(draft.email.as_deref())),
        ])
    }

    fn update_values(update: &DeveloperUpdate) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(name) = &update.name {
            values.push(("name", name.trim().into()));
        }
        if let Some(email) = &update.email {
            values.push(("email", opt_text(email.as_deref())));
        }
        values
    }
}

fn partial(operation: &'static str, action: &str, error: &DatabaseError) -> DatabaseError {
    tracing::warn!(operation, %error, "developer {action} but module links failed");
    DatabaseError::PartialFailure {
        operation,
        message: format!("Developer {action} but module assignment failed: {error}"),
    }
}

impl TrackerService {
    async fn developer_module_links(&self) -> Result<HashMap<String, Vec<String>>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT developer_id, module_id FROM developer_modules", ())
            .await?;
        let mut links: HashMap<String, Vec<String>> = HashMap::new();
        while let Some(row) = rows.next().await? {
            links
                .entry(row.get::<String>(0)?)
                .or_default()
                .push(row.get::<String>(1)?);
        }
        Ok(links)
    }

    /// All developers by name, each with its linked module IDs.
    ///
    /// A failed link fetch yields developers with empty module sets.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the developer query itself fails.
    pub async fn try_developers_with_modules(
        &self,
    ) -> Result<Vec<DeveloperWithModules>, DatabaseError> {
        let developers = self
            .try_list_catalog::<Developer>(Some(("name", true)), None)
            .await?;

        let mut links = self.developer_module_links().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "developer module links unavailable");
            HashMap::new()
        });

        Ok(developers
            .into_iter()
            .map(|developer| DeveloperWithModules {
                module_ids: links.remove(&developer.id).unwrap_or_default(),
                developer,
            })
            .collect())
    }

    /// Like [`Self::try_developers_with_modules`], degrading to an empty list.
    pub async fn developers_with_modules(&self) -> Vec<DeveloperWithModules> {
        self.try_developers_with_modules()
            .await
            .unwrap_or_else(|error| {
                tracing::error!(%error, "developer fetch failed");
                Vec::new()
            })
    }

    /// Developers linked to one module, by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn developers_for_module(&self, module_id: &str) -> Result<Vec<Developer>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT d.id, d.name, d.email, d.created_at
                 FROM developers d
                 JOIN developer_modules dm ON dm.developer_id = d.id
                 WHERE dm.module_id = ?1
                 ORDER BY d.name ASC",
                [module_id],
            )
            .await?;
        let mut developers = Vec::new();
        while let Some(row) = rows.next().await? {
            developers.push(Developer::from_row(&row)?);
        }
        Ok(developers)
    }

    async fn link_modules(&self, developer_id: &str, module_ids: &[String]) -> Result<(), DatabaseError> {
        let unique: BTreeSet<&str> = module_ids.iter().map(String::as_str).collect();
        if unique.is_empty() {
            return Ok(());
        }

        let now = now_str();
        let mut tuples = Vec::new();
        let mut params: Vec<Value> = Vec::new();
        for module_id in unique {
            let start = params.len() + 1;
            tuples.push(format!("({})", placeholders(start, 3)));
            params.push(developer_id.into());
            params.push(module_id.into());
            params.push(now.as_str().into());
        }
        let sql = format!(
            "INSERT INTO developer_modules (developer_id, module_id, created_at) VALUES {}",
            tuples.join(", ")
        );
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        Ok(())
    }

    async fn replace_module_links(
        &self,
        developer_id: &str,
        module_ids: &[String],
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "DELETE FROM developer_modules WHERE developer_id = ?1",
                [developer_id],
            )
            .await?;
        self.link_modules(developer_id, module_ids).await
    }

    /// Create a developer, then link it to `module_ids`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::Validation` or a store error if the developer is rejected.
    /// - `DatabaseError::PartialFailure` if the developer exists but linking failed.
    pub async fn create_developer_with_modules(
        &self,
        draft: &NewDeveloper,
        module_ids: &[String],
    ) -> Result<DeveloperWithModules, DatabaseError> {
        let developer = self.insert_record::<Developer>(draft).await?;
        self.views().invalidate_all(Developer::VIEW_PATHS);

        self.link_modules(&developer.id, module_ids)
            .await
            .map_err(|e| partial("create_developer_with_modules", "created", &e))?;

        Ok(DeveloperWithModules {
            module_ids: sorted_unique(module_ids),
            developer,
        })
    }

    /// Update a developer. `Some(module_ids)` replaces every module link;
    /// `None` leaves them untouched.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::NotFound` if the developer does not exist.
    /// - `DatabaseError::PartialFailure` if the row was updated but relinking failed.
    pub async fn update_developer_with_modules(
        &self,
        id: &str,
        update: &DeveloperUpdate,
        module_ids: Option<&[String]>,
    ) -> Result<DeveloperWithModules, DatabaseError> {
        let developer = self.update_record::<Developer>(id, update).await?;
        self.views().invalidate_all(Developer::VIEW_PATHS);

        let module_ids = match module_ids {
            Some(ids) => {
                self.replace_module_links(id, ids)
                    .await
                    .map_err(|e| partial("update_developer_with_modules", "updated", &e))?;
                sorted_unique(ids)
            }
            None => {
                let mut links = self.developer_module_links().await?;
                let mut ids = links.remove(id).unwrap_or_default();
                ids.sort();
                ids
            }
        };

        Ok(DeveloperWithModules {
            developer,
            module_ids,
        })
    }

    /// Delete a developer; its module links go with it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the developer does not exist, or
    /// the store error if tickets or releases still reference it.
    pub async fn delete_developer(&self, id: &str) -> Result<(), DatabaseError> {
        self.delete_catalog_item::<Developer>(id).await
    }
}

fn sorted_unique(ids: &[String]) -> Vec<String> {
    ids.iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
