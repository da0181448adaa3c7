//! Component repository: matrix columns and the two-phase reorder.
//!
//! `(module_id, sort_order)` is unique in the store, so a permutation cannot
//! be written in place. The reorder first parks every target row at a
//! distinct negative value, then writes the final positions. Neither phase is
//! atomic; a failure after the first write leaves a partial order that the
//! caller fixes by retrying the whole batch.

use libsql::Value;

use rtrack_core::drafts::{Draft, NewComponent};
use rtrack_core::entities::Component;
use rtrack_core::enums::{CatalogTable, DASHBOARD_PATH};
use rtrack_core::ids::PREFIX_COMPONENT;
use rtrack_core::reorder::{ComponentPosition, ReorderPlan};

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::repos::catalog::CatalogRecord;
use crate::service::TrackerService;
use crate::updates::component::ComponentUpdate;

const SELECT_COLS: &str = "id, name, module_id, sort_order, created_at";

const VIEW_PATHS: &[&str] = &[CatalogTable::Components.view_path(), DASHBOARD_PATH];

impl CatalogRecord for Component {
    const TABLE: CatalogTable = CatalogTable::Components;
    const ID_PREFIX: &'static str = PREFIX_COMPONENT;
    const SELECT_COLS: &'static str = SELECT_COLS;
    const SORTABLE: &'static [&'static str] = &["name", "module_id", "sort_order", "created_at"];
    const DEFAULT_ORDER: (&'static str, bool) = ("sort_order", true);
    const VIEW_PATHS: &'static [&'static str] = VIEW_PATHS;

    type New = NewComponent;
    type Update = ComponentUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            module_id: row.get(2)?,
            sort_order: row.get(3)?,
            created_at: parse_datetime(&row.get::<String>(4)?)?,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    /// Requires a resolved `sort_order`; [`TrackerService::create_component`]
    /// fills it in.
    fn insert_values(draft: &NewComponent) -> Result<Vec<(&'static str, Value)>, DatabaseError> {
        let sort_order = draft.sort_order.ok_or_else(|| {
            DatabaseError::Validation("sort_order must be set before insert".into())
        })?;
        Ok(vec![
            ("name", draft.name.trim().into()),
            ("module_id", draft.module_id.as_str().into()),
            ("sort_order", sort_order.into()),
        ])
    }

    fn update_values(update: &ComponentUpdate) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(name) = &update.name {
            values.push(("name", name.trim().into()));
        }
        if let Some(module_id) = &update.module_id {
            values.push(("module_id", module_id.as_str().into()));
        }
        if let Some(sort_order) = update.sort_order {
            values.push(("sort_order", sort_order.into()));
        }
        values
    }
}

impl TrackerService {
    /// A module's components in column order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn try_components_for_module(
        &self,
        module_id: &str,
    ) -> Result<Vec<Component>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM components WHERE module_id = ?1 ORDER BY sort_order ASC"
                ),
                [module_id],
            )
            .await?;

        let mut components = Vec::new();
        while let Some(row) = rows.next().await? {
            components.push(Component::from_row(&row)?);
        }
        Ok(components)
    }

    /// Like [`Self::try_components_for_module`], degrading to an empty list.
    pub async fn components_for_module(&self, module_id: &str) -> Vec<Component> {
        self.try_components_for_module(module_id)
            .await
            .unwrap_or_else(|error| {
                tracing::error!(module_id, %error, "component fetch failed");
                Vec::new()
            })
    }

    /// The position after the module's current last column.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn next_sort_order(&self, module_id: &str) -> Result<i64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COALESCE(MAX(sort_order), 0) + 1 FROM components WHERE module_id = ?1",
                [module_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        // Parked rows from an aborted reorder are negative; never hand those out.
        Ok(row.get::<i64>(0)?.max(1))
    }

    /// Create a component, appending it after the last column when the draft
    /// carries no `sort_order`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a rejected draft, or the store
    /// error (e.g. a taken `sort_order`).
    pub async fn create_component(&self, draft: &NewComponent) -> Result<Component, DatabaseError> {
        draft.validate()?;
        let resolved = match draft.sort_order {
            Some(_) => draft.clone(),
            None => NewComponent {
                sort_order: Some(self.next_sort_order(&draft.module_id).await?),
                ..draft.clone()
            },
        };
        self.create_catalog_item::<Component>(&resolved).await
    }

    /// Persist a new order over components of one module.
    ///
    /// Rows not listed keep their `sort_order`; the caller supplies the full
    /// permutation. Module membership of the listed IDs is not checked.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::Validation` if positions are non-positive or repeated.
    /// - The store error if the very first write fails (nothing persisted).
    /// - `DatabaseError::PartialFailure` if a later write fails or targets a
    ///   missing row; earlier writes stay applied.
    pub async fn reorder_components(
        &self,
        module_id: &str,
        items: &[ComponentPosition],
    ) -> Result<(), DatabaseError> {
        let plan = ReorderPlan::from_positions(items)?;
        if plan.is_empty() {
            return Ok(());
        }

        let total = plan.displace.len() + plan.commit.len();
        let mut completed = 0usize;
        for (phase, writes) in plan.phases() {
            for write in writes {
                let result = self
                    .db()
                    .conn()
                    .execute(
                        "UPDATE components SET sort_order = ?1 WHERE id = ?2",
                        libsql::params![write.sort_order, write.component_id.as_str()],
                    )
                    .await
                    .map_err(DatabaseError::from)
                    .and_then(|affected| {
                        if affected == 0 {
                            Err(DatabaseError::NotFound {
                                table: CatalogTable::Components.as_str().to_string(),
                                id: write.component_id.clone(),
                            })
                        } else {
                            Ok(())
                        }
                    });

                if let Err(error) = result {
                    if completed == 0 {
                        return Err(error);
                    }
                    tracing::warn!(
                        module_id,
                        %phase,
                        completed,
                        total,
                        %error,
                        "component reorder aborted"
                    );
                    return Err(DatabaseError::PartialFailure {
                        operation: "reorder_components",
                        message: format!(
                            "reorder aborted during {phase} phase after {completed} of {total} writes: {error}"
                        ),
                    });
                }
                completed += 1;
            }
        }

        tracing::debug!(module_id, count = plan.commit.len(), "components reordered");
        self.views().invalidate_all(VIEW_PATHS);
        Ok(())
    }

    /// Reorder to the given ID sequence, positions `1..=N`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::reorder_components`].
    pub async fn reorder_components_by_ids<S: AsRef<str>>(
        &self,
        module_id: &str,
        ordered_ids: &[S],
    ) -> Result<(), DatabaseError> {
        let items: Vec<ComponentPosition> = ordered_ids
            .iter()
            .zip(1_i64..)
            .map(|(id, position)| ComponentPosition {
                id: id.as_ref().to_string(),
                position,
            })
            .collect();
        self.reorder_components(module_id, &items).await
    }
}
