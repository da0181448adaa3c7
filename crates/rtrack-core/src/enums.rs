//! Status categories and catalog table identifiers.
//!
//! `StatusCategory` serializes in upper case (`TICKET`, `QA`) to match the
//! stored column values. `CatalogTable` is exhaustive over every table that
//! carries an `id` column, so adding a table forces updating the path and
//! name mappings below.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StatusCategory
// ---------------------------------------------------------------------------

/// Which dropdown a status populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusCategory {
    Ticket,
    Qa,
}

impl StatusCategory {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ticket => "TICKET",
            Self::Qa => "QA",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CatalogTable
// ---------------------------------------------------------------------------

/// Tables reachable through the generic catalog operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogTable {
    Modules,
    Components,
    Statuses,
    Teams,
    Environments,
    Developers,
    Releases,
    Tickets,
}

impl CatalogTable {
    pub const ALL: [Self; 8] = [
        Self::Modules,
        Self::Components,
        Self::Statuses,
        Self::Teams,
        Self::Environments,
        Self::Developers,
        Self::Releases,
        Self::Tickets,
    ];

    /// SQL table name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modules => "modules",
            Self::Components => "components",
            Self::Statuses => "statuses",
            Self::Teams => "teams",
            Self::Environments => "environments",
            Self::Developers => "developers",
            Self::Releases => "releases",
            Self::Tickets => "tickets",
        }
    }

    /// Logical view that goes stale when a row of this table changes.
    #[must_use]
    pub const fn view_path(self) -> &'static str {
        match self {
            Self::Modules => "/settings/modules",
            Self::Components => "/settings/components",
            Self::Statuses => "/settings/statuses",
            Self::Teams => "/settings/teams",
            Self::Environments => "/settings/environments",
            Self::Developers => "/settings/developers",
            Self::Releases => "/settings/releases",
            Self::Tickets => DASHBOARD_PATH,
        }
    }
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// View path for the ticket matrix dashboard.
pub const DASHBOARD_PATH: &str = "/dashboard";
