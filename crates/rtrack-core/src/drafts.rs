//! Draft records: the validated, persisted field set for each creatable table.
//!
//! Form input is mapped to a draft by the caller; `validate()` runs before any
//! store call, so a rejected draft never produces a write. Optional text
//! fields treat blank input as absent (see [`blank_to_none`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::StatusCategory;
use crate::errors::CoreError;

/// Validation shared by all drafts.
pub trait Draft {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    fn validate(&self) -> Result<(), CoreError>;
}

/// Map blank form input to `None`.
#[must_use]
pub fn blank_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewModule {
    pub name: String,
    pub description: Option<String>,
}

impl Draft for NewModule {
    fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewComponent {
    pub name: String,
    pub module_id: String,
    /// `None` appends the component after the module's last column.
    pub sort_order: Option<i64>,
}

impl Draft for NewComponent {
    fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("module_id", &self.module_id)?;
        if let Some(order) = self.sort_order
            && order < 1
        {
            return Err(CoreError::Validation(format!(
                "sort_order must be positive, got {order}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStatus {
    pub name: String,
    pub category: StatusCategory,
    pub color: Option<String>,
}

impl Draft for NewStatus {
    fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
}

impl Draft for NewTeam {
    fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEnvironment {
    pub name: String,
}

impl Draft for NewEnvironment {
    fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewDeveloper {
    pub name: String,
    pub email: Option<String>,
}

impl Draft for NewDeveloper {
    fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRelease {
    pub name: String,
    pub module_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
    pub responsible_id: Option<String>,
}

impl Draft for NewRelease {
    fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("module_id", &self.module_id)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            return Err(CoreError::Validation(format!(
                "end_date {end} is before start_date {start}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTicket {
    pub title: String,
    pub description: Option<String>,
    pub status_id: Option<String>,
    pub qa_status_id: Option<String>,
    pub dev_id: Option<String>,
    pub team_id: Option<String>,
    pub environment_id: Option<String>,
    pub release_id: Option<String>,
    pub code_freeze: bool,
}

impl Draft for NewTicket {
    fn validate(&self) -> Result<(), CoreError> {
        require("title", &self.title)?;
        match self.release_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(()),
            _ => Err(CoreError::Validation(
                "a release is required to create a ticket".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_text_becomes_none() {
        assert_eq!(blank_to_none(Some("   ")), None);
        assert_eq!(blank_to_none(None), None);
        assert_eq!(blank_to_none(Some(" qa ")), Some("qa".to_string()));
    }

    #[test]
    fn ticket_without_release_is_rejected() {
        let draft = NewTicket {
            title: "Checkout button misaligned".into(),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("release is required"));

        let blank = NewTicket {
            title: "Checkout button misaligned".into(),
            release_id: Some("  ".into()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn ticket_with_release_passes() {
        let draft = NewTicket {
            title: "Checkout button misaligned".into(),
            release_id: Some("rel-00000001".into()),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(NewModule::default().validate().is_err());
        assert!(NewTeam { name: " ".into() }.validate().is_err());
        assert!(
            NewComponent {
                name: "API".into(),
                module_id: String::new(),
                sort_order: None,
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn component_sort_order_must_be_positive() {
        let draft = NewComponent {
            name: "API".into(),
            module_id: "mod-1".into(),
            sort_order: Some(0),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn release_dates_must_be_ordered() {
        let draft = NewRelease {
            name: "2026.10".into(),
            module_id: "mod-1".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 10, 20),
            end_date: NaiveDate::from_ymd_opt(2026, 10, 1),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }
}
