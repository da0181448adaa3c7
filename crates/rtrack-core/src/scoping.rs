//! Release scoping: which release a module view is showing.
//!
//! Precedence is fixed:
//! 1. an explicitly requested release, if it belongs to the module (active or not);
//! 2. otherwise the first release flagged `active`, in fetch order;
//! 3. otherwise no release, and the view shows no tickets at all.
//!
//! Multiple active releases are tolerated; the first one in the slice wins.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Release;

/// Which tickets a ticket query should return.
///
/// `All` and `Unassigned` are distinct: the former applies no filter, the
/// latter matches only tickets whose release reference is null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum ReleaseFilter {
    All,
    Unassigned,
    Release(String),
}

impl ReleaseFilter {
    /// Filter from an optional CLI-style argument: `None` means no filter.
    #[must_use]
    pub fn from_option(release_id: Option<&str>) -> Self {
        release_id.map_or(Self::All, |id| Self::Release(id.to_string()))
    }
}

/// Pick the current release out of a module's releases.
#[must_use]
pub fn resolve_current<'a>(releases: &'a [Release], requested: Option<&str>) -> Option<&'a Release> {
    requested
        .and_then(|id| releases.iter().find(|r| r.id == id))
        .or_else(|| releases.iter().find(|r| r.active))
}

/// One entry of a ticket's release-reassignment dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReleaseOption {
    pub id: String,
    pub name: String,
    /// Inactive releases stay visible for historical tickets but cannot be picked.
    pub disabled: bool,
}

/// The resolved release scope of one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReleaseScope {
    pub module_id: String,
    /// Every release of the module, in fetch order.
    pub releases: Vec<Release>,
    pub current: Option<Release>,
}

impl ReleaseScope {
    #[must_use]
    pub fn resolve(module_id: &str, releases: Vec<Release>, requested: Option<&str>) -> Self {
        let current = resolve_current(&releases, requested).cloned();
        Self {
            module_id: module_id.to_string(),
            releases,
            current,
        }
    }

    #[must_use]
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_ref().map(|r| r.id.as_str())
    }

    /// Releases offered by the release selector: active ones only.
    #[must_use]
    pub fn selectable(&self) -> Vec<&Release> {
        self.releases.iter().filter(|r| r.active).collect()
    }

    /// All releases, with inactive ones disabled.
    #[must_use]
    pub fn reassignment_options(&self) -> Vec<ReleaseOption> {
        self.releases
            .iter()
            .map(|r| ReleaseOption {
                id: r.id.clone(),
                name: r.name.clone(),
                disabled: !r.active,
            })
            .collect()
    }

    /// Ticket filter for the scope, or `None` when no release is current and
    /// ticket loading must be skipped.
    #[must_use]
    pub fn ticket_filter(&self) -> Option<ReleaseFilter> {
        self.current_id()
            .map(|id| ReleaseFilter::Release(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn release(id: &str, active: bool) -> Release {
        Release {
            id: id.to_string(),
            name: format!("Release {id}"),
            module_id: "mod-checkout".to_string(),
            start_date: None,
            end_date: None,
            active,
            responsible_id: None,
            created_at: Utc::now(),
        }
    }

    fn fixture() -> Vec<Release> {
        vec![
            release("rel-old", false),
            release("rel-cur", true),
            release("rel-next", true),
        ]
    }

    #[rstest]
    #[case::explicit_inactive(Some("rel-old"), Some("rel-old"))]
    #[case::explicit_active(Some("rel-next"), Some("rel-next"))]
    #[case::no_request_takes_first_active(None, Some("rel-cur"))]
    #[case::foreign_request_falls_back(Some("rel-other-module"), Some("rel-cur"))]
    fn resolves_by_precedence(#[case] requested: Option<&str>, #[case] expected: Option<&str>) {
        let releases = fixture();
        let current = resolve_current(&releases, requested).map(|r| r.id.as_str());
        assert_eq!(current, expected);
    }

    #[test]
    fn no_active_release_resolves_to_none() {
        let releases = vec![release("rel-a", false), release("rel-b", false)];
        assert!(resolve_current(&releases, None).is_none());

        let scope = ReleaseScope::resolve("mod-checkout", releases, None);
        assert!(scope.current.is_none());
        assert!(scope.ticket_filter().is_none());
    }

    #[test]
    fn selector_and_reassignment_views() {
        let scope = ReleaseScope::resolve("mod-checkout", fixture(), None);
        let selectable: Vec<_> = scope.selectable().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(selectable, vec!["rel-cur", "rel-next"]);

        let options = scope.reassignment_options();
        assert_eq!(options.len(), 3);
        assert!(options[0].disabled);
        assert!(!options[1].disabled);
        assert_eq!(
            scope.ticket_filter(),
            Some(ReleaseFilter::Release("rel-cur".to_string()))
        );
    }

    #[test]
    fn filter_from_option() {
        assert_eq!(ReleaseFilter::from_option(None), ReleaseFilter::All);
        assert_eq!(
            ReleaseFilter::from_option(Some("rel-1")),
            ReleaseFilter::Release("rel-1".into())
        );
    }
}
