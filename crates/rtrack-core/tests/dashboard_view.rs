//! Dashboard view composition over plain records.

use chrono::Utc;
use pretty_assertions::assert_eq;
use rtrack_core::entities::{Component, MatrixEntry, Module, Release, Ticket, TicketWithRelations};
use rtrack_core::matrix::{CellValue, ColumnKind, column_kind};
use rtrack_core::scoping::ReleaseScope;
use rtrack_core::views::{ComponentColumn, DashboardView};

fn component(id: &str, name: &str, sort_order: i64) -> ComponentColumn {
    ComponentColumn {
        component: Component {
            id: id.into(),
            name: name.into(),
            module_id: "mod-checkout".into(),
            sort_order,
            created_at: Utc::now(),
        },
        kind: column_kind(name, "COMMENTS"),
    }
}

fn ticket(id: &str, release_id: &str) -> TicketWithRelations {
    let now = Utc::now();
    TicketWithRelations {
        ticket: Ticket {
            id: id.into(),
            title: format!("Ticket {id}"),
            description: None,
            status_id: None,
            qa_status_id: None,
            dev_id: None,
            team_id: None,
            environment_id: None,
            release_id: Some(release_id.into()),
            code_freeze: false,
            created_at: now,
            updated_at: now,
        },
        status: None,
        qa_status: None,
        developer: None,
        team: None,
        environment: None,
        release: None,
    }
}

fn view() -> DashboardView {
    let release = Release {
        id: "rel-1".into(),
        name: "2026.10".into(),
        module_id: "mod-checkout".into(),
        start_date: None,
        end_date: None,
        active: true,
        responsible_id: None,
        created_at: Utc::now(),
    };
    DashboardView {
        module: Module {
            id: "mod-checkout".into(),
            name: "Checkout".into(),
            description: None,
            created_at: Utc::now(),
        },
        scope: ReleaseScope::resolve("mod-checkout", vec![release], None),
        tickets: vec![ticket("tkt-1", "rel-1"), ticket("tkt-2", "rel-1")],
        components: vec![
            component("cmp-a", "Cart", 1),
            component("cmp-c", "COMMENTS", 2),
        ],
        matrix: vec![
            MatrixEntry {
                ticket_id: "tkt-1".into(),
                component_id: "cmp-a".into(),
                applies: true,
                notes: None,
            },
            MatrixEntry {
                ticket_id: "tkt-2".into(),
                component_id: "cmp-c".into(),
                applies: true,
                notes: Some("verify on staging".into()),
            },
            MatrixEntry {
                ticket_id: "tkt-2".into(),
                component_id: "cmp-other-module".into(),
                applies: true,
                notes: None,
            },
        ],
        ticket_statuses: Vec::new(),
        qa_statuses: Vec::new(),
    }
}

#[test]
fn rows_follow_column_order_and_default_missing_cells() {
    let rows = view().rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].cells,
        vec![
            CellValue {
                applies: true,
                notes: None
            },
            CellValue::default(),
        ]
    );
    assert_eq!(rows[1].cells[0], CellValue::default());
    assert_eq!(rows[1].cells[1].notes.as_deref(), Some("verify on staging"));
}

#[test]
fn notes_column_kind_is_marked() {
    let view = view();
    assert_eq!(view.components[0].kind, ColumnKind::Toggle);
    assert_eq!(view.components[1].kind, ColumnKind::Notes);
}

#[test]
fn view_serializes_with_flattened_records() {
    let json = serde_json::to_value(view()).unwrap();
    assert_eq!(json["components"][1]["name"], "COMMENTS");
    assert_eq!(json["components"][1]["kind"], "notes");
    assert_eq!(json["tickets"][0]["release_id"], "rel-1");
    assert_eq!(json["scope"]["current"]["id"], "rel-1");
}

#[test]
fn records_have_json_schemas() {
    let schema = serde_json::to_value(schemars::schema_for!(DashboardView)).unwrap();
    assert!(schema["properties"]["tickets"].is_object());
}
