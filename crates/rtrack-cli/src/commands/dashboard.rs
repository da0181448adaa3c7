use rtrack_core::matrix::ColumnKind;
use rtrack_core::views::DashboardView;

use crate::cli::root_commands::DashboardArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::output::table::{TableOptions, render_entity_table};

/// Handle `rtrack dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let view = ctx
        .service
        .load_dashboard(
            &args.module,
            args.release.as_deref(),
            &ctx.config.matrix.notes_component,
        )
        .await?;

    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_matrix(&view, TableOptions::from_env()));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&view, flags.format),
    }
}

/// One row per ticket, one column per component in sort order.
fn render_matrix(view: &DashboardView, options: TableOptions) -> String {
    let title = match &view.scope.current {
        Some(release) => format!("{} / {}", view.module.name, release.name),
        None => format!("{} / (no active release)", view.module.name),
    };

    let mut headers = vec!["ticket", "title"];
    headers.extend(view.components.iter().map(|c| c.component.name.as_str()));

    let rows = view
        .rows()
        .into_iter()
        .map(|row| {
            let mut cells = vec![row.ticket_id, row.title];
            cells.extend(view.components.iter().zip(row.cells).map(|(column, cell)| {
                match column.kind {
                    ColumnKind::Toggle if cell.applies => String::from("x"),
                    ColumnKind::Toggle => String::new(),
                    ColumnKind::Notes => cell.notes.unwrap_or_default(),
                }
            }));
            cells
        })
        .collect::<Vec<_>>();

    if rows.is_empty() {
        return format!("{title}\n(no tickets)");
    }
    format!("{title}\n{}", render_entity_table(&headers, &rows, options))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rtrack_core::entities::{
        Component, MatrixEntry, Module, Release, Ticket, TicketWithRelations,
    };
    use rtrack_core::matrix::ColumnKind;
    use rtrack_core::scoping::ReleaseScope;
    use rtrack_core::views::{ComponentColumn, DashboardView};

    use super::render_matrix;
    use crate::output::table::TableOptions;

    fn view(with_release: bool) -> DashboardView {
        let now = Utc::now();
        let module = Module {
            id: "mod-1".into(),
            name: "Checkout".into(),
            description: None,
            created_at: now,
        };
        let release = Release {
            id: "rel-1".into(),
            name: "2026.10".into(),
            module_id: "mod-1".into(),
            start_date: None,
            end_date: None,
            active: true,
            responsible_id: None,
            created_at: now,
        };
        let column = |id: &str, name: &str, order: i64, kind| ComponentColumn {
            component: Component {
                id: id.into(),
                name: name.into(),
                module_id: "mod-1".into(),
                sort_order: order,
                created_at: now,
            },
            kind,
        };
        let ticket = TicketWithRelations {
            ticket: Ticket {
                id: "tkt-1".into(),
                title: "Totals".into(),
                description: None,
                status_id: None,
                qa_status_id: None,
                dev_id: None,
                team_id: None,
                environment_id: None,
                release_id: Some("rel-1".into()),
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
        };
        let releases = if with_release { vec![release] } else { Vec::new() };
        DashboardView {
            module,
            scope: ReleaseScope::resolve("mod-1", releases, None),
            tickets: if with_release { vec![ticket] } else { Vec::new() },
            components: vec![
                column("cmp-a", "API", 1, ColumnKind::Toggle),
                column("cmp-w", "Web", 2, ColumnKind::Toggle),
                column("cmp-n", "COMMENTS", 3, ColumnKind::Notes),
            ],
            matrix: vec![
                MatrixEntry {
                    ticket_id: "tkt-1".into(),
                    component_id: "cmp-w".into(),
                    applies: true,
                    notes: None,
                },
                MatrixEntry {
                    ticket_id: "tkt-1".into(),
                    component_id: "cmp-n".into(),
                    applies: true,
                    notes: Some("staging".into()),
                },
            ],
            ticket_statuses: Vec::new(),
            qa_statuses: Vec::new(),
        }
    }

    #[test]
    fn matrix_columns_follow_component_order() {
        let out = render_matrix(&view(true), TableOptions { max_width: None });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Checkout / 2026.10");
        let header: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(header, vec!["ticket", "title", "API", "Web", "COMMENTS"]);
        let cells: Vec<&str> = lines[3].split_whitespace().collect();
        assert_eq!(cells, vec!["tkt-1", "Totals", "x", "staging"]);
    }

    #[test]
    fn no_release_renders_placeholder() {
        let out = render_matrix(&view(false), TableOptions { max_width: None });
        assert_eq!(out, "Checkout / (no active release)\n(no tickets)");
    }
}
