use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rtrack` binary.
#[derive(Debug, Parser)]
#[command(name = "rtrack", version, about = "Release, ticket and component matrix tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path (overrides `database.path`)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{ComponentCommands, DeveloperCommands, TicketCommands, TicketField};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_and_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rtrack",
            "--format",
            "table",
            "--limit",
            "10",
            "module",
            "list",
            "--db",
            ":memory:",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        let flags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some(":memory:"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["rtrack", "--format", "xml", "module", "list"]).is_err());
    }

    #[test]
    fn reorder_takes_ids_in_order() {
        let cli = Cli::try_parse_from([
            "rtrack", "component", "reorder", "--module", "mod-1", "cmp-c", "cmp-a", "cmp-b",
        ])
        .expect("cli should parse");
        let Commands::Component {
            action: ComponentCommands::Reorder { module, ids },
        } = cli.command
        else {
            panic!("expected component reorder");
        };
        assert_eq!(module, "mod-1");
        assert_eq!(ids, vec!["cmp-c", "cmp-a", "cmp-b"]);
    }

    #[test]
    fn reorder_requires_ids() {
        assert!(Cli::try_parse_from(["rtrack", "component", "reorder", "--module", "m"]).is_err());
    }

    #[test]
    fn developer_modules_are_repeatable() {
        let cli = Cli::try_parse_from([
            "rtrack", "developer", "create", "--name", "Ana", "--module", "mod-1", "--module",
            "mod-2",
        ])
        .expect("cli should parse");
        let Commands::Developer {
            action: DeveloperCommands::Create { modules, .. },
        } = cli.command
        else {
            panic!("expected developer create");
        };
        assert_eq!(modules, vec!["mod-1", "mod-2"]);
    }

    #[test]
    fn clear_modules_conflicts_with_module() {
        let parsed = Cli::try_parse_from([
            "rtrack",
            "developer",
            "update",
            "dev-1",
            "--module",
            "mod-1",
            "--clear-modules",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn ticket_list_filters_are_exclusive() {
        assert!(
            Cli::try_parse_from(["rtrack", "ticket", "list", "--release", "r", "--unassigned"])
                .is_err()
        );
        let cli = Cli::try_parse_from(["rtrack", "ticket", "list", "--unassigned"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Ticket {
                action: TicketCommands::List {
                    unassigned: true,
                    release: None
                }
            }
        ));
    }

    #[test]
    fn ticket_update_clear_fields() {
        let cli = Cli::try_parse_from([
            "rtrack", "ticket", "update", "tkt-1", "--clear", "qa-status", "--clear", "dev",
        ])
        .expect("cli should parse");
        let Commands::Ticket {
            action: TicketCommands::Update { clear, .. },
        } = cli.command
        else {
            panic!("expected ticket update");
        };
        assert_eq!(clear, vec![TicketField::QaStatus, TicketField::Dev]);
    }

    #[test]
    fn release_dates_parse() {
        let cli = Cli::try_parse_from([
            "rtrack", "release", "create", "--name", "2026.11", "--module", "mod-1", "--start",
            "2026-11-02", "--active",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Release { .. }));
        assert!(
            Cli::try_parse_from([
                "rtrack", "release", "create", "--name", "x", "--module", "m", "--start",
                "next week",
            ])
            .is_err()
        );
    }
}
