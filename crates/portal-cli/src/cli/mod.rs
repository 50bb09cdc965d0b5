use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level parser for the `portalctl` binary.
#[derive(Debug, Parser)]
#[command(
    name = "portalctl",
    version,
    about = "Maintenance commands for the ServiceM8 client portal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{KvCommands, PermissionCommands, UserCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_flag_before_or_after_subcommand() {
        let cli = Cli::try_parse_from(["portalctl", "--format", "table", "audit"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Table);

        let cli = Cli::try_parse_from(["portalctl", "audit", "-f", "raw", "--quiet"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Audit));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["portalctl", "--format", "xml", "audit"]).is_err());
    }

    #[test]
    fn permissions_set_takes_template_or_list() {
        let cli = Cli::try_parse_from([
            "portalctl", "permissions", "set", "c-1", "--permission", "view_jobs",
            "--permission", "view_reports",
        ])
        .unwrap();
        match cli.command {
            Commands::Permissions {
                action:
                    PermissionCommands::Set {
                        client_uuid,
                        template,
                        permission,
                        dry_run,
                    },
            } => {
                assert_eq!(client_uuid, "c-1");
                assert_eq!(template, None);
                assert!(!dry_run);
                assert_eq!(permission, vec!["view_jobs", "view_reports"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let conflict = Cli::try_parse_from([
            "portalctl", "permissions", "set", "c-1", "--template", "basic", "--permission", "x",
        ]);
        assert!(conflict.is_err());

        let neither = Cli::try_parse_from(["portalctl", "permissions", "set", "c-1"]);
        assert!(neither.is_err());
    }

    #[test]
    fn backfill_defaults_to_standard() {
        let cli = Cli::try_parse_from(["portalctl", "permissions", "backfill", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Permissions {
                action: PermissionCommands::Backfill { template, dry_run },
            } => {
                assert_eq!(template, "standard");
                assert!(dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn writing_user_commands_accept_dry_run() {
        let cli = Cli::try_parse_from(["portalctl", "users", "reset-token", "jo@x.com", "--dry-run"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Users { action: UserCommands::ResetToken { dry_run: true, .. } }
        ));

        let cli = Cli::try_parse_from([
            "portalctl", "users", "assign", "jo@x.com", "none", "--dry-run",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Users { action: UserCommands::Assign { dry_run: true, .. } }
        ));
    }

    #[test]
    fn user_and_kv_commands_parse() {
        let cli = Cli::try_parse_from(["portalctl", "users", "assign", "jo@x.com", "none"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Users { action: UserCommands::Assign { .. } }
        ));

        let cli = Cli::try_parse_from(["portalctl", "kv", "del", "job:location:j-1", "--dry-run"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Kv { action: KvCommands::Del { dry_run: true, .. } }
        ));
    }
}
