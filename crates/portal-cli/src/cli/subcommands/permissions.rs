use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum PermissionCommands {
    /// Read a client's permission set.
    Get { client_uuid: String },
    /// Replace a client's permission set.
    Set {
        client_uuid: String,
        /// basic, standard, or enterprise
        #[arg(long, conflicts_with = "permission", required_unless_present = "permission")]
        template: Option<String>,
        /// Explicit permission (repeatable); stored as `custom`
        #[arg(long)]
        permission: Vec<String>,
        #[arg(long)]
        dry_run: bool,
    },
    /// Give every client with a login but no permissions a template.
    Backfill {
        #[arg(long, default_value = "standard")]
        template: String,
        #[arg(long)]
        dry_run: bool,
    },
    /// Re-derive each client's template from its permissions and cache the role.
    Classify {
        #[arg(long)]
        dry_run: bool,
    },
}
