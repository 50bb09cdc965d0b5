use clap::Subcommand;

use crate::cli::subcommands::{ClientCommands, KvCommands, PermissionCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Portal users in `users_data`.
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Client permission sets.
    Permissions {
        #[command(subcommand)]
        action: PermissionCommands,
    },
    /// Report keys that disagree with each other.
    Audit,
    /// Raw key-value store access.
    Kv {
        #[command(subcommand)]
        action: KvCommands,
    },
    /// ServiceM8 client companies.
    Clients {
        #[command(subcommand)]
        action: ClientCommands,
    },
}
