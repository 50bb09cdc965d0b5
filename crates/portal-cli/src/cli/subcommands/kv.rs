use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum KvCommands {
    /// Print a key's value.
    Get { key: String },
    /// List keys matching a glob pattern.
    Keys {
        #[arg(default_value = "*")]
        pattern: String,
    },
    /// Delete a key.
    Del {
        key: String,
        #[arg(long)]
        dry_run: bool,
    },
}
