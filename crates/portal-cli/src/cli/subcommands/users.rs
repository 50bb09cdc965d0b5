use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users with tokens masked.
    List,
    /// Show one user.
    Show { email: String },
    /// Issue a new random token.
    ResetToken {
        email: String,
        #[arg(long)]
        dry_run: bool,
    },
    /// Assign a client UUID, or `none` to clear.
    Assign {
        email: String,
        client_uuid: String,
        #[arg(long)]
        dry_run: bool,
    },
}
