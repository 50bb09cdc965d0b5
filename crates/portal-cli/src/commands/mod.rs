pub mod audit;
pub mod clients;
pub mod kv;
pub mod permissions;
pub mod users;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Users { action } => users::handle(&action, ctx, flags).await,
        Commands::Permissions { action } => permissions::handle(&action, ctx, flags).await,
        Commands::Audit => audit::handle(ctx, flags).await,
        Commands::Kv { action } => kv::handle(&action, ctx, flags).await,
        Commands::Clients { action } => clients::handle(&action, &ctx.config, flags).await,
    }
}
