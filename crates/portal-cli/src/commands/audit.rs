use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Print the cross-key consistency report. Nothing is repaired.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.store.consistency_report().await?;
    if report.is_clean() {
        tracing::info!("store is consistent");
    } else {
        tracing::warn!(
            permissions_without_auth = report.permissions_without_auth.len(),
            auth_without_permissions = report.auth_without_permissions.len(),
            users_without_permissions = report.users_without_permissions.len(),
            unnormalized_keys =
                report.unnormalized_auth_keys.len() + report.unnormalized_permission_keys.len(),
            "store has inconsistencies"
        );
    }
    output(&report, flags.format)
}
