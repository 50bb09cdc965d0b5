//! Token authentication and authorization gates.
//!
//! [`require_auth`] resolves the bearer token to a user from `users_data`
//! on every request. The gates then read the [`AuthUser`] it attached:
//! [`require_client`] needs an assigned client, [`require_admin`] needs the
//! admin role. Gates are independent; there is no role hierarchy.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use portal_core::entities::PortalUser;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated user, attached by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub PortalUser);

/// The caller's assigned client UUID, attached by [`require_client`].
#[derive(Debug, Clone)]
pub struct AssignedClient(pub String);

/// Token from `Authorization: Bearer <token>`. The scheme is matched
/// case-insensitively; blank tokens count as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())
        .ok_or(ApiError::Unauthenticated("Authentication token required"))?;

    let user = state
        .store
        .find_user_by_token(token)
        .await?
        .ok_or(ApiError::Forbidden("Invalid or expired token"))?;

    tracing::debug!(email = %user.email, "authenticated request");
    req.extensions_mut().insert(AuthUser(user));
    Ok(next.run(req).await)
}

pub async fn require_client(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let client = {
        let AuthUser(user) = auth_user(&req)?;
        match user.assigned_client() {
            Some(client) => client.to_string(),
            None => {
                tracing::info!(email = %user.email, "client route denied: no assigned client");
                return Err(ApiError::Forbidden("No client assigned to this account"));
            }
        }
    };
    req.extensions_mut().insert(AssignedClient(client));
    Ok(next.run(req).await)
}

pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    let AuthUser(user) = auth_user(&req)?;
    if !user.is_admin() {
        tracing::info!(email = %user.email, "admin route denied");
        return Err(ApiError::Forbidden("Admin access required"));
    }
    Ok(next.run(req).await)
}

fn auth_user(req: &Request) -> Result<&AuthUser, ApiError> {
    req.extensions()
        .get::<AuthUser>()
        .ok_or(ApiError::Unauthenticated("Authentication token required"))
}
