//! # portal-server
//!
//! HTTP API for the ServiceM8 client portal.
//!
//! Every route under `/api`, plus `/validate-client-assignment`, requires a
//! bearer token found in `users_data`. Client routes additionally require
//! an assigned client; admin routes require the admin role. Responses are
//! JSON and always carry a `success` flag.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, put},
};
use portal_config::ServerConfig;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::ApiError;
pub use state::AppState;

use middleware::{require_admin, require_auth, require_client};
use routes::{admin, client, debug, health, jobs};

/// All routes with guards applied, without transport layers.
pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route(
            "/api/admin/settings",
            get(admin::get_settings).put(admin::put_settings),
        )
        .route(
            "/api/admin/clients/{uuid}/permissions",
            put(admin::put_client_permissions),
        )
        .route_layer(from_fn(require_admin));

    let client_routes = Router::new()
        .route(
            "/validate-client-assignment",
            get(client::validate_client_assignment),
        )
        .route("/api/client/permissions", get(client::permissions))
        .route("/api/client/jobs", get(client::jobs))
        .route("/api/client/quotes", get(client::quotes))
        .route("/api/jobs/{uuid}/location", get(jobs::location))
        .route_layer(from_fn(require_client));

    let protected = admin_routes
        .merge(client_routes)
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let mut app = Router::new()
        .route("/health", get(health::health))
        .merge(protected);
    if state.debug_routes {
        tracing::warn!("debug routes enabled: /debug-users is unauthenticated");
        app = app.route("/debug-users", get(debug::debug_users));
    }

    app.fallback(routes::not_found).with_state(state)
}

/// [`router`] plus CORS and request tracing.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    router(state)
        .layer(cors(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%origin, %error, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(parsed))
}

/// Serve until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
