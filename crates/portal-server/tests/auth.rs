mod common;

use axum::http::{StatusCode, header};
use pretty_assertions::assert_eq;
use rstest::rstest;

use common::*;

#[tokio::test]
async fn missing_token_is_401() {
    let (app, _) = app().await;
    let (status, body) = send(&app, get("/validate-client-assignment", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Authentication token required");
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let (app, _) = app().await;
    let req = axum::http::Request::builder()
        .uri("/api/client/quotes")
        .header(header::AUTHORIZATION, format!("Basic {CLIENT_TOKEN}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_token_is_403() {
    let (app, _) = app().await;
    let (status, body) = send(&app, get("/validate-client-assignment", Some("not-a-user"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[rstest]
#[case(CLIENT_TOKEN)]
#[case(CLIENT_SESSION)]
#[tokio::test]
async fn known_token_reaches_handler(#[case] token: &str) {
    let (app, _) = app().await;
    let (status, body) = send(&app, get("/validate-client-assignment", Some(token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientUuid"], CLIENT_UUID);
}

#[rstest]
#[case(UNASSIGNED_TOKEN)]
#[case("blank-token-1")]
#[case("absent-token-1")]
#[tokio::test]
async fn unassigned_users_are_denied_client_routes(#[case] token: &str) {
    let (app, _) = app().await;
    for uri in [
        "/validate-client-assignment",
        "/api/client/permissions",
        "/api/client/quotes",
        "/api/client/jobs",
    ] {
        let (status, body) = send(&app, get(uri, Some(token))).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        assert_eq!(body["message"], "No client assigned to this account");
    }
}

#[tokio::test]
async fn admin_gate() {
    let (app, _) = app().await;
    let (status, _) = send(&app, get("/api/admin/settings", Some(CLIENT_TOKEN))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, get("/api/admin/settings", Some(ADMIN_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn admin_without_client_is_denied_client_routes() {
    let (app, _) = app().await;
    let (status, _) = send(&app, get("/api/client/quotes", Some(ADMIN_TOKEN))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn store_failure_is_500_with_generic_message() {
    let app = broken_app();
    let (status, body) = send(&app, get("/api/client/quotes", Some(CLIENT_TOKEN))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn health_needs_no_token() {
    let (app, _) = app().await;
    let (status, body) = send(&app, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (app, _) = app().await;
    let (status, body) = send(&app, get("/nope", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}
