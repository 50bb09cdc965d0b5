mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::*;

const SETTINGS: &str = "/api/admin/settings";

#[tokio::test]
async fn defaults_when_unset() {
    let (app, _) = app().await;
    let (status, body) = send(&app, get(SETTINGS, Some(ADMIN_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings"]["companyName"], "");
    assert_eq!(body["settings"]["notificationsEnabled"], true);
}

#[tokio::test]
async fn partial_stored_settings_are_served_with_defaults() {
    let (app, store) = app().await;
    store
        .raw()
        .set("admin:settings", r#"{"companyName":"Acme Plumbing","contactEmail":null}"#)
        .await
        .unwrap();

    let (status, body) = send(&app, get(SETTINGS, Some(ADMIN_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings"]["companyName"], "Acme Plumbing");
    assert_eq!(body["settings"]["contactEmail"], "");
    assert_eq!(body["settings"]["supportPhone"], "");
    assert_eq!(body["settings"]["notificationsEnabled"], true);
}

#[tokio::test]
async fn missing_field_is_400() {
    let (app, store) = app().await;
    let (status, body) = send(
        &app,
        put_json(
            SETTINGS,
            ADMIN_TOKEN,
            &json!({"contactEmail": "a@b.co", "supportPhone": "1", "notificationsEnabled": true}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "companyName is required");
    assert!(store.admin_settings().await.unwrap().is_none());
}

#[tokio::test]
async fn blank_field_is_400() {
    let (app, _) = app().await;
    let (status, body) = send(
        &app,
        put_json(
            SETTINGS,
            ADMIN_TOKEN,
            &json!({"companyName": "Acme", "contactEmail": "a@b.co", "supportPhone": "  ",
                    "notificationsEnabled": true}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "supportPhone is required");
}

#[tokio::test]
async fn invalid_email_is_400() {
    let (app, _) = app().await;
    let (status, body) = send(
        &app,
        put_json(
            SETTINGS,
            ADMIN_TOKEN,
            &json!({"companyName": "Acme", "contactEmail": "not-an-email", "supportPhone": "555",
                    "notificationsEnabled": false}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "contactEmail is not a valid email address");
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (app, _) = app().await;
    let (status, body) = send(&app, put_raw(SETTINGS, ADMIN_TOKEN, "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn valid_settings_are_normalized_on_next_get() {
    let (app, _) = app().await;
    let (status, body) = send(
        &app,
        put_json(
            SETTINGS,
            ADMIN_TOKEN,
            &json!({"companyName": "  Acme Plumbing ", "contactEmail": " Office@Acme.COM ",
                    "supportPhone": " 555-0100 ", "notificationsEnabled": false}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = send(&app, get(SETTINGS, Some(ADMIN_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    let settings = &body["settings"];
    assert_eq!(settings["companyName"], "Acme Plumbing");
    assert_eq!(settings["contactEmail"], "office@acme.com");
    assert_eq!(settings["supportPhone"], "555-0100");
    assert_eq!(settings["notificationsEnabled"], false);
    assert_eq!(settings["updatedBy"], "admin@acme.com");
    assert!(settings["updatedAt"].is_string());
}

#[tokio::test]
async fn client_cannot_write_settings() {
    let (app, _) = app().await;
    let (status, _) = send(
        &app,
        put_json(
            SETTINGS,
            CLIENT_TOKEN,
            &json!({"companyName": "x", "contactEmail": "a@b.co", "supportPhone": "1",
                    "notificationsEnabled": true}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
