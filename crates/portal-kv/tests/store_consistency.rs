use pretty_assertions::assert_eq;
use serde_json::json;

use portal_core::entities::ClientPermissions;
use portal_core::enums::PermissionTemplate;
use portal_kv::store::ConsistencyReport;
use portal_kv::{KvStore, PortalStore};

async fn seed(store: &PortalStore) {
    let kv = store.raw();
    kv.set(
        "users_data",
        &json!([
            {"email": "admin@acme.com", "token": "t-admin", "role": "admin"},
            {"email": "jo@alpha.com", "token": "t-jo", "role": "client", "assignedClientUuid": "alpha"},
            {"email": "sam@beta.com", "token": "t-sam", "role": "client", "assignedClientUuid": "beta"},
            {"email": "new@gamma.com", "role": "client", "assignedClientUuid": "none"}
        ])
        .to_string(),
    )
    .await
    .unwrap();

    kv.set("client:auth:jo@alpha.com", r#"{"clientUuid":"alpha"}"#)
        .await
        .unwrap();
    kv.set("client:auth:sam@beta.com", r#"{"clientUuid":"beta"}"#)
        .await
        .unwrap();
    kv.set("client:auth:broken@x.com", "{not json").await.unwrap();

    for uuid in ["alpha", "orphan"] {
        store
            .set_permissions(&ClientPermissions::from_template(
                uuid,
                PermissionTemplate::Standard,
                None,
            ))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn report_lists_every_gap() {
    let store = PortalStore::in_memory();
    seed(&store).await;

    let report = store.consistency_report().await.unwrap();
    assert_eq!(
        report,
        ConsistencyReport {
            permissions_without_auth: vec!["orphan".into()],
            auth_without_permissions: vec!["sam@beta.com".into()],
            unreadable_auth: vec!["broken@x.com".into()],
            users_without_permissions: vec!["sam@beta.com".into()],
            ..ConsistencyReport::default()
        }
    );
    assert!(!report.is_clean());
}

#[tokio::test]
async fn mixed_case_keys_are_read_and_reported() {
    let store = PortalStore::in_memory();
    let kv = store.raw();
    kv.set("client:auth:Jo@Client.com", r#"{"clientUuid":"c-1"}"#)
        .await
        .unwrap();
    kv.set("client:auth:ann@client.com", r#"{"clientUuid":"C-2"}"#)
        .await
        .unwrap();
    kv.set("client:permissions:C-2", r#"{"clientUuid":"C-2","permissions":["view_jobs"]}"#)
        .await
        .unwrap();

    let report = store.consistency_report().await.unwrap();
    assert_eq!(
        report,
        ConsistencyReport {
            auth_without_permissions: vec!["Jo@Client.com".into()],
            unnormalized_auth_keys: vec!["Jo@Client.com".into()],
            unnormalized_permission_keys: vec!["C-2".into()],
            ..ConsistencyReport::default()
        }
    );
}

#[tokio::test]
async fn empty_store_is_clean() {
    let store = PortalStore::in_memory();
    assert!(store.consistency_report().await.unwrap().is_clean());
}

#[tokio::test]
async fn permission_template_round_trip() {
    let store = PortalStore::in_memory();
    let record = ClientPermissions::from_template("c-1", PermissionTemplate::Enterprise, None);
    store.set_permissions(&record).await.unwrap();

    let reread = store.get_permissions("c-1").await.unwrap().unwrap();
    assert_eq!(reread.permissions, PermissionTemplate::Enterprise.permissions());
    assert_eq!(reread.tier().to_string(), "enterprise");
}
