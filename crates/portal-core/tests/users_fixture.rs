//! Decoding a realistic `users_data` blob as the web portal writes it.

use pretty_assertions::assert_eq;
use portal_core::entities::PortalUser;

const USERS_DATA: &str = r#"[
    {
        "id": 1,
        "email": "admin@acme.com",
        "name": "Site Admin",
        "token": "a1b2c3d4e5f6a7b8",
        "role": "admin",
        "assignedClientUuid": "none"
    },
    {
        "id": "2",
        "email": "Client@Customer.com",
        "sessionToken": "sess-9f8e7d6c5b4a",
        "role": "client",
        "assignedClientUuid": "3f1c7a52-8d2e-4b7a-9c31-0a6f5e2d1b90",
        "createdAt": "2024-01-15T09:30:00.000Z"
    },
    {
        "email": "pending@customer.com",
        "role": "client"
    }
]"#;

#[test]
fn decodes_mixed_user_records() {
    let users: Vec<PortalUser> = serde_json::from_str(USERS_DATA).unwrap();
    assert_eq!(users.len(), 3);

    let admin = &users[0];
    assert!(admin.is_admin());
    assert_eq!(admin.assigned_client(), None);
    assert!(admin.matches_token("a1b2c3d4e5f6a7b8"));

    let client = &users[1];
    assert!(!client.is_admin());
    assert!(client.has_email("client@customer.com"));
    assert_eq!(
        client.assigned_client(),
        Some("3f1c7a52-8d2e-4b7a-9c31-0a6f5e2d1b90")
    );
    assert!(client.matches_token("sess-9f8e7d6c5b4a"));
    assert!(client.extra.contains_key("createdAt"));

    let pending = &users[2];
    assert_eq!(pending.id, None);
    assert!(!pending.has_token());
    assert_eq!(pending.assigned_client(), None);
}

#[test]
fn reencoding_keeps_camel_case_and_unknown_fields() {
    let users: Vec<PortalUser> = serde_json::from_str(USERS_DATA).unwrap();
    let value = serde_json::to_value(&users).unwrap();
    assert_eq!(value[1]["sessionToken"], "sess-9f8e7d6c5b4a");
    assert_eq!(value[1]["createdAt"], "2024-01-15T09:30:00.000Z");
    assert_eq!(value[0]["assignedClientUuid"], "none");
}
