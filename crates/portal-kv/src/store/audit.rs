//! Cross-key consistency report.
//!
//! Nothing in the store ties `client:auth:*`, `client:permissions:*`, and
//! `users_data` together, so they drift. This walks all three and lists the
//! gaps without repairing anything.

use std::collections::BTreeSet;

use portal_core::validation::{normalize_client_uuid, normalize_email};
use serde::Serialize;

use super::PortalStore;
use crate::KvError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    /// Client UUIDs with permissions but no auth mapping pointing at them.
    pub permissions_without_auth: Vec<String>,
    /// Auth emails whose client has no permissions entry.
    pub auth_without_permissions: Vec<String>,
    /// Auth emails whose record could not be decoded.
    pub unreadable_auth: Vec<String>,
    /// User emails assigned to a client that has no permissions entry.
    pub users_without_permissions: Vec<String>,
    /// Auth emails stored with upper case or padding; logins never find them.
    pub unnormalized_auth_keys: Vec<String>,
    /// Permission UUIDs stored with upper case or padding; lookups never
    /// find them.
    pub unnormalized_permission_keys: Vec<String>,
}

impl ConsistencyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.permissions_without_auth.is_empty()
            && self.auth_without_permissions.is_empty()
            && self.unreadable_auth.is_empty()
            && self.users_without_permissions.is_empty()
            && self.unnormalized_auth_keys.is_empty()
            && self.unnormalized_permission_keys.is_empty()
    }
}

impl PortalStore {
    /// Walk every auth mapping, permission entry, and user. Records are read
    /// by their exact key, and UUIDs compare case-insensitively.
    pub async fn consistency_report(&self) -> Result<ConsistencyReport, KvError> {
        let mut report = ConsistencyReport::default();

        let mut permission_clients = BTreeSet::new();
        for uuid in self.list_permission_clients().await? {
            let normalized = normalize_client_uuid(&uuid);
            if normalized != uuid {
                report.unnormalized_permission_keys.push(uuid);
            }
            permission_clients.insert(normalized);
        }

        let mut auth_clients = BTreeSet::new();
        for (email, auth) in self.client_auth_records().await? {
            if normalize_email(&email) != email {
                report.unnormalized_auth_keys.push(email.clone());
            }
            match auth {
                Ok(auth) => {
                    let client = normalize_client_uuid(&auth.client_uuid);
                    if !permission_clients.contains(&client) {
                        report.auth_without_permissions.push(email);
                    }
                    auth_clients.insert(client);
                }
                Err(error) => {
                    tracing::warn!(%email, %error, "unreadable client auth record");
                    report.unreadable_auth.push(email);
                }
            }
        }

        report.permissions_without_auth = permission_clients
            .iter()
            .filter(|uuid| !auth_clients.contains(*uuid))
            .cloned()
            .collect();

        for user in self.load_users().await? {
            let Some(client) = user.assigned_client() else {
                continue;
            };
            if !permission_clients.contains(&normalize_client_uuid(client)) {
                report.users_without_permissions.push(user.email.clone());
            }
        }

        Ok(report)
    }
}
