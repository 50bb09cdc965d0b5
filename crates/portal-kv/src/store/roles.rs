//! `client:role:<uuid>`: cached role string, one-year expiry.

use portal_core::keys;

use super::PortalStore;
use crate::KvError;

impl PortalStore {
    pub async fn cache_client_role(&self, client_uuid: &str, role: &str) -> Result<(), KvError> {
        self.raw()
            .setex(&keys::client_role(client_uuid), keys::CLIENT_ROLE_TTL_SECS, role)
            .await
    }

    /// Cached role, unquoting values that were stored JSON-encoded.
    pub async fn cached_client_role(&self, client_uuid: &str) -> Result<Option<String>, KvError> {
        let raw = self.raw().get(&keys::client_role(client_uuid)).await?;
        Ok(raw.map(|value| serde_json::from_str::<String>(&value).unwrap_or(value)))
    }
}
