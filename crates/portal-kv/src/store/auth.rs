//! `client:auth:<email>`: login credential mapping.

use portal_core::entities::ClientAuth;
use portal_core::keys;

use super::{Listed, PortalStore};
use crate::KvError;

impl PortalStore {
    pub async fn get_client_auth(&self, email: &str) -> Result<Option<ClientAuth>, KvError> {
        self.get_json(&keys::client_auth(email)).await
    }

    pub async fn set_client_auth(&self, email: &str, auth: &ClientAuth) -> Result<(), KvError> {
        self.put_json(&keys::client_auth(email), auth).await
    }

    /// Every auth mapping, read by its exact key. Mappings written under a
    /// mixed-case email are returned too, although [`Self::get_client_auth`]
    /// cannot reach them.
    pub async fn client_auth_records(&self) -> Result<Listed<ClientAuth>, KvError> {
        self.records_under(keys::CLIENT_AUTH_PREFIX).await
    }
}
