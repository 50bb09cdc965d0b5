//! `client:permissions:<uuid>`: permission set per client.

use portal_core::entities::ClientPermissions;
use portal_core::keys;

use super::{Listed, PortalStore};
use crate::KvError;

impl PortalStore {
    pub async fn get_permissions(
        &self,
        client_uuid: &str,
    ) -> Result<Option<ClientPermissions>, KvError> {
        self.get_json(&keys::client_permissions(client_uuid)).await
    }

    /// Overwrite the permission record for `record.client_uuid`.
    pub async fn set_permissions(&self, record: &ClientPermissions) -> Result<(), KvError> {
        tracing::info!(
            client_uuid = %record.client_uuid,
            count = record.permissions.len(),
            template = %record.template,
            "writing client permissions"
        );
        self.put_json(&keys::client_permissions(&record.client_uuid), record)
            .await
    }

    pub async fn delete_permissions(&self, client_uuid: &str) -> Result<bool, KvError> {
        self.raw()
            .del(&keys::client_permissions(client_uuid))
            .await
    }

    /// Every permissions entry, read by its exact key. The identifier is
    /// the UUID as it appears in the key, which older tooling may not have
    /// lowercased.
    pub async fn permission_records(&self) -> Result<Listed<ClientPermissions>, KvError> {
        self.records_under(keys::CLIENT_PERMISSIONS_PREFIX).await
    }

    /// Client UUIDs that have a permissions entry, as stored in the key.
    pub async fn list_permission_clients(&self) -> Result<Vec<String>, KvError> {
        self.ids_under(keys::CLIENT_PERMISSIONS_PREFIX).await
    }
}
