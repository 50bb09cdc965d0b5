//! `admin:settings`: singleton admin configuration.

use portal_core::entities::AdminSettings;
use portal_core::keys;

use super::PortalStore;
use crate::KvError;

impl PortalStore {
    pub async fn admin_settings(&self) -> Result<Option<AdminSettings>, KvError> {
        self.get_json(keys::ADMIN_SETTINGS).await
    }

    pub async fn save_admin_settings(&self, settings: &AdminSettings) -> Result<(), KvError> {
        self.put_json(keys::ADMIN_SETTINGS, settings).await
    }
}
