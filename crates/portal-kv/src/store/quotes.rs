//! `quotes_data`: every quote in one array.

use portal_core::entities::Quote;
use portal_core::keys;

use super::PortalStore;
use crate::KvError;

impl PortalStore {
    pub async fn load_quotes(&self) -> Result<Vec<Quote>, KvError> {
        Ok(self
            .get_json::<Vec<Quote>>(keys::QUOTES_DATA)
            .await?
            .unwrap_or_default())
    }

    pub async fn save_quotes(&self, quotes: &[Quote]) -> Result<(), KvError> {
        self.put_json(keys::QUOTES_DATA, quotes).await
    }

    pub async fn quotes_for_client(&self, client_uuid: &str) -> Result<Vec<Quote>, KvError> {
        let quotes = self.load_quotes().await?;
        Ok(quotes
            .into_iter()
            .filter(|q| q.belongs_to(client_uuid))
            .collect())
    }
}
