//! `users_data`: every portal user in one array.

use portal_core::entities::PortalUser;
use portal_core::keys;

use super::PortalStore;
use crate::KvError;

impl PortalStore {
    /// All users. A missing `users_data` key is an empty list.
    pub async fn load_users(&self) -> Result<Vec<PortalUser>, KvError> {
        Ok(self
            .get_json::<Vec<PortalUser>>(keys::USERS_DATA)
            .await?
            .unwrap_or_default())
    }

    pub async fn save_users(&self, users: &[PortalUser]) -> Result<(), KvError> {
        self.put_json(keys::USERS_DATA, users).await
    }

    /// First user whose `token` or `sessionToken` equals `token`.
    pub async fn find_user_by_token(&self, token: &str) -> Result<Option<PortalUser>, KvError> {
        let users = self.load_users().await?;
        Ok(users.into_iter().find(|u| u.matches_token(token)))
    }

    /// First user with this email (case-insensitive, trimmed).
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<PortalUser>, KvError> {
        let users = self.load_users().await?;
        Ok(users.into_iter().find(|u| u.has_email(email)))
    }

    /// Apply `update` to the user with this email and write the whole array
    /// back. Returns the updated user, or `None` (and no write) if absent.
    ///
    /// Read-modify-write with no concurrency guard.
    pub async fn update_user<F>(&self, email: &str, update: F) -> Result<Option<PortalUser>, KvError>
    where
        F: FnOnce(&mut PortalUser) + Send,
    {
        let mut users = self.load_users().await?;
        let Some(user) = users.iter_mut().find(|u| u.has_email(email)) else {
            return Ok(None);
        };
        update(user);
        let updated = user.clone();
        self.save_users(&users).await?;
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    async fn seeded() -> PortalStore {
        let store = PortalStore::in_memory();
        let users = json!([
            {"id": 1, "email": "admin@acme.com", "token": "admin-token", "role": "admin"},
            {"id": 2, "email": "jo@client.com", "sessionToken": "jo-session", "role": "client",
             "assignedClientUuid": "c-1"}
        ]);
        store
            .raw()
            .set(keys::USERS_DATA, &users.to_string())
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn missing_users_data_is_empty() {
        let store = PortalStore::in_memory();
        assert!(store.load_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_token_checks_session_token() {
        let store = seeded().await;
        let user = store.find_user_by_token("jo-session").await.unwrap().unwrap();
        assert_eq!(user.email, "jo@client.com");
        assert!(store.find_user_by_token("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_user_writes_back() {
        let store = seeded().await;
        let updated = store
            .update_user("JO@client.com", |u| u.assigned_client_uuid = Some("c-9".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.assigned_client(), Some("c-9"));

        let reread = store.find_user_by_email("jo@client.com").await.unwrap().unwrap();
        assert_eq!(reread.assigned_client(), Some("c-9"));
        assert_eq!(store.load_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn null_fields_on_one_user_do_not_block_the_others() {
        let store = PortalStore::in_memory();
        let users = json!([
            {"email": "admin@acme.com", "token": "t1", "role": "admin"},
            {"email": null, "token": "t2", "role": null, "assignedClientUuid": null}
        ]);
        store
            .raw()
            .set(keys::USERS_DATA, &users.to_string())
            .await
            .unwrap();

        let admin = store.find_user_by_token("t1").await.unwrap().unwrap();
        assert!(admin.is_admin());
        let other = store.find_user_by_token("t2").await.unwrap().unwrap();
        assert_eq!(other.role, "");
        assert!(!other.is_admin());
    }

    #[tokio::test]
    async fn update_unknown_user_is_none() {
        let store = seeded().await;
        let result = store.update_user("ghost@x.com", |_| {}).await.unwrap();
        assert!(result.is_none());
    }
}
