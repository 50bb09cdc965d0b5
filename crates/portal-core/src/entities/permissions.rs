use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;
use crate::enums::{ClientTier, PermissionTemplate};
use crate::lenient;
use crate::validation::normalize_client_uuid;

/// Permission set for one ServiceM8 client, stored under
/// `client:permissions:<uuid>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPermissions {
    #[serde(default, deserialize_with = "lenient::string")]
    pub client_uuid: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_by: Option<String>,
    /// Template name as stored. Free-form in older records.
    #[serde(default, deserialize_with = "lenient::string")]
    pub template: String,
}

impl ClientPermissions {
    /// Build a record stamped with the current time. The client UUID is
    /// normalised the same way its key is.
    #[must_use]
    pub fn new(
        client_uuid: impl Into<String>,
        permissions: Vec<String>,
        template: PermissionTemplate,
        assigned_by: Option<String>,
    ) -> Self {
        let client_uuid: String = client_uuid.into();
        Self {
            client_uuid: normalize_client_uuid(&client_uuid),
            permissions,
            updated_at: Some(Utc::now()),
            assigned_by,
            template: template.as_str().to_string(),
        }
    }

    /// Build a record from a named template.
    #[must_use]
    pub fn from_template(
        client_uuid: impl Into<String>,
        template: PermissionTemplate,
        assigned_by: Option<String>,
    ) -> Self {
        Self::new(client_uuid, template.permissions(), template, assigned_by)
    }

    #[must_use]
    pub fn tier(&self) -> ClientTier {
        ClientTier::classify(&self.permissions)
    }

    #[must_use]
    pub fn has(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// A request to replace a client's permissions: a named template, an
/// explicit list, or both (the list wins and the record is `custom`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionAssignment {
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl PermissionAssignment {
    /// Resolve into a stored record.
    ///
    /// Explicit permissions are trimmed and de-duplicated in order; blanks
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for an unknown template, a `custom`
    /// template without permissions, or an empty request.
    pub fn resolve(
        self,
        client_uuid: &str,
        assigned_by: Option<String>,
    ) -> Result<ClientPermissions, CoreError> {
        let client_uuid = client_uuid.trim();
        if client_uuid.is_empty() {
            return Err(CoreError::validation("client uuid is required"));
        }

        let template = self
            .template
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(str::parse::<PermissionTemplate>)
            .transpose()?;

        let mut explicit: Vec<String> = Vec::new();
        for permission in self.permissions.unwrap_or_default() {
            let permission = permission.trim();
            if !permission.is_empty() && !explicit.iter().any(|p| p == permission) {
                explicit.push(permission.to_string());
            }
        }

        match (template, explicit.is_empty()) {
            (_, false) => Ok(ClientPermissions::new(
                client_uuid,
                explicit,
                PermissionTemplate::Custom,
                assigned_by,
            )),
            (Some(PermissionTemplate::Custom), true) => Err(CoreError::validation(
                "custom template requires a permissions list",
            )),
            (Some(template), true) => Ok(ClientPermissions::from_template(
                client_uuid,
                template,
                assigned_by,
            )),
            (None, true) => Err(CoreError::validation(
                "either template or permissions is required",
            )),
        }
    }
}
