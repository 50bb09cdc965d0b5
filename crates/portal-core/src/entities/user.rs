use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::Role;
use crate::lenient;
use crate::validation::{is_assigned_client, mask_secret, normalize_email};

/// One entry of the `users_data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalUser {
    /// Numeric or string identifier, kept as a string.
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub token: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub session_token: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_client_uuid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PortalUser {
    /// Exact match of a presented bearer token against `token` or
    /// `sessionToken`. Empty tokens never match.
    #[must_use]
    pub fn matches_token(&self, presented: &str) -> bool {
        if presented.is_empty() {
            return false;
        }
        self.token.as_deref() == Some(presented) || self.session_token.as_deref() == Some(presented)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        Role::is_admin(&self.role)
    }

    /// The assigned client UUID, unless blank or the `"none"` placeholder.
    #[must_use]
    pub fn assigned_client(&self) -> Option<&str> {
        let value = self.assigned_client_uuid.as_deref();
        if is_assigned_client(value) {
            value.map(str::trim)
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        normalize_email(&self.email) == normalize_email(email)
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
            || self.session_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Copy of this user safe for display: tokens masked.
    #[must_use]
    pub fn masked(&self) -> Self {
        Self {
            token: self.token.as_deref().map(mask_secret),
            session_token: self.session_token.as_deref().map(mask_secret),
            ..self.clone()
        }
    }
}
