use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::lenient;
use crate::validation::{is_valid_email, normalize_email};

/// Singleton admin configuration stored under `admin:settings`.
///
/// Fields absent from a stored object fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminSettings {
    #[serde(deserialize_with = "lenient::string")]
    pub company_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contact_email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub support_phone: String,
    pub notifications_enabled: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            contact_email: String::new(),
            support_phone: String::new(),
            notifications_enabled: true,
            updated_at: None,
            updated_by: None,
        }
    }
}

/// Body of `PUT /api/admin/settings`. Every field is required; they are
/// optional here so a missing field becomes a validation error, not a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettingsInput {
    pub company_name: Option<String>,
    pub contact_email: Option<String>,
    pub support_phone: Option<String>,
    pub notifications_enabled: Option<bool>,
}

impl AdminSettingsInput {
    /// Check required fields and produce normalised settings.
    ///
    /// Strings are trimmed and the email lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first missing or blank
    /// field, or when the email is malformed.
    pub fn validate(self, updated_by: Option<String>) -> Result<AdminSettings, CoreError> {
        let company_name = required("companyName", self.company_name)?;
        let contact_email = required("contactEmail", self.contact_email)?;
        let support_phone = required("supportPhone", self.support_phone)?;
        let notifications_enabled = self
            .notifications_enabled
            .ok_or_else(|| CoreError::validation("notificationsEnabled is required"))?;

        if !is_valid_email(&contact_email) {
            return Err(CoreError::validation("contactEmail is not a valid email address"));
        }

        Ok(AdminSettings {
            company_name,
            contact_email: normalize_email(&contact_email),
            support_phone,
            notifications_enabled,
            updated_at: Some(Utc::now()),
            updated_by,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, CoreError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::validation(format!("{field} is required")))
}
