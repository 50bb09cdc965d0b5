use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cached job location, stored under `job:location:<uuid>` for seven days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLocation {
    pub job_uuid: String,
    /// Owning client company, when known.
    #[serde(default)]
    pub company_uuid: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub geo_valid: bool,
    pub cached_at: DateTime<Utc>,
}

impl JobLocation {
    /// Whether `client_uuid` may see this location. Entries cached without
    /// an owner are visible to any assigned client.
    #[must_use]
    pub fn visible_to(&self, client_uuid: &str) -> bool {
        self.company_uuid
            .as_deref()
            .is_none_or(|owner| owner.trim().eq_ignore_ascii_case(client_uuid.trim()))
    }
}
