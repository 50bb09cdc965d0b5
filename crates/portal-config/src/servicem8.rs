//! ServiceM8 API configuration.

use serde::{Deserialize, Serialize};

/// Default REST API root.
fn default_base_url() -> String {
    String::from("https://api.servicem8.com/api_1.0")
}

/// Default OAuth token endpoint.
fn default_oauth_url() -> String {
    String::from("https://go.servicem8.com/oauth/access_token")
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceM8Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Private-application API key, sent as `X-API-Key`.
    #[serde(default)]
    pub api_key: String,

    /// OAuth access token, sent as a bearer token. Used when no API key is set.
    #[serde(default)]
    pub access_token: String,

    /// OAuth application client ID.
    #[serde(default)]
    pub client_id: String,

    /// OAuth application client secret.
    #[serde(default)]
    pub client_secret: String,

    #[serde(default = "default_oauth_url")]
    pub oauth_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceM8Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            access_token: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            oauth_url: default_oauth_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceM8Config {
    /// Check if some credential for API calls is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() || !self.access_token.is_empty()
    }

    /// Check if the OAuth application credentials are present.
    #[must_use]
    pub fn has_oauth_app(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}
