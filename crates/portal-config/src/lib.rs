//! # portal-config
//!
//! Layered configuration loading for the portal backend using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PORTAL_*` prefix, `__` as separator)
//! 2. Legacy deployment variables (`KV_REST_API_URL`, `SERVICEM8_CLIENT_ID`, `PORT`, ...)
//! 3. Project-level `portal.toml`
//! 4. User-level `~/.config/portal/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PORTAL_KV__REST_URL` -> `kv.rest_url`,
//! `PORTAL_SERVICEM8__API_KEY` -> `servicem8.api_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use portal_config::PortalConfig;
//!
//! let config = PortalConfig::load_with_dotenv().expect("config");
//! if config.servicem8.is_configured() {
//!     println!("ServiceM8 API: {}", config.servicem8.base_url);
//! }
//! ```

mod error;
mod kv;
mod legacy;
mod server;
mod servicem8;

pub use error::ConfigError;
pub use kv::{KvBackendKind, KvConfig};
pub use server::ServerConfig;
pub use servicem8::ServiceM8Config;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "portal.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub kv: KvConfig,
    #[serde(default)]
    pub servicem8: ServiceM8Config,
    #[serde(default)]
    pub server: ServerConfig,
}

impl PortalConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// Variables already present in the process environment are not
    /// overwritten by `.env`.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Legacy deployment variable names
        figment = figment.merge(
            Env::raw().filter_map(|key| legacy::config_path(key.as_str()).map(Into::into)),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("PORTAL_").split("__"))
    }

    /// Require a usable key-value backend.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when neither REST nor Redis
    /// settings are present (and the memory backend is not selected).
    pub fn require_kv(&self) -> Result<KvBackendKind, ConfigError> {
        self.kv
            .resolved_backend()
            .ok_or_else(|| ConfigError::NotConfigured {
                section: "kv".to_string(),
            })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("portal").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PortalConfig::default();
        assert!(!config.kv.is_configured());
        assert!(!config.servicem8.is_configured());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn require_kv_reports_section() {
        let err = PortalConfig::default().require_kv().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref section } if section == "kv"));
    }
}
