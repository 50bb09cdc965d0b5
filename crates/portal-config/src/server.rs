//! HTTP server configuration.

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    3000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Expose `GET /debug-users`. Off by default; it lists every user.
    #[serde(default)]
    pub debug_routes: bool,

    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            debug_routes: false,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// `bind:port` listen address.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "0.0.0.0:3000");
        assert!(!config.debug_routes);
        assert!(config.cors_origins.is_empty());
    }
}
