//! Environment variable names used by the deployment before `PORTAL_*`.
//!
//! Hosting dashboards inject these names directly, so they are mapped onto
//! config paths. `PORTAL_*` variables still win over them.

/// Legacy variable name → dotted config path.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("KV_REST_API_URL", "kv.rest_url"),
    ("KV_REST_API_TOKEN", "kv.rest_token"),
    ("UPSTASH_REDIS_REST_URL", "kv.rest_url"),
    ("UPSTASH_REDIS_REST_TOKEN", "kv.rest_token"),
    ("REDIS_URL", "kv.redis_url"),
    ("SERVICEM8_API_KEY", "servicem8.api_key"),
    ("SERVICEM8_ACCESS_TOKEN", "servicem8.access_token"),
    ("SERVICEM8_CLIENT_ID", "servicem8.client_id"),
    ("SERVICEM8_CLIENT_SECRET", "servicem8.client_secret"),
    ("PORT", "server.port"),
];

/// Map a legacy variable name to its config path, case-insensitively.
#[must_use]
pub fn config_path(name: &str) -> Option<&'static str> {
    LEGACY_ENV
        .iter()
        .find(|(legacy, _)| legacy.eq_ignore_ascii_case(name))
        .map(|(_, path)| *path)
}
