//! Key naming for the portal's key-value store.
//!
//! All state lives under flat string keys. Singletons use fixed names;
//! per-record entries append a UUID or email after a `:`-separated prefix.

use crate::validation::{normalize_client_uuid, normalize_email};

/// All portal users as one JSON array.
pub const USERS_DATA: &str = "users_data";

/// All quotes as one JSON array.
pub const QUOTES_DATA: &str = "quotes_data";

/// Singleton admin settings object.
pub const ADMIN_SETTINGS: &str = "admin:settings";

pub const CLIENT_PERMISSIONS_PREFIX: &str = "client:permissions:";
pub const CLIENT_AUTH_PREFIX: &str = "client:auth:";
pub const CLIENT_ROLE_PREFIX: &str = "client:role:";
pub const JOB_LOCATION_PREFIX: &str = "job:location:";

/// Expiry of a cached client role: one year.
pub const CLIENT_ROLE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Expiry of a cached job location: seven days.
pub const JOB_LOCATION_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Permissions key. The UUID is trimmed and lowercased first.
#[must_use]
pub fn client_permissions(client_uuid: &str) -> String {
    format!("{CLIENT_PERMISSIONS_PREFIX}{}", normalize_client_uuid(client_uuid))
}

/// Auth mapping key. The email is trimmed and lowercased first.
#[must_use]
pub fn client_auth(email: &str) -> String {
    format!("{CLIENT_AUTH_PREFIX}{}", normalize_email(email))
}

/// Cached role key, normalised like [`client_permissions`].
#[must_use]
pub fn client_role(client_uuid: &str) -> String {
    format!("{CLIENT_ROLE_PREFIX}{}", normalize_client_uuid(client_uuid))
}

#[must_use]
pub fn job_location(job_uuid: &str) -> String {
    format!("{JOB_LOCATION_PREFIX}{job_uuid}")
}

/// Glob pattern matching every key under `prefix`.
#[must_use]
pub fn pattern(prefix: &str) -> String {
    format!("{prefix}*")
}

/// Strip `prefix` from `key`, returning the record identifier.
///
/// Returns `None` when the key does not carry the prefix or nothing follows it.
#[must_use]
pub fn strip_prefix<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    key.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}
