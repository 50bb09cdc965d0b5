//! Roles, client tiers, and permission templates.
//!
//! Stored values are plain lowercase strings. Parsing is lenient (trimmed,
//! case-insensitive) because the store carries hand-written data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Portal user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Client,
    Staff,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
            Self::Staff => "staff",
        }
    }

    /// `true` when a stored role string names the admin role.
    #[must_use]
    pub fn is_admin(raw: &str) -> bool {
        raw.trim().eq_ignore_ascii_case(Self::Admin.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "client" => Ok(Self::Client),
            "staff" => Ok(Self::Staff),
            other => Err(CoreError::validation(format!("unknown role: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// ClientTier
// ---------------------------------------------------------------------------

/// Minimum permission count for the enterprise tier.
pub const ENTERPRISE_MIN_PERMISSIONS: usize = 8;

/// Minimum permission count for the standard tier.
pub const STANDARD_MIN_PERMISSIONS: usize = 4;

/// Informally inferred client tier.
///
/// There is no authoritative source for this: it is derived from the
/// client's permission set by [`ClientTier::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientTier {
    Basic,
    Standard,
    Enterprise,
}

impl ClientTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Enterprise => "enterprise",
        }
    }

    /// Classify a permission set.
    ///
    /// Enterprise: at least [`ENTERPRISE_MIN_PERMISSIONS`] permissions and at
    /// least one mentioning `invoice` or `report`. Standard: at least
    /// [`STANDARD_MIN_PERMISSIONS`]. Everything else is basic.
    #[must_use]
    pub fn classify<S: AsRef<str>>(permissions: &[S]) -> Self {
        let count = permissions.len();
        let has_billing = permissions.iter().any(|p| {
            let p = p.as_ref().to_ascii_lowercase();
            p.contains("invoice") || p.contains("report")
        });

        if count >= ENTERPRISE_MIN_PERMISSIONS && has_billing {
            Self::Enterprise
        } else if count >= STANDARD_MIN_PERMISSIONS {
            Self::Standard
        } else {
            Self::Basic
        }
    }
}

impl fmt::Display for ClientTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(CoreError::validation(format!("unknown client tier: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// PermissionTemplate
// ---------------------------------------------------------------------------

const BASIC_PERMISSIONS: &[&str] = &["view_jobs", "view_quotes"];

const STANDARD_EXTRA: &[&str] = &["view_job_details", "view_attachments", "accept_quotes"];

const ENTERPRISE_EXTRA: &[&str] = &[
    "view_invoices",
    "download_invoices",
    "view_reports",
    "manage_contacts",
];

/// Named permission bundle assigned to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionTemplate {
    Basic,
    Standard,
    Enterprise,
    /// Hand-picked list; expands to nothing.
    Custom,
}

impl PermissionTemplate {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Enterprise => "enterprise",
            Self::Custom => "custom",
        }
    }

    /// Expand the template into its permission list.
    #[must_use]
    pub fn permissions(self) -> Vec<String> {
        let parts: &[&[&str]] = match self {
            Self::Basic => &[BASIC_PERMISSIONS],
            Self::Standard => &[BASIC_PERMISSIONS, STANDARD_EXTRA],
            Self::Enterprise => &[BASIC_PERMISSIONS, STANDARD_EXTRA, ENTERPRISE_EXTRA],
            Self::Custom => &[],
        };
        parts
            .iter()
            .flat_map(|part| part.iter())
            .map(|p| (*p).to_string())
            .collect()
    }
}

impl From<ClientTier> for PermissionTemplate {
    fn from(tier: ClientTier) -> Self {
        match tier {
            ClientTier::Basic => Self::Basic,
            ClientTier::Standard => Self::Standard,
            ClientTier::Enterprise => Self::Enterprise,
        }
    }
}

impl fmt::Display for PermissionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionTemplate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "enterprise" => Ok(Self::Enterprise),
            "custom" => Ok(Self::Custom),
            other => Err(CoreError::validation(format!(
                "unknown permission template: {other}"
            ))),
        }
    }
}
