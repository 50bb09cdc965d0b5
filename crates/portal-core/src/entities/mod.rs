//! Entity structs for every blob the portal keeps in the key-value store.
//!
//! Field names serialize in `camelCase` to match what the web portal writes.
//! Records written by hand or by older tooling may carry extra fields; those
//! that matter are preserved through a flattened `extra` map.

mod auth;
mod location;
mod permissions;
mod quote;
mod settings;
mod user;

pub use auth::ClientAuth;
pub use location::JobLocation;
pub use permissions::{ClientPermissions, PermissionAssignment};
pub use quote::Quote;
pub use settings::{AdminSettings, AdminSettingsInput};
pub use user::PortalUser;
