//! # portal-core
//!
//! Shared types for the ServiceM8 client portal backend.
//!
//! Everything the portal persists lives in a flat key-value store as JSON
//! blobs under string keys. This crate owns:
//! - Entity structs for those blobs (users, permission sets, auth mappings,
//!   admin settings, quotes, cached job locations)
//! - Key naming and expiry constants ([`keys`])
//! - Permission templates and the client tier heuristic ([`enums`])
//! - Input validation and token generation helpers
//! - Null-tolerant field readers for schema-less blobs ([`lenient`])
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod keys;
pub mod lenient;
pub mod validation;

pub use errors::CoreError;
