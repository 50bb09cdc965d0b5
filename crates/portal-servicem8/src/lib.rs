//! # portal-servicem8
//!
//! Client for the ServiceM8 REST API (`https://api.servicem8.com/api_1.0`).
//!
//! Every endpoint is a thin method over one dispatch core that renders the
//! path, attaches credentials and an optional `$filter`, and maps statuses
//! to [`ServiceM8Error`]. There is no retry, pagination, or caching.
//!
//! Resources: jobs, companies (clients) and their contacts, job contacts,
//! activities, materials and payments, attachments, staff, materials,
//! categories, locations, notes, forms and form responses, job queues,
//! badges, and tax rates. [`oauth`] covers the token exchange.

mod client;
mod error;
mod filter;
mod http;
pub mod models;
pub mod oauth;
mod resources;

pub use client::{Credentials, DEFAULT_BASE_URL, Operation, RECORD_UUID_HEADER, ServiceM8Client};
pub use error::ServiceM8Error;
pub use filter::Filter;
pub use reqwest::Method;
