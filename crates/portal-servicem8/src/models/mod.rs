//! ServiceM8 record types.
//!
//! ServiceM8 is loose about JSON types (amounts arrive as strings, flags as
//! `0`/`1`, coordinates as either). Typed fields here accept any scalar and
//! everything else lands in `extra`, so records survive a round trip.

mod catalog;
mod company;
mod job;
mod records;

pub use catalog::{Badge, Category, Location, Material, Staff, TaxRate};
pub use company::{Company, CompanyContact};
pub use job::{Job, JobActivity, JobContact, JobMaterial, JobPayment, JobQueue};
pub use records::{Attachment, Form, FormResponse, Note};

/// Declare a record with `uuid`, `active`, the named string fields, and a
/// flattened `extra` map.
macro_rules! record {
    ($(#[$meta:meta])* $name:ident { $($field:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub uuid: Option<String>,
            #[serde(
                default,
                deserialize_with = "crate::models::lenient::int",
                skip_serializing_if = "Option::is_none"
            )]
            pub active: Option<i64>,
            $(
                #[serde(
                    default,
                    deserialize_with = "crate::models::lenient::string",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $field: Option<String>,
            )*
            #[serde(flatten)]
            pub extra: ::serde_json::Map<String, ::serde_json::Value>,
        }

        impl $name {
            /// Soft-deleted records carry `active: 0`.
            #[must_use]
            pub fn is_active(&self) -> bool {
                self.active != Some(0)
            }
        }
    };
}

pub(crate) use record;

pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        })
    }

    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            Some(Value::Bool(b)) => Some(i64::from(b)),
            _ => None,
        })
    }

    pub fn float<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }
}
