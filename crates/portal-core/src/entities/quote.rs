use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;

/// One entry of the `quotes_data` array.
///
/// Only the fields the backend filters on are typed; everything else passes
/// through untouched. Owner fields are read independently, since records
/// from different writers carry `clientUuid`, `companyUuid`,
/// `company_uuid`, or several at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub uuid: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_uuid: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_uuid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quote {
    /// Whether any owner field names `client_uuid` (case-insensitive).
    #[must_use]
    pub fn belongs_to(&self, client_uuid: &str) -> bool {
        let wanted = client_uuid.trim();
        if wanted.is_empty() {
            return false;
        }
        let snake = self.extra.get("company_uuid").and_then(Value::as_str);
        [self.client_uuid.as_deref(), self.company_uuid.as_deref(), snake]
            .into_iter()
            .flatten()
            .any(|owner| owner.trim().eq_ignore_ascii_case(wanted))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn quote(value: Value) -> Quote {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_company_uuid_field() {
        let quote = quote(json!({
            "uuid": "q-1",
            "companyUuid": "c-1",
            "total": 1200.5
        }));
        assert!(quote.belongs_to("c-1"));
        assert!(!quote.belongs_to("c-2"));
        assert_eq!(quote.extra["total"], json!(1200.5));
    }

    #[test]
    fn accepts_every_owner_field_at_once() {
        let quote = quote(json!({
            "uuid": "q-1",
            "clientUuid": "c-1",
            "companyUuid": "c-1",
            "company_uuid": "c-1"
        }));
        assert!(quote.belongs_to("c-1"));

        let out = serde_json::to_value(&quote).unwrap();
        assert_eq!(out["clientUuid"], "c-1");
        assert_eq!(out["companyUuid"], "c-1");
        assert_eq!(out["company_uuid"], "c-1");
    }

    #[test]
    fn snake_case_owner_and_case_are_tolerated() {
        assert!(quote(json!({"company_uuid": "C-9"})).belongs_to("c-9"));
        assert!(!quote(json!({"uuid": "q-2"})).belongs_to(""));
    }
}
