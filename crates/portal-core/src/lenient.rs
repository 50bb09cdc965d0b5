//! Field readers for blobs written without a schema.
//!
//! Stored records come from the web portal, older scripts, and hand edits,
//! so a field may be `null`, a number, or missing. One bad field must not
//! make a whole array unreadable. Use with `#[serde(default, deserialize_with = "...")]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String field. Numbers keep their text; `null` and anything else read as
/// empty.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_string(deserializer)?.unwrap_or_default())
}

/// Optional string field. Numbers keep their text; anything other than a
/// string or number reads as `None`.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// List of strings. A non-array reads as empty; non-string items are dropped.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "super::string")]
        name: String,
        #[serde(default, deserialize_with = "super::optional_string")]
        id: Option<String>,
        #[serde(default, deserialize_with = "super::string_list")]
        tags: Vec<String>,
    }

    fn read(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn nulls_read_as_empty() {
        let record = read(json!({"name": null, "id": null, "tags": null}));
        assert_eq!(record.name, "");
        assert_eq!(record.id, None);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let record = read(json!({}));
        assert_eq!(record.name, "");
        assert_eq!(record.id, None);
    }

    #[test]
    fn numbers_keep_their_text() {
        let record = read(json!({"name": 42, "id": 7}));
        assert_eq!(record.name, "42");
        assert_eq!(record.id.as_deref(), Some("7"));
    }

    #[test]
    fn list_drops_non_strings() {
        let record = read(json!({"tags": ["a", 1, null, "b"]}));
        assert_eq!(record.tags, vec!["a", "b"]);
    }
}
