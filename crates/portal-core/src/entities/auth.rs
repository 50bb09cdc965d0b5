use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;

/// Login credential mapping stored under `client:auth:<email>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAuth {
    #[serde(default, deserialize_with = "lenient::string")]
    pub client_uuid: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
