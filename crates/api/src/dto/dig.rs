use serde::{Deserialize, Serialize};

/// Lookup parameters, from the query string (GET) or the JSON body (POST)
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DigParams {
    #[serde(default)]
    pub domain: Option<String>,

    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
