//! Invocation contract of the function host.
//!
//! One inbound event per invocation (`httpMethod`, `queryStringParameters`,
//! `body`) and one outbound response envelope (`statusCode`, `headers`,
//! `body`, `isBase64Encoded`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_method() -> String {
    "GET".to_string()
}

/// The HTTP-like event object the host hands to the function.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default = "default_method")]
    pub http_method: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl FunctionEvent {
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(name)
            .map(String::as_str)
    }
}

/// The response envelope handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl FunctionResponse {
    /// JSON response with the CORS allow-all header every path carries.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Result<Self, serde_json::Error> {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        Ok(Self {
            status_code,
            headers,
            body: serde_json::to_string(body)?,
            is_base64_encoded: false,
        })
    }

    /// CORS preflight answer. Advertises the permitted methods and headers
    /// and a 24-hour preflight cache. Never touches the database.
    pub fn preflight() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            "GET, POST, PUT, DELETE, OPTIONS".to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type, X-User-Id, X-Auth-Token".to_string(),
        );
        headers.insert("Access-Control-Max-Age".to_string(), "86400".to_string());

        Self {
            status_code: 200,
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }
}
