use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A persisted verified-user record as it is returned to clients.
///
/// `created_at` is assigned by the database at insertion and rendered as a
/// plain string in responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifiedUser {
    pub unique_id: String,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<String>,
    pub social_networks: JsonValue,
    pub status: String,
    pub category: String,
    pub created_at: String,
}

fn default_status() -> String {
    "active".to_string()
}

fn default_category() -> String {
    "general".to_string()
}

/// Client-supplied creation payload. Every field is optional on the wire;
/// omitted fields take the documented defaults. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateVerifiedUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub social_networks: Vec<JsonValue>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for CreateVerifiedUser {
    fn default() -> Self {
        Self {
            username: None,
            phone: None,
            user_id: None,
            social_networks: Vec::new(),
            status: default_status(),
            category: default_category(),
        }
    }
}
