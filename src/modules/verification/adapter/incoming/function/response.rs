use crate::modules::verification::application::domain::entities::VerifiedUser;
use serde::Serialize;

/// The four outcome shapes a handler branch can produce, serialized
/// uniformly: a single record, a record array, an error object or a
/// message object.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Record(VerifiedUser),
    Collection(Vec<VerifiedUser>),
    Error { error: String },
    Message { message: String },
}

impl ResponseBody {
    pub fn user_not_found() -> Self {
        Self::Error {
            error: "User not found".to_string(),
        }
    }

    pub fn missing_id_parameter() -> Self {
        Self::Error {
            error: "Missing id parameter".to_string(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::Error {
            error: "Method not allowed".to_string(),
        }
    }

    pub fn user_deleted() -> Self {
        Self::Message {
            message: "User deleted successfully".to_string(),
        }
    }
}
