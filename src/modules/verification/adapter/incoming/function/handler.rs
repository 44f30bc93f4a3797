use sea_orm::Database;
use std::sync::Arc;
use thiserror::Error;

use crate::modules::verification::adapter::outgoing::verified_user_store_postgres::VerifiedUserStorePostgres;
use crate::modules::verification::application::domain::entities::CreateVerifiedUser;
use crate::modules::verification::application::ports::outgoing::{StoreError, VerifiedUserStore};
use crate::modules::verification::application::services::unique_id::generate_unique_id;
use crate::shared::api::envelope::{FunctionEvent, FunctionResponse};

use super::response::ResponseBody;

/// Faults that leave the function untranslated. The host decides how they
/// surface; the function itself never builds a 500.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("invalid request body: {0}")]
    InvalidBody(serde_json::Error),
    #[error("response serialization failed: {0}")]
    Serialize(serde_json::Error),
    #[error("database connection failed: {0}")]
    Connect(sea_orm::DbErr),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One invocation. `OPTIONS` is answered before any connection work; every
/// other method opens exactly one database connection scoped to this call
/// and dropped on all exit paths, fault paths included.
pub async fn invoke(
    event: &FunctionEvent,
    database_url: &str,
) -> Result<FunctionResponse, FunctionError> {
    if event.http_method == "OPTIONS" {
        return Ok(FunctionResponse::preflight());
    }

    let db = Database::connect(database_url)
        .await
        .map_err(FunctionError::Connect)?;
    let store = VerifiedUserStorePostgres::new(Arc::new(db));

    handle_event(event, &store).await
}

/// Dispatches one event against the store.
pub async fn handle_event<S>(
    event: &FunctionEvent,
    store: &S,
) -> Result<FunctionResponse, FunctionError>
where
    S: VerifiedUserStore + Sync,
{
    match event.http_method.as_str() {
        "GET" => match requested_id(event) {
            Some(unique_id) => match store.find_by_unique_id(unique_id).await? {
                Some(user) => respond(200, &ResponseBody::Record(user)),
                None => respond(404, &ResponseBody::user_not_found()),
            },
            None => {
                let users = store.list_newest_first().await?;
                respond(200, &ResponseBody::Collection(users))
            }
        },

        "POST" => {
            let payload = parse_payload(event)?;
            let unique_id = generate_unique_id();
            let created = store.insert(unique_id, payload).await?;
            respond(201, &ResponseBody::Record(created))
        }

        "DELETE" => match requested_id(event) {
            None => respond(400, &ResponseBody::missing_id_parameter()),
            Some(unique_id) => {
                if store.delete_by_unique_id(unique_id).await? {
                    respond(200, &ResponseBody::user_deleted())
                } else {
                    respond(404, &ResponseBody::user_not_found())
                }
            }
        },

        _ => respond(405, &ResponseBody::method_not_allowed()),
    }
}

/// An empty `id` counts as absent.
fn requested_id(event: &FunctionEvent) -> Option<&str> {
    event.query_param("id").filter(|id| !id.is_empty())
}

/// A missing body is an empty object; a present but malformed body is a
/// fault, not a structured 400.
fn parse_payload(event: &FunctionEvent) -> Result<CreateVerifiedUser, FunctionError> {
    match event.body.as_deref() {
        Some(raw) => serde_json::from_str(raw).map_err(FunctionError::InvalidBody),
        None => Ok(CreateVerifiedUser::default()),
    }
}

fn respond(status_code: u16, body: &ResponseBody) -> Result<FunctionResponse, FunctionError> {
    FunctionResponse::json(status_code, body).map_err(FunctionError::Serialize)
}
