use crate::modules::verification::application::domain::entities::{
    CreateVerifiedUser, VerifiedUser,
};
use async_trait::async_trait;
use thiserror::Error;

/// Outgoing port for verified-user persistence.
///
/// Records are immutable: there is no update operation, only insert,
/// lookup, list and delete.
#[async_trait]
pub trait VerifiedUserStore {
    async fn find_by_unique_id(&self, unique_id: &str)
        -> Result<Option<VerifiedUser>, StoreError>;

    /// All records, most recently created first.
    async fn list_newest_first(&self) -> Result<Vec<VerifiedUser>, StoreError>;

    /// Inserts a new record under the server-generated `unique_id`; the
    /// database assigns `created_at`. Returns the full stored row.
    async fn insert(
        &self,
        unique_id: String,
        user: CreateVerifiedUser,
    ) -> Result<VerifiedUser, StoreError>;

    /// Deletes by `unique_id`, reporting whether a row matched.
    async fn delete_by_unique_id(&self, unique_id: &str) -> Result<bool, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}
