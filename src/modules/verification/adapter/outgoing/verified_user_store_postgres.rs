use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde_json::Value as JsonValue;
use std::sync::Arc;

use crate::modules::verification::application::domain::entities::{
    CreateVerifiedUser, VerifiedUser,
};
use crate::modules::verification::application::ports::outgoing::{StoreError, VerifiedUserStore};

use super::sea_orm_entity::verified_users::{
    ActiveModel as VerifiedUserActiveModel, Column, Entity as VerifiedUserEntity,
    Model as VerifiedUserModel,
};

#[derive(Clone, Debug)]
pub struct VerifiedUserStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl VerifiedUserStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_verified_user(model: VerifiedUserModel) -> VerifiedUser {
        VerifiedUser {
            unique_id: model.unique_id,
            username: model.username,
            phone: model.phone,
            user_id: model.user_id,
            social_networks: model.social_networks,
            // Rendered as a plain string in every response body.
            created_at: model.created_at.to_string(),
            status: model.status,
            category: model.category,
        }
    }
}

#[async_trait]
impl VerifiedUserStore for VerifiedUserStorePostgres {
    async fn find_by_unique_id(
        &self,
        unique_id: &str,
    ) -> Result<Option<VerifiedUser>, StoreError> {
        let found = VerifiedUserEntity::find_by_id(unique_id)
            .one(&*self.db)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(found.map(Self::map_to_verified_user))
    }

    async fn list_newest_first(&self) -> Result<Vec<VerifiedUser>, StoreError> {
        let users = VerifiedUserEntity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(users.into_iter().map(Self::map_to_verified_user).collect())
    }

    async fn insert(
        &self,
        unique_id: String,
        user: CreateVerifiedUser,
    ) -> Result<VerifiedUser, StoreError> {
        let active_user = VerifiedUserActiveModel {
            unique_id: Set(unique_id),
            username: Set(user.username),
            phone: Set(user.phone),
            user_id: Set(user.user_id),
            social_networks: Set(JsonValue::Array(user.social_networks)),
            status: Set(user.status),
            category: Set(user.category),
            // Assigned by the database default.
            created_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self::map_to_verified_user(inserted))
    }

    async fn delete_by_unique_id(&self, unique_id: &str) -> Result<bool, StoreError> {
        let result = VerifiedUserEntity::delete_by_id(unique_id)
            .exec(&*self.db)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
