use sea_orm::entity::prelude::*;

/// Table `verified_users`. The schema pre-exists in the database; this
/// component never creates or migrates it. `created_at` carries a
/// server-side `now()` default.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "verified_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub unique_id: String,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<String>,
    pub social_networks: Json,
    pub status: String,
    pub category: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
