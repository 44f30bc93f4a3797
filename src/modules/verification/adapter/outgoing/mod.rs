pub mod sea_orm_entity;
pub mod verified_user_store_postgres;
