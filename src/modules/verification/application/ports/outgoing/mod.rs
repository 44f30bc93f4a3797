pub mod verified_user_store;

pub use verified_user_store::{StoreError, VerifiedUserStore};
