pub mod verified_users;
