//! Data models
//!
//! DB row types derive `sqlx::FromRow`; all IDs are `i64`
//! (SQLite INTEGER PRIMARY KEY).

pub mod customer;

pub use customer::*;
