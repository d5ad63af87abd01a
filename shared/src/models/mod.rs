//! Data models
//!
//! Shared between the server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), all timestamps Unix millis.

pub mod booking;
pub mod customer;
pub mod summary;

// Re-exports
pub use booking::*;
pub use customer::*;
pub use summary::*;
