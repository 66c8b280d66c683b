//! # berlinclock-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `PreferenceStore` port defined in `berlinclock-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//!
//! ## Dependency rule
//! Depends on `berlinclock-app` (for port traits) and `berlinclock-domain` (for error types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod preference_store;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use preference_store::SqlitePreferenceStore;
