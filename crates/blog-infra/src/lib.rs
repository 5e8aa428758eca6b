//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `database` - Postgres / SQLite storage via SeaORM

pub mod database;
pub mod memory;

pub use database::{DatabaseConfig, DatabaseHandle};
pub use memory::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use database::SeaOrmPostRepository;
