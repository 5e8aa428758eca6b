//! Database connection management and the SeaORM-backed repository.

mod connections;

#[cfg(feature = "database")]
mod sea_orm_base;
#[cfg(feature = "database")]
pub mod sea_orm_repo;

#[cfg(feature = "database")]
pub mod entity;

pub use connections::{DatabaseConfig, DatabaseHandle};

#[cfg(feature = "database")]
pub use sea_orm_repo::SeaOrmPostRepository;
