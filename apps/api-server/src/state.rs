//! Application state - shared across all handlers.

use std::sync::Arc;

use thiserror::Error;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;
use blog_infra::database::{DatabaseConfig, DatabaseHandle};

#[cfg(feature = "database")]
use blog_infra::SeaOrmPostRepository;
#[cfg(feature = "database")]
use migration::{Migrator, MigratorTrait};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

/// Failures while bringing the storage up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Database connection failed: {0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    Migration(String),
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// State backed by the in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }

    /// Build the application state from configuration.
    ///
    /// Returns the storage handle alongside the state so the caller can
    /// close it once the server stops. A configured database that cannot be
    /// reached is an error, not a silent fallback.
    #[cfg(feature = "database")]
    pub async fn from_config(
        db_config: Option<&DatabaseConfig>,
    ) -> Result<(Self, Option<DatabaseHandle>), StartupError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok((Self::in_memory(), None));
        };

        let handle = DatabaseHandle::connect(config)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;

        if config.auto_migrate {
            Migrator::up(handle.conn(), None)
                .await
                .map_err(|e| StartupError::Migration(e.to_string()))?;
            tracing::info!("Database migrations applied");
        }

        let repo = Arc::new(SeaOrmPostRepository::new(handle.conn().clone()));
        tracing::info!("Application state initialized");

        Ok((Self::new(repo), Some(handle)))
    }

    #[cfg(not(feature = "database"))]
    pub async fn from_config(
        db_config: Option<&DatabaseConfig>,
    ) -> Result<(Self, Option<DatabaseHandle>), StartupError> {
        if db_config.is_some() {
            tracing::warn!("Built without the database feature - ignoring DATABASE_URL");
        }
        tracing::info!("Running with the in-memory repository");
        Ok((Self::in_memory(), None))
    }
}

/// Release the storage handle after the server has stopped.
pub async fn shutdown(handle: Option<DatabaseHandle>) {
    #[cfg(feature = "database")]
    {
        if let Some(handle) = handle {
            if let Err(e) = handle.close().await {
                tracing::error!("Failed to close database connection: {}", e);
            }
        }
    }

    #[cfg(not(feature = "database"))]
    {
        let _ = handle;
    }
}
