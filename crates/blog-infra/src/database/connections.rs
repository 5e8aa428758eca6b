#[cfg(feature = "database")]
use std::time::Duration;

#[cfg(feature = "database")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `postgres://...` or `sqlite::memory:`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations when the server starts.
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 10,
            auto_migrate: true,
        }
    }
}

/// Storage handle, opened once at service start and closed at stop.
///
/// # Example
/// ```ignore
/// let handle = DatabaseHandle::connect(&config).await?;
/// let repo = SeaOrmPostRepository::new(handle.conn().clone());
/// // ... serve ...
/// handle.close().await?;
/// ```
#[cfg(feature = "database")]
pub struct DatabaseHandle {
    conn: DbConn,
}

#[cfg(not(feature = "database"))]
pub struct DatabaseHandle;

#[cfg(feature = "database")]
impl DatabaseHandle {
    /// Open the connection pool described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(
            pool = config.max_connections,
            "Database connected"
        );

        Ok(Self { conn })
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Release the pool. Clones of the connection handed out earlier are
    /// closed with it.
    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection");
        self.conn.close().await
    }
}
