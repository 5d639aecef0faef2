//! Database module providing connection management, migrations, and queries.

pub mod categories;
pub mod migrations;
pub mod videos;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::Config;
use crate::error::AppResult;

/// Database connection pool wrapper.
///
/// `DatabaseConnection` is internally pooled and cheap to clone.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Create a new database pool from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = &config.database;

        let mut options = ConnectOptions::new(db.url.clone());
        options
            .max_connections(db.max_connections)
            .min_connections(db.min_connections)
            .connect_timeout(db.connect_timeout())
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;
        info!(
            "Connected to {} database (max {} connections)",
            if db.is_sqlite() { "SQLite" } else { "PostgreSQL" },
            db.max_connections
        );

        Ok(DbPool { conn })
    }

    /// Wrap an already established connection.
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        DbPool { conn }
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Apply all pending migrations.
    pub async fn run_migrations(&self) -> AppResult<()> {
        migrations::run_migrations(&self.conn).await
    }

    /// Names of migrations that have not been applied yet.
    pub async fn pending_migrations(&self) -> AppResult<Vec<String>> {
        migrations::pending_migrations(&self.conn).await
    }

    /// Roll back every migration and apply them again, leaving empty tables.
    pub async fn reset_schema(&self) -> AppResult<()> {
        migrations::reset_schema(&self.conn).await
    }

    /// Close the underlying pool.
    pub async fn close(self) -> AppResult<()> {
        self.conn.close().await?;
        Ok(())
    }
}
