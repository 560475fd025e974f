use std::time::Duration;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::info;

/// Connection pool settings resolved from `configs::DatabaseConfig`.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self { Self::from_settings(&configs::DatabaseConfig::default()) }
}

impl DatabaseConfig {
    pub fn from_settings(s: &configs::DatabaseConfig) -> Self {
        Self {
            url: s.url.clone(),
            max_connections: s.max_connections,
            min_connections: s.min_connections,
            connect_timeout: Duration::from_secs(s.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(s.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(s.idle_timeout_secs),
            sqlx_logging: s.sqlx_logging,
        }
    }

    /// A private in-memory SQLite database, used by tests.
    pub fn in_memory() -> Self {
        Self { url: "sqlite::memory:".to_string(), ..Self::default() }
    }

    pub fn is_in_memory(&self) -> bool { self.url.contains(":memory:") }

    fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .sqlx_logging(self.sqlx_logging);
        if self.is_in_memory() {
            // Every pooled connection would otherwise open its own empty database.
            opt.max_connections(1).min_connections(1);
        } else {
            opt.max_connections(self.max_connections)
                .min_connections(self.min_connections)
                .idle_timeout(self.idle_timeout);
        }
        opt
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(cfg.connect_options()).await?;
    Ok(db)
}

/// Connect and bring the schema up to date, creating tables on first start.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!(in_memory = cfg.is_in_memory(), "database schema is up to date");
    Ok(db)
}

/// Round-trip a trivial query to confirm the connection is usable.
pub async fn test_connection(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    db.execute(Statement::from_string(backend, "SELECT 1".to_string())).await?;
    Ok(())
}
