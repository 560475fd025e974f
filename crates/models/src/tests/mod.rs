
/// Entity CRUD and relation tests
pub mod crud_tests;


use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::db::{connect_and_migrate, DatabaseConfig};

/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}
