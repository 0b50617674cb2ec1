use sqlx::sqlite::SqlitePoolOptions;

use crate::config::DatabaseConfig;

// Application default db driver
// if required change this
pub type AppDbDriver = sqlx::Sqlite;
pub type AppDbPool = sqlx::Pool<AppDbDriver>;

pub fn map_err(e: sqlx::Error) -> crate::Error {
    crate::Error::Database(anyhow::Error::new(e))
}

/// True iff the driver rejected the statement over a UNIQUE constraint.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(d) if d.is_unique_violation())
}

pub async fn connect(config: &DatabaseConfig) -> crate::Result<AppDbPool> {
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(config.url.as_str())
        .await
        .map_err(map_err)
}
