//! Database connection setup

use crate::config::DatabaseConfig;
use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

/// In-memory SQLite lives in a single connection; a larger pool would see
/// separate, empty databases.
fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let in_memory = is_in_memory(&config.url);
    let max_connections = if in_memory { 1 } else { config.max_connections };

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(max_connections)
        .sqlx_logging(false);
    if in_memory {
        options.min_connections(1);
    }

    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to database {}", config.url))?;

    tracing::info!(backend = ?db.get_database_backend(), max_connections, "Database connected");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(!is_in_memory("sqlite://bank.db?mode=rwc"));
        assert!(!is_in_memory("postgres://localhost/bank"));
    }
}
