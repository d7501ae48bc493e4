//! SQLite pool bootstrap.
//!
//! Opens the database named by a `sqlite:` URL, applies connection
//! pragmas and brings the schema up to date with the embedded migrations.

use crate::{DbError, Result};

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a pool for `url` and run pending migrations.
///
/// In-memory databases live only as long as their connection, so they are
/// pinned to a single connection that is never recycled.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool> {
    if !url.starts_with("sqlite:") {
        return Err(DbError::Initialization {
            message: format!("Unsupported database URL '{}', expected sqlite:", url),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| DbError::Initialization {
            message: format!("Invalid database URL '{}': {}", url, e),
            location: ErrorLocation::from(Location::caller()),
        })?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool_options = if is_in_memory(url) {
        debug!("In-memory database requested, using a single pinned connection");
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| DbError::Initialization {
            message: format!("Failed to open database: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    run_migrations(&pool).await?;
    info!("Database ready");

    Ok(pool)
}

/// Apply the embedded migrations to `pool`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
