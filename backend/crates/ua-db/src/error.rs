use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A UNIQUE constraint rejected the write. `field` is the offending
    /// column when SQLite reports it.
    #[error("Unique constraint violated on {}: {message} {location}", .field.as_deref().unwrap_or("unknown column"))]
    UniqueViolation {
        field: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_error) = source
            && db_error.is_unique_violation()
        {
            let message = db_error.message().to_string();
            return Self::UniqueViolation {
                field: unique_violation_column(&message),
                message,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Extract the column from SQLite's `UNIQUE constraint failed: users.email`.
fn unique_violation_column(message: &str) -> Option<String> {
    let (_, columns) = message.split_once("constraint failed:")?;
    let first = columns.split(',').next()?.trim();
    let column = first.rsplit('.').next()?.trim();

    if column.is_empty() {
        None
    } else {
        Some(column.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
