//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `boardgames_core::storage`. Constraint failures become `ConstraintViolation`,
//! attributed to the table named in SQLite's message when there is one.

use boardgames_core::storage::RepositoryError;

/// Picks the entity a constraint message is about.
///
/// SQLite reports `UNIQUE constraint failed: developers.developer_name`, so
/// the table prefix identifies the entity. Foreign key failures carry no
/// table name and fall back to `default`.
pub fn entity_for_constraint(message: Option<&str>, default: &'static str) -> &'static str {
    let Some(target) = message.and_then(|m| m.split(": ").nth(1)) else {
        return default;
    };

    match target.split('.').next() {
        Some("developers_board_games") => "Association",
        Some("boardgames") => "BoardGame",
        Some("developers") => "Developer",
        _ => default,
    }
}

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - UNIQUE / PRIMARY KEY / FOREIGN KEY constraints → `RepositoryError::ConstraintViolation`
/// - Connection errors → `RepositoryError::ConnectionFailed`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, message)
            if matches!(
                sqlite_err.extended_code,
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    | rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
            ) =>
        {
            RepositoryError::ConstraintViolation {
                entity_type: entity_for_constraint(message.as_deref(), entity_type),
                detail: message.clone().unwrap_or_else(|| err.to_string()),
            }
        }

        // Connection-related errors
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::CannotOpen | rusqlite::ErrorCode::NotADatabase
            ) =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        // Row values that do not fit the domain types
        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..) => {
            RepositoryError::InvalidData(format!("{entity_type}: {err}"))
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
