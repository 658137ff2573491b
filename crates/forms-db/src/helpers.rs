//! Row-to-entity parsing helpers.
//!
//! Structured columns (field lists, label lists, value lists) are stored as
//! JSON text. Timestamps are RFC 3339, with a fallback for `SQLite`'s
//! `datetime('now')` format.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Decode a JSON TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` naming the column if the text is not valid
/// JSON for `T`.
pub fn get_json<T: DeserializeOwned>(row: &libsql::Row, idx: i32) -> Result<T, DatabaseError> {
    let text = row.get::<String>(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column {idx}: {e}")))
}

/// Encode a value for a JSON TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Json` if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, DatabaseError> {
    Ok(serde_json::to_string(value)?)
}
