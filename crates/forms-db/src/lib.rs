//! # forms-db
//!
//! libSQL storage for Forms.
//!
//! Holds the form definitions (field list as a JSON column), the frozen
//! version headers respondents answered against, and the responses
//! themselves. Recording a submission and grouping responses per version are
//! implemented as [`service::FormService`] methods on top of the raw table
//! operations in [`repos`].
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) in local mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and connection.
pub struct FormsDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl FormsDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let forms_db = Self { db, conn };
        forms_db.run_migrations().await?;
        Ok(forms_db)
    }

    /// Set how long writers wait on a locked database file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the pragma fails.
    pub async fn set_busy_timeout(&self, millis: u64) -> Result<(), DatabaseError> {
        // The pragma echoes the new value back as a row.
        let mut rows = self
            .conn
            .query(&format!("PRAGMA busy_timeout = {millis}"), ())
            .await?;
        while rows.next().await?.is_some() {}
        Ok(())
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
