//! Service layer over the raw database handle.
//!
//! `FormService` wraps `FormsDb`. All repo methods are implemented as
//! `impl FormService` blocks in [`crate::repos`].

use forms_config::DatabaseConfig;

use crate::FormsDb;
use crate::error::DatabaseError;

pub struct FormService {
    db: FormsDb,
}

impl FormService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = FormsDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Open the database described by the `[database]` config section.
    ///
    /// Creates the parent directory of an on-disk database if needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created or the
    /// database cannot be opened.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if !config.is_in_memory() {
            if let Some(parent) = std::path::Path::new(&config.path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        DatabaseError::InvalidState(format!(
                            "cannot create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }
        let svc = Self::new_local(&config.path).await?;
        svc.db.set_busy_timeout(config.busy_timeout_ms).await?;
        tracing::debug!(path = %config.path, "database opened");
        Ok(svc)
    }

    /// Create from an existing `FormsDb` (for testing).
    #[must_use]
    pub const fn from_db(db: FormsDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &FormsDb {
        &self.db
    }
}
