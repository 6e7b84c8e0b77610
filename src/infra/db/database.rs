//! SQLite database setup and connection management for the user registry.
//! Handles database initialization, schema creation, and connection management.

use anyhow::{Result, bail};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;

use super::repository::{DbConn, UserRepository};

const SCHEMA_VERSION: i32 = 1;

/// Database wrapper that owns the shared SQLite connection
pub struct Database {
    conn: DbConn,
}

impl Database {
    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.initialize()?;
        Ok(db)
    }

    /// Create or open the database at a specific path
    pub fn open_at(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.initialize()?;
        log::debug!("user store ready at {}", path.display());
        Ok(db)
    }

    /// Get the default database path
    pub fn default_path() -> PathBuf {
        crate::infra::app_config::app_data_dir().join("users.db")
    }

    /// Ensure the `users` table exists. Idempotent; runs on every open.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock();

        let existing_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        if existing_version > SCHEMA_VERSION {
            bail!(
                "database schema version {} is newer than the supported version {}",
                existing_version,
                SCHEMA_VERSION
            );
        }

        Self::create_schema(&conn)?;

        if existing_version < SCHEMA_VERSION {
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }

        Ok(())
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> DbConn {
        self.conn.clone()
    }

    pub fn user_repo(&self) -> UserRepository {
        UserRepository::new(self.connection())
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        // AUTOINCREMENT keeps deleted ids from ever being handed out again.
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                age INTEGER NOT NULL,
                email TEXT NOT NULL,
                addresses TEXT NOT NULL,
                national_id TEXT NOT NULL UNIQUE
            );
            "#,
        )?;
        Ok(())
    }
}
