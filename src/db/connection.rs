// Database connection management
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};
use anyhow::Result;
use std::path::PathBuf;

use super::migrations::run_migrations;
use super::models::FileRecord;
use super::operations::DbOperations;
use crate::provider::sources::{FileInfo, FileLookup, FileQuery};

pub struct DatabaseConnection {
    conn: Arc<Mutex<Connection>>,
}

impl DatabaseConnection {
    pub fn new(db_path: PathBuf) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        Self::with_connection(conn)
    }

    /// Private in-memory store
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Lock the connection; a poisoned lock still yields a usable connection
    pub fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clone for DatabaseConnection {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

impl FileLookup for DatabaseConnection {
    fn fetch_file(&self, query: FileQuery<'_>, cutoff: i64) -> crate::error::Result<Option<FileInfo>> {
        let record = match query {
            FileQuery::Id(id) => DbOperations::fetch_file_by_id(self, id, cutoff)?,
            FileQuery::Filename(name) => DbOperations::fetch_file_by_filename(self, name, cutoff)?,
        };

        Ok(record.map(FileRecord::into_info))
    }
}
