use rusqlite::{params, OptionalExtension, Row};
use crate::db::models::FileRecord;
use crate::db::connection::DatabaseConnection;

const FILE_COLUMNS: &str = "id, filename, created";

fn file_from_row(row: &Row<'_>) -> rusqlite::Result<FileRecord> {
    Ok(FileRecord {
        id: row.get(0)?,
        filename: row.get(1)?,
        created: row.get(2)?,
    })
}

/// Database operations for the file store
pub struct DbOperations;

impl DbOperations {
    /// Insert a file, returning its id
    pub fn insert_file(
        db: &DatabaseConnection,
        file: &FileRecord,
    ) -> Result<i64, anyhow::Error> {
        let conn = db.lock();

        conn.execute(
            "INSERT INTO files (filename, created) VALUES (?1, ?2)",
            params![file.filename, file.created],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a file by id, if it was created at or before `cutoff`
    pub fn fetch_file_by_id(
        db: &DatabaseConnection,
        id: i64,
        cutoff: i64,
    ) -> Result<Option<FileRecord>, anyhow::Error> {
        let conn = db.lock();

        let file = conn
            .query_row(
                &format!("SELECT {} FROM files WHERE id = ?1 AND created <= ?2", FILE_COLUMNS),
                params![id, cutoff],
                file_from_row,
            )
            .optional()?;

        Ok(file)
    }

    /// Get a file by exact filename, if it was created at or before `cutoff`
    pub fn fetch_file_by_filename(
        db: &DatabaseConnection,
        filename: &str,
        cutoff: i64,
    ) -> Result<Option<FileRecord>, anyhow::Error> {
        let conn = db.lock();

        let file = conn
            .query_row(
                &format!("SELECT {} FROM files WHERE filename = ?1 AND created <= ?2", FILE_COLUMNS),
                params![filename, cutoff],
                file_from_row,
            )
            .optional()?;

        Ok(file)
    }
}
