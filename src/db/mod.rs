// Database module
// This module handles the SQLite file store that uploaded audio is resolved against

pub mod connection;
pub mod migrations;
pub mod models;
pub mod operations;

pub use connection::DatabaseConnection;
pub use models::FileRecord;
pub use operations::DbOperations;
