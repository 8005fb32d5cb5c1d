// Data models
use serde::{Deserialize, Serialize};

use crate::provider::sources::FileInfo;

/// An uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    pub filename: String,
    pub created: i64, // Unix seconds
}

impl FileRecord {
    pub fn new(filename: impl Into<String>, created: i64) -> Self {
        Self {
            id: 0,
            filename: filename.into(),
            created,
        }
    }

    pub fn into_info(self) -> FileInfo {
        FileInfo {
            id: self.id,
            filename: self.filename,
        }
    }
}
