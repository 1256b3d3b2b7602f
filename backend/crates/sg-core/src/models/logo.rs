//! Logo metadata for the signature preview.
//!
//! Logos only live inside a [`crate::PreviewSession`]; nothing here is
//! persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub filename: String,
    /// Name of the file the user dropped in
    pub original_name: String,
    pub is_active: bool,
    pub is_archived: bool,
    pub uploaded_at: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
    /// Size in bytes of the scaled PNG
    pub file_size: u64,
}

impl Logo {
    /// Mark this logo as archived under `archived_name`
    pub fn archive(self, archived_name: String) -> Self {
        Self {
            filename: archived_name,
            is_active: false,
            is_archived: true,
            ..self
        }
    }
}
