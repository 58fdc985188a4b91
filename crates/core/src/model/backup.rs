use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ProgressMap;

/// Format tag every backup file carries.
///
/// Import refuses any container whose tag differs; bump this (and the
/// storage slot key) together when the wire format changes.
pub const BACKUP_FORMAT_VERSION: &str = "memoark-progress-v1";

/// The versioned JSON envelope wrapping an exported progress map.
///
/// Field names are the wire format: `exportedAt` rather than `exported_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupContainer {
    pub version: String,
    #[serde(rename = "exportedAt")]
    pub exported_at: DateTime<Utc>,
    pub progress: ProgressMap,
}

impl BackupContainer {
    /// Wraps a snapshot in a container stamped with the current format tag.
    #[must_use]
    pub fn new(progress: ProgressMap, exported_at: DateTime<Utc>) -> Self {
        Self {
            version: BACKUP_FORMAT_VERSION.to_string(),
            exported_at,
            progress,
        }
    }

    /// True if the container carries the tag this release can import.
    #[must_use]
    pub fn has_current_version(&self) -> bool {
        self.version == BACKUP_FORMAT_VERSION
    }
}

/// File name for a backup exported on the given date.
#[must_use]
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("memoark-backup-{}.json", date.format("%Y-%m-%d"))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
