use std::fs;
use std::path::{Path, PathBuf};

use memoark_core::Clock;
use memoark_core::model::{BACKUP_FORMAT_VERSION, BackupContainer, ProgressMap, backup_file_name};

use crate::error::BackupError;

/// Builds and reads versioned backup files around the progress store.
///
/// The store itself knows nothing about files or the container format: this
/// service wraps `export_snapshot()` output on the way out, and validates a
/// candidate file before the caller may hand its payload to
/// `import_snapshot`. Validation is a tag and shape check only, never a deep
/// schema pass over each entry.
pub struct BackupService {
    clock: Clock,
}

impl BackupService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Wrap a snapshot in the versioned container, stamped with the current
    /// export time.
    #[must_use]
    pub fn export_container(&self, snapshot: ProgressMap) -> BackupContainer {
        BackupContainer::new(snapshot, self.clock.now())
    }

    /// Write a snapshot to `dir` as a date-named pretty-printed JSON file.
    ///
    /// # Errors
    ///
    /// Returns `BackupError::WriteFailed` if the directory cannot be created
    /// or the file cannot be written.
    pub fn export_to_dir(&self, snapshot: ProgressMap, dir: &Path) -> Result<PathBuf, BackupError> {
        let container = self.export_container(snapshot);
        let body = serde_json::to_string_pretty(&container)
            .map_err(|err| BackupError::WriteFailed(err.to_string()))?;

        fs::create_dir_all(dir).map_err(|err| BackupError::WriteFailed(err.to_string()))?;
        let path = dir.join(backup_file_name(container.exported_at.date_naive()));
        fs::write(&path, body).map_err(|err| BackupError::WriteFailed(err.to_string()))?;
        Ok(path)
    }

    /// Read and validate a user-selected backup file.
    ///
    /// # Errors
    ///
    /// Returns `BackupError::Unreadable` if the file cannot be read, plus
    /// any rejection from [`decode_backup`].
    pub fn import_file(&self, path: &Path) -> Result<ProgressMap, BackupError> {
        let text =
            fs::read_to_string(path).map_err(|err| BackupError::Unreadable(err.to_string()))?;
        decode_backup(&text)
    }
}

/// Validate backup text and extract its progress payload.
///
/// Accepts only a JSON object whose `version` equals the expected constant
/// and whose `progress` field is an object. Everything else is a rejection
/// with no side effect; the current in-memory map is the caller's to keep.
///
/// # Errors
///
/// Returns `BackupError::Malformed` for invalid JSON,
/// `BackupError::VersionMismatch` for a foreign tag, and
/// `BackupError::InvalidPayload` when `progress` is missing, not an object,
/// or its entries do not have the progress-entry shape.
pub fn decode_backup(text: &str) -> Result<ProgressMap, BackupError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|err| BackupError::Malformed(err.to_string()))?;

    let version = value
        .get("version")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    if version != BACKUP_FORMAT_VERSION {
        return Err(BackupError::VersionMismatch {
            found: version.to_string(),
        });
    }

    let Some(progress) = value.get("progress") else {
        return Err(BackupError::InvalidPayload);
    };
    if !progress.is_object() {
        return Err(BackupError::InvalidPayload);
    }

    serde_json::from_value(progress.clone()).map_err(|_| BackupError::InvalidPayload)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
