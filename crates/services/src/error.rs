//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService` mutations.
///
/// Loads never error: a failed load silently yields an empty map. Only the
/// write path surfaces failures, and those are non-fatal to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while decoding a backup file.
///
/// Every variant is a rejection: none of them leaves any partial effect on
/// the in-memory progress map.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackupError {
    #[error("could not read backup file: {0}")]
    Unreadable(String),

    #[error("backup file is not valid JSON: {0}")]
    Malformed(String),

    #[error("unsupported backup version: {found}")]
    VersionMismatch { found: String },

    #[error("backup progress payload is not an object")]
    InvalidPayload,

    #[error("could not write backup file: {0}")]
    WriteFailed(String),
}

/// Errors emitted while loading the vocabulary catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("could not read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
