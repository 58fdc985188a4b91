#![forbid(unsafe_code)]

pub mod app_services;
pub mod backup_service;
pub mod catalog;
pub mod error;
pub mod progress_service;
pub mod study;

pub use memoark_core::Clock;

pub use app_services::{AppServices, CatalogState};
pub use backup_service::BackupService;
pub use catalog::CatalogStore;
pub use error::{AppServicesError, BackupError, CatalogError, ProgressError};
pub use progress_service::{ProgressService, ProgressSummary};
pub use study::{StudySession, SESSION_SIZE};
