mod dashboard;
mod dictionary;
mod state;
mod study;

pub use dashboard::DashboardView;
pub use dictionary::DictionaryView;
pub use state::{CatalogLoadError, NoticeBar};
pub use study::StudyView;
