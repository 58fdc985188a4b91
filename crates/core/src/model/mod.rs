mod backup;
mod progress;
mod vocab;

pub use backup::{BACKUP_FORMAT_VERSION, BackupContainer, backup_file_name};
pub use progress::{DisplayStatus, ProgressEntry, ProgressMap, WordStatus};
pub use vocab::{Collocation, Definition, Example, Task, VocabContent, VocabItem};
