use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ─── STATUS TYPES ──────────────────────────────────────────────────────────────
//

/// A persisted mastery status for a word.
///
/// Only these two values are ever written to storage. "Unseen" is modelled
/// as the absence of a `ProgressEntry`, never as a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    Learning,
    Mastered,
}

/// The three-valued status shown in the UI.
///
/// `Unseen` is a computed projection of "no entry in the progress map".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Unseen,
    Learning,
    Mastered,
}

impl DisplayStatus {
    /// Projects an optional persisted status into the display status.
    #[must_use]
    pub fn from_persisted(status: Option<WordStatus>) -> Self {
        match status {
            None => Self::Unseen,
            Some(WordStatus::Learning) => Self::Learning,
            Some(WordStatus::Mastered) => Self::Mastered,
        }
    }

    /// Human-readable label for badges and buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unseen => "Unseen",
            Self::Learning => "Learning",
            Self::Mastered => "Mastered",
        }
    }
}

impl From<WordStatus> for DisplayStatus {
    fn from(status: WordStatus) -> Self {
        Self::from_persisted(Some(status))
    }
}

//
// ─── PROGRESS MAP ──────────────────────────────────────────────────────────────
//

/// Per-word mastery record.
///
/// `updated_at` is serialized as `updatedAt` to stay compatible with
/// progress slots and backup files written by earlier releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub status: WordStatus,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl ProgressEntry {
    #[must_use]
    pub fn new(status: WordStatus, updated_at: DateTime<Utc>) -> Self {
        Self { status, updated_at }
    }
}

/// Mapping from word to mastery record. No ordering guarantee.
///
/// Keys should correspond to words the catalog once contained, but this is
/// not enforced: stale keys from a removed catalog entry are tolerated and
/// simply unused by the UI.
pub type ProgressMap = HashMap<String, ProgressEntry>;

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn absent_entry_displays_as_unseen() {
        assert_eq!(DisplayStatus::from_persisted(None), DisplayStatus::Unseen);
    }

    #[test]
    fn persisted_statuses_project_directly() {
        assert_eq!(
            DisplayStatus::from_persisted(Some(WordStatus::Learning)),
            DisplayStatus::Learning
        );
        assert_eq!(
            DisplayStatus::from_persisted(Some(WordStatus::Mastered)),
            DisplayStatus::Mastered
        );
    }

    #[test]
    fn entry_uses_legacy_wire_field_names() {
        let entry = ProgressEntry::new(WordStatus::Learning, fixed_now());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "learning");
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("updated_at").is_none());
    }

    #[test]
    fn map_round_trips_through_json() {
        let mut map = ProgressMap::new();
        map.insert(
            "apple".to_string(),
            ProgressEntry::new(WordStatus::Mastered, fixed_now()),
        );

        let json = serde_json::to_string(&map).unwrap();
        let parsed: ProgressMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }
}
