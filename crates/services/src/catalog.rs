use std::fs;
use std::path::Path;

use memoark_core::model::VocabItem;

use crate::error::CatalogError;

/// The read-only vocabulary catalog, loaded once at startup.
///
/// Never mutated after load; views borrow slices out of it. Distinct levels
/// are derived from the data up front so filter rows render without a scan.
#[derive(Debug)]
pub struct CatalogStore {
    items: Vec<VocabItem>,
    levels: Vec<u32>,
}

impl CatalogStore {
    /// Build a catalog from an already-parsed item list.
    #[must_use]
    pub fn from_items(items: Vec<VocabItem>) -> Self {
        let mut levels: Vec<u32> = items.iter().map(|item| item.level).collect();
        levels.sort_unstable();
        levels.dedup();
        Self { items, levels }
    }

    /// Load the catalog from a JSON array file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Read` if the file cannot be read and
    /// `CatalogError::Parse` if it is not a valid array of vocabulary items.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<VocabItem> =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_items(items))
    }

    #[must_use]
    pub fn items(&self) -> &[VocabItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lookup by identity key.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&VocabItem> {
        self.items.iter().find(|item| item.word == word)
    }

    /// Distinct levels present in the data, ascending.
    #[must_use]
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use memoark_core::model::VocabContent;

    fn vocab(word: &str, level: u32) -> VocabItem {
        VocabItem {
            word: word.to_string(),
            pos: "n.".to_string(),
            level,
            content: VocabContent {
                core_meaning: String::new(),
                ipa: String::new(),
                definitions: Vec::new(),
                related_words: None,
                collocations: None,
                examples: None,
                task: None,
            },
        }
    }

    #[test]
    fn levels_are_distinct_and_sorted() {
        let store = CatalogStore::from_items(vec![
            vocab("c", 3),
            vocab("a", 1),
            vocab("b", 3),
            vocab("d", 2),
        ]);
        assert_eq!(store.levels(), &[1, 2, 3]);
    }

    #[test]
    fn lookup_by_word() {
        let store = CatalogStore::from_items(vec![vocab("apple", 1)]);
        assert!(store.get("apple").is_some());
        assert!(store.get("pear").is_none());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = CatalogStore::from_json_file(Path::new("no/such/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
