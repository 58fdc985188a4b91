use memoark_core::model::{ProgressMap, VocabItem, WordStatus};

/// Browse-mode page size.
pub const PAGE_SIZE: usize = 20;

/// Search results are capped to keep the list scannable.
pub const SEARCH_LIMIT: usize = 5;

//
// ─── FILTERS ───────────────────────────────────────────────────────────────────
//

/// Status filter row. `All` also shows unseen words; `Learning`/`Mastered`
/// match persisted status only, so an unseen word never satisfies them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Learning,
    Mastered,
}

impl StatusFilter {
    /// Parse the dictionary route's query argument.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("learning") => Self::Learning,
            Some("mastered") => Self::Mastered,
            _ => Self::All,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Learning => "Learning",
            Self::Mastered => "Mastered",
        }
    }

    fn matches(self, status: Option<WordStatus>) -> bool {
        match self {
            Self::All => true,
            Self::Learning => status == Some(WordStatus::Learning),
            Self::Mastered => status == Some(WordStatus::Mastered),
        }
    }
}

/// Everything the dictionary list depends on, besides the data itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryQuery {
    pub search: String,
    pub status: StatusFilter,
    pub level: Option<u32>,
    /// 1-based; out-of-range values are clamped.
    pub page: usize,
}

impl Default for DictionaryQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            level: None,
            page: 1,
        }
    }
}

/// The visible slice of the catalog for one render.
///
/// `indices` point into the catalog slice passed to [`visible_page`], so the
/// view can render without cloning items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub indices: Vec<usize>,
    pub total_pages: usize,
    pub search_mode: bool,
}

//
// ─── LIST DERIVATION ───────────────────────────────────────────────────────────
//

/// Apply status/level filters plus either search ranking or pagination.
///
/// Search mode (non-blank query) ranks word matches exact > prefix >
/// contains, keeps catalog order within a rank, caps the result at
/// [`SEARCH_LIMIT`], and suppresses pagination. Browse mode paginates the
/// filtered list at [`PAGE_SIZE`] per page.
#[must_use]
pub fn visible_page(
    items: &[VocabItem],
    progress: &ProgressMap,
    query: &DictionaryQuery,
) -> PageView {
    let filtered: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            let status = progress.get(&item.word).map(|entry| entry.status);
            query.status.matches(status) && query.level.is_none_or(|level| item.level == level)
        })
        .map(|(idx, _)| idx)
        .collect();

    let needle = query.search.trim().to_lowercase();
    if !needle.is_empty() {
        let mut hits: Vec<usize> = filtered
            .into_iter()
            .filter(|&idx| matches_search(&items[idx], &needle))
            .collect();
        hits.sort_by_key(|&idx| search_rank(&items[idx], &needle));
        hits.truncate(SEARCH_LIMIT);
        return PageView {
            indices: hits,
            total_pages: 1,
            search_mode: true,
        };
    }

    let total_pages = filtered.len().div_ceil(PAGE_SIZE).max(1);
    let page = query.page.clamp(1, total_pages);
    let start = (page - 1) * PAGE_SIZE;
    let indices = filtered
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect();

    PageView {
        indices,
        total_pages,
        search_mode: false,
    }
}

fn matches_search(item: &VocabItem, needle: &str) -> bool {
    item.word.to_lowercase().contains(needle)
        || item.content.core_meaning.contains(needle)
        || item.content.definitions.iter().any(|def| {
            def.en.to_lowercase().contains(needle) || def.cn.to_lowercase().contains(needle)
        })
}

fn search_rank(item: &VocabItem, needle: &str) -> u8 {
    let word = item.word.to_lowercase();
    if word == needle {
        0
    } else if word.starts_with(needle) {
        1
    } else {
        2
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use memoark_core::model::{Definition, ProgressEntry, VocabContent};
    use memoark_core::time::fixed_now;

    fn vocab(word: &str, level: u32, meaning: &str, def_en: &str) -> VocabItem {
        VocabItem {
            word: word.to_string(),
            pos: "n.".to_string(),
            level,
            content: VocabContent {
                core_meaning: meaning.to_string(),
                ipa: String::new(),
                definitions: vec![Definition {
                    en: def_en.to_string(),
                    cn: meaning.to_string(),
                }],
                related_words: None,
                collocations: None,
                examples: None,
                task: None,
            },
        }
    }

    fn catalog() -> Vec<VocabItem> {
        vec![
            vocab("run", 1, "跑", "move fast on foot"),
            vocab("runner", 1, "跑者", "a person who runs"),
            vocab("overrun", 2, "超出", "exceed a limit"),
            vocab("walk", 2, "走", "move at a regular pace"),
        ]
    }

    fn progress_with(entries: &[(&str, WordStatus)]) -> ProgressMap {
        entries
            .iter()
            .map(|(word, status)| {
                (
                    (*word).to_string(),
                    ProgressEntry::new(*status, fixed_now()),
                )
            })
            .collect()
    }

    fn words<'a>(items: &'a [VocabItem], view: &PageView) -> Vec<&'a str> {
        view.indices
            .iter()
            .map(|&idx| items[idx].word.as_str())
            .collect()
    }

    #[test]
    fn all_filter_includes_unseen_words() {
        let items = catalog();
        let progress = progress_with(&[("run", WordStatus::Learning)]);
        let view = visible_page(&items, &progress, &DictionaryQuery::default());
        assert_eq!(view.indices.len(), 4);
        assert!(!view.search_mode);
    }

    #[test]
    fn learning_filter_excludes_unseen_and_mastered() {
        let items = catalog();
        let progress = progress_with(&[
            ("run", WordStatus::Learning),
            ("walk", WordStatus::Mastered),
        ]);
        let query = DictionaryQuery {
            status: StatusFilter::Learning,
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &progress, &query);
        assert_eq!(words(&items, &view), vec!["run"]);
    }

    #[test]
    fn level_filter_combines_with_status_filter() {
        let items = catalog();
        let progress = progress_with(&[
            ("run", WordStatus::Mastered),
            ("walk", WordStatus::Mastered),
        ]);
        let query = DictionaryQuery {
            status: StatusFilter::Mastered,
            level: Some(2),
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &progress, &query);
        assert_eq!(words(&items, &view), vec!["walk"]);
    }

    #[test]
    fn search_ranks_exact_before_prefix_before_contains() {
        let items = catalog();
        let query = DictionaryQuery {
            search: "run".to_string(),
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &ProgressMap::new(), &query);
        assert!(view.search_mode);
        assert_eq!(view.total_pages, 1);
        assert_eq!(words(&items, &view), vec!["run", "runner", "overrun"]);
    }

    #[test]
    fn search_matches_meanings_and_definitions() {
        let items = catalog();
        let query = DictionaryQuery {
            search: "regular pace".to_string(),
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &ProgressMap::new(), &query);
        assert_eq!(words(&items, &view), vec!["walk"]);

        let query = DictionaryQuery {
            search: "跑".to_string(),
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &ProgressMap::new(), &query);
        assert_eq!(words(&items, &view), vec!["run", "runner"]);
    }

    #[test]
    fn search_is_capped() {
        let items: Vec<VocabItem> = (0..10)
            .map(|i| vocab(&format!("card{i}"), 1, "卡", "a card"))
            .collect();
        let query = DictionaryQuery {
            search: "card".to_string(),
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &ProgressMap::new(), &query);
        assert_eq!(view.indices.len(), SEARCH_LIMIT);
    }

    #[test]
    fn blank_search_stays_in_browse_mode() {
        let items = catalog();
        let query = DictionaryQuery {
            search: "   ".to_string(),
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &ProgressMap::new(), &query);
        assert!(!view.search_mode);
    }

    #[test]
    fn pagination_splits_and_clamps() {
        let items: Vec<VocabItem> = (0..45)
            .map(|i| vocab(&format!("w{i:02}"), 1, "x", "y"))
            .collect();

        let view = visible_page(&items, &ProgressMap::new(), &DictionaryQuery::default());
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.indices.len(), PAGE_SIZE);
        assert_eq!(items[view.indices[0]].word, "w00");

        let query = DictionaryQuery {
            page: 3,
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &ProgressMap::new(), &query);
        assert_eq!(view.indices.len(), 5);

        // Past-the-end page clamps to the last one.
        let query = DictionaryQuery {
            page: 99,
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &ProgressMap::new(), &query);
        assert_eq!(view.indices.len(), 5);
    }

    #[test]
    fn empty_result_still_reports_one_page() {
        let items = catalog();
        let query = DictionaryQuery {
            level: Some(9),
            ..DictionaryQuery::default()
        };
        let view = visible_page(&items, &ProgressMap::new(), &query);
        assert!(view.indices.is_empty());
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn status_filter_parses_route_argument() {
        assert_eq!(
            StatusFilter::from_query(Some("learning")),
            StatusFilter::Learning
        );
        assert_eq!(
            StatusFilter::from_query(Some("mastered")),
            StatusFilter::Mastered
        );
        assert_eq!(StatusFilter::from_query(Some("bogus")), StatusFilter::All);
        assert_eq!(StatusFilter::from_query(None), StatusFilter::All);
    }
}
