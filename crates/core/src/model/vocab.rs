use serde::{Deserialize, Serialize};

//
// ─── CATALOG TYPES ─────────────────────────────────────────────────────────────
//

/// A single sense of a word, in English and Chinese.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub en: String,
    pub cn: String,
}

/// An example sentence, in English and Chinese.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub en: String,
    pub cn: String,
}

/// A common phrase the word appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collocation {
    pub phrase: String,
    pub cn: String,
}

/// An optional practice task attached to a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub instruction: String,
    pub demo_en: String,
    pub demo_cn: String,
}

/// The learnable content of a vocabulary entry.
///
/// Field names match the catalog JSON wire format exactly; the catalog file
/// is external and never rewritten by this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabContent {
    pub core_meaning: String,
    pub ipa: String,
    pub definitions: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_words: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collocations: Option<Vec<Collocation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

/// One entry of the read-only vocabulary catalog.
///
/// `word` is the identity key: progress is recorded against it, and the
/// catalog guarantees it is unique within the loaded list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    pub word: String,
    pub pos: String,
    pub level: u32,
    pub content: VocabContent,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
