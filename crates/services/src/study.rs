use memoark_core::model::VocabItem;
use rand::Rng;
use rand::seq::SliceRandom;

/// How many cards one study round draws at most.
pub const SESSION_SIZE: usize = 10;

/// In-memory flashcard round over a random draw from the catalog.
///
/// The draw is a uniform shuffle truncated to the session size, so a round
/// never repeats a word. Answering always advances; the session keeps no
/// results of its own, since every answer goes straight to the progress
/// store.
#[derive(Debug, Clone)]
pub struct StudySession {
    queue: Vec<VocabItem>,
    current: usize,
}

impl StudySession {
    /// Draw up to [`SESSION_SIZE`] distinct words from the catalog.
    pub fn draw(catalog: &[VocabItem], rng: &mut impl Rng) -> Self {
        Self::draw_with_size(catalog, SESSION_SIZE, rng)
    }

    /// Draw up to `size` distinct words from the catalog.
    pub fn draw_with_size(catalog: &[VocabItem], size: usize, rng: &mut impl Rng) -> Self {
        let mut queue: Vec<VocabItem> = catalog.to_vec();
        queue.shuffle(rng);
        queue.truncate(size);
        Self { queue, current: 0 }
    }

    /// The card currently shown, if the round is not finished.
    #[must_use]
    pub fn current_card(&self) -> Option<&VocabItem> {
        self.queue.get(self.current)
    }

    /// Move past the current card. Has no effect once finished.
    pub fn advance(&mut self) {
        if self.current < self.queue.len() {
            self.current += 1;
        }
    }

    /// True once every drawn card has been answered.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.queue.is_empty() && self.current >= self.queue.len()
    }

    /// True if the draw produced no cards at all (empty catalog).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// 1-based position of the current card, for the progress header.
    #[must_use]
    pub fn position(&self) -> usize {
        (self.current + 1).min(self.queue.len())
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.queue.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
