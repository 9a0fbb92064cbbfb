//! Run-wide summary accumulation shared by every worker.
//!
//! All counters and the top-misspelling ranking live behind one coarse mutex.
//! Misses are rare compared to word scans, so a single lock keeps the
//! snapshot trivially consistent without costing measurable throughput.

use serde::Serialize;
use std::sync::Mutex;

/// Number of ranked slots kept for the most frequent misspellings
pub const TOP_MISSPELLINGS: usize = 3;

/// One ranked misspelling and how often it has been seen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordCounter {
    pub word: String,
    pub count: u64,
}

/// Snapshot of the run-wide statistics at a point in time
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryData {
    pub files_processed: u64,
    pub spelling_errors: u64,
    /// Always sorted by count descending; unfilled slots hold an empty word
    /// at count 0.
    pub top_misspellings: [WordCounter; TOP_MISSPELLINGS],
}

/// Thread-safe accumulator for run-wide spell-check statistics.
///
/// The ranking is an approximate heavy-hitter tracker: when a new word
/// displaces the slot with the lowest count, the displaced word's history is
/// gone, and it restarts at 1 if it ever comes back. That bounded-memory
/// trade-off is intentional.
#[derive(Debug, Default)]
pub struct SummaryAggregator {
    inner: Mutex<SummaryData>,
}

impl SummaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a submitted file. Called exactly once per task, on the attempt,
    /// whether or not the file later opens.
    pub fn record_file_started(&self) {
        let mut summary = self.inner.lock().unwrap();
        summary.files_processed += 1;
    }

    /// Count one misspelling and fold it into the ranking
    pub fn record_miss(&self, word: &str) {
        let mut summary = self.inner.lock().unwrap();
        summary.spelling_errors += 1;

        let slots = &mut summary.top_misspellings;
        if let Some(slot) = slots.iter_mut().find(|slot| slot.word == word) {
            slot.count += 1;
        } else {
            // Evict the first slot holding the minimum count. Empty slots sit
            // at count 0, so they fill before anything real is displaced.
            let min_index = slots
                .iter()
                .enumerate()
                .min_by_key(|(_, slot)| slot.count)
                .map(|(index, _)| index)
                .unwrap_or(0);
            slots[min_index] = WordCounter {
                word: word.to_string(),
                count: 1,
            };
        }

        // Stable sort keeps prior relative order between tied slots.
        slots.sort_by(|a, b| b.count.cmp(&a.count));
    }

    /// Take a consistent copy of the current statistics
    pub fn snapshot(&self) -> SummaryData {
        self.inner.lock().unwrap().clone()
    }
}
