//! Word-list dictionary with hash-bucket membership lookup.
//!
//! The dictionary is loaded once before any worker starts and never mutated
//! afterwards, so workers query it concurrently through a plain `Arc` with no
//! locking at all.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

mod normalize;

pub use normalize::normalize_token;

/// Default bucket-table size, sized for a full English word-list
pub const DEFAULT_BUCKETS: usize = 150_000;

/// Immutable-after-load membership index over a word-list.
///
/// Each bucket is a growable chain of owned words; duplicate insertions are
/// permitted and harmless (membership is the only observable property).
pub struct Dictionary {
    buckets: Vec<Vec<String>>,
    word_count: usize,
}

impl Dictionary {
    /// Create an empty dictionary with the given bucket-table size
    pub fn with_buckets(buckets: usize) -> Self {
        Dictionary {
            buckets: vec![Vec::new(); buckets.max(1)],
            word_count: 0,
        }
    }

    /// Load a dictionary from a whitespace-separated word-list file.
    ///
    /// Entries are normalized with the same rule workers apply to target-file
    /// tokens, so lookups never miss on a pure case/punctuation mismatch.
    /// An unopenable word-list is the one fatal error in the system.
    pub fn load(path: &Path, buckets: usize) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open word-list: {}", path.display()))?;

        let mut dict = Self::with_buckets(buckets);
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                // A read error mid-stream ends the word-list early, same as
                // the worker-side token stream contract.
                Err(_) => break,
            };
            for token in line.split_whitespace() {
                if let Some(word) = normalize_token(token) {
                    dict.insert(word);
                }
            }
        }

        tracing::info!(
            words = dict.word_count,
            buckets = dict.buckets.len(),
            "dictionary loaded from {}",
            path.display()
        );
        Ok(dict)
    }

    fn insert(&mut self, word: String) {
        let index = self.bucket_index(&word);
        self.buckets[index].push(word);
        self.word_count += 1;
    }

    /// Membership test for an already-normalized word
    pub fn contains(&self, word: &str) -> bool {
        self.buckets[self.bucket_index(word)]
            .iter()
            .any(|entry| entry == word)
    }

    /// Number of entries inserted (duplicates included)
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    fn bucket_index(&self, word: &str) -> usize {
        (hash_word(word) % self.buckets.len() as u64) as usize
    }
}

/// djb2 string hash: seed 5381, multiply by 33 and add each byte
fn hash_word(word: &str) -> u64 {
    let mut hash: u64 = 5381;
    for byte in word.bytes() {
        hash = (hash << 5).wrapping_add(hash).wrapping_add(byte as u64);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dict_from_words(words: &[&str], buckets: usize) -> Dictionary {
        let mut dict = Dictionary::with_buckets(buckets);
        for word in words {
            if let Some(normalized) = normalize_token(word) {
                dict.insert(normalized);
            }
        }
        dict
    }

    #[test]
    fn contains_inserted_words() {
        let dict = dict_from_words(&["cat", "dog", "fish"], 64);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("fish"));
        assert!(!dict.contains("bird"));
    }

    #[test]
    fn collisions_do_not_break_membership() {
        // A two-bucket table forces nearly every word into a shared chain.
        let words = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
        let dict = dict_from_words(&words, 2);
        for word in words {
            assert!(dict.contains(word), "lost {word} to a collision");
        }
        assert!(!dict.contains("omega"));
    }

    #[test]
    fn duplicate_entries_are_harmless() {
        let dict = dict_from_words(&["cat", "cat", "cat"], 8);
        assert!(dict.contains("cat"));
        assert_eq!(dict.word_count(), 3);
    }

    #[test]
    fn load_normalizes_entries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Cat DOG. fish's").unwrap();
        file.flush().unwrap();

        let dict = Dictionary::load(file.path(), 64).unwrap();
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("fish's"));
        assert!(!dict.contains("Cat"));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let result = Dictionary::load(Path::new("/nonexistent/words.txt"), 64);
        assert!(result.is_err());
    }
}
