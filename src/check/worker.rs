//! Per-file spell-check worker.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::dictionary::{Dictionary, normalize_token};

use super::summary::SummaryAggregator;

/// Check one target file against the dictionary, reporting every miss to the
/// shared summary.
///
/// The file is counted as processed on the attempt, before the open is
/// checked, so a bad path still shows up in the files-processed total. An
/// open failure is logged and ends the task cleanly; a read error mid-stream
/// just ends the token stream early. Neither is fatal to the run.
pub fn run(path: &Path, dictionary: &Arc<Dictionary>, summary: &Arc<SummaryAggregator>) {
    summary.record_file_started();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!("failed to open {}: {}", path.display(), err);
            return;
        }
    };

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        for token in line.split_whitespace() {
            let Some(word) = normalize_token(token) else {
                continue;
            };
            if !dictionary.contains(&word) {
                summary.record_miss(&word);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn small_dict(words: &str) -> Arc<Dictionary> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{words}").unwrap();
        file.flush().unwrap();
        Arc::new(Dictionary::load(file.path(), 64).unwrap())
    }

    #[test]
    fn reports_misses_and_normalized_hits() {
        let dictionary = small_dict("cat dog");
        let summary = Arc::new(SummaryAggregator::new());

        let mut target = NamedTempFile::new().unwrap();
        write!(target, "cat dog fish Cat.").unwrap();
        target.flush().unwrap();

        run(target.path(), &dictionary, &summary);

        let snapshot = summary.snapshot();
        assert_eq!(snapshot.files_processed, 1);
        assert_eq!(snapshot.spelling_errors, 1);
        assert_eq!(snapshot.top_misspellings[0].word, "fish");
        assert_eq!(snapshot.top_misspellings[0].count, 1);
    }

    #[test]
    fn read_error_mid_stream_ends_token_stream() {
        let dictionary = small_dict("cat");
        let summary = Arc::new(SummaryAggregator::new());

        // Invalid UTF-8 partway through the file fails the line read there;
        // only words before the bad bytes are counted, with no error raised.
        let mut target = NamedTempFile::new().unwrap();
        target.write_all(b"wrogn\n \xFF\xFE\n alsowrogn\n").unwrap();
        target.flush().unwrap();

        run(target.path(), &dictionary, &summary);

        let snapshot = summary.snapshot();
        assert_eq!(snapshot.files_processed, 1);
        assert_eq!(snapshot.spelling_errors, 1);
        assert_eq!(snapshot.top_misspellings[0].word, "wrogn");
    }

    #[test]
    fn missing_file_still_counts_as_processed() {
        let dictionary = small_dict("cat");
        let summary = Arc::new(SummaryAggregator::new());

        run(Path::new("/nonexistent/target.txt"), &dictionary, &summary);

        let snapshot = summary.snapshot();
        assert_eq!(snapshot.files_processed, 1);
        assert_eq!(snapshot.spelling_errors, 0);
    }
}
