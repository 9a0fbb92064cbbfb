//! Summary rendering for the end-of-run report.

use anyhow::{Context, Result};
use std::path::Path;

use super::summary::SummaryData;

/// Report rendering format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-layout human-readable text
    #[default]
    Text,
    /// JSON snapshot of the full summary
    Json,
}

/// Render a summary snapshot in the fixed report layout: the two totals,
/// then one `<word>: <count> times` line per ranked slot. Unfilled slots
/// render with an empty word and a zero count.
pub fn render(summary: &SummaryData) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Number of files processed: {}\n",
        summary.files_processed
    ));
    out.push_str(&format!(
        "Number of spelling errors: {}\n",
        summary.spelling_errors
    ));
    for slot in &summary.top_misspellings {
        out.push_str(&format!("{}: {} times\n", slot.word, slot.count));
    }
    out
}

/// Render in the requested format
pub fn render_format(summary: &SummaryData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render(summary)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(summary).context("failed to serialize summary")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write the rendered report to a file instead of the console
pub fn write_to_file(summary: &SummaryData, path: &Path, format: OutputFormat) -> Result<()> {
    std::fs::write(path, render_format(summary, format)?)
        .with_context(|| format!("failed to write summary to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::summary::SummaryAggregator;

    #[test]
    fn renders_fixed_layout() {
        let aggregator = SummaryAggregator::new();
        aggregator.record_file_started();
        aggregator.record_miss("fish");

        let report = render(&aggregator.snapshot());
        assert_eq!(
            report,
            "Number of files processed: 1\n\
             Number of spelling errors: 1\n\
             fish: 1 times\n\
             : 0 times\n\
             : 0 times\n"
        );
    }

    #[test]
    fn renders_json() {
        let aggregator = SummaryAggregator::new();
        aggregator.record_miss("teh");

        let json = render_format(&aggregator.snapshot(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["spelling_errors"], 1);
        assert_eq!(value["top_misspellings"][0]["word"], "teh");
    }

    #[test]
    fn writes_report_file() {
        let aggregator = SummaryAggregator::new();
        aggregator.record_file_started();

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("summary.out");
        write_to_file(&aggregator.snapshot(), &path, OutputFormat::Text).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Number of files processed: 1\n"));
    }
}
