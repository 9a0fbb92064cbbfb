//! Shared setup between the batch and interactive front-ends.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::check::report::OutputFormat;
use crate::check::{Coordinator, SummaryAggregator, SummaryData, WorkerMode, report};
use crate::cli::output::Output;
use crate::config::SpellsweepConfig;
use crate::dictionary::Dictionary;

/// A configured spell-check run: loaded dictionary, shared summary, and the
/// coordinator that ties workers to both.
pub struct Session {
    pub coordinator: Coordinator,
    pub summary: Arc<SummaryAggregator>,
}

impl Session {
    /// Resolve CLI overrides against config, load the dictionary, and stand
    /// up the coordinator. Dictionary load failure is fatal to the run.
    pub fn start(
        config: &SpellsweepConfig,
        dict: Option<PathBuf>,
        mode: Option<WorkerMode>,
        max_workers: Option<usize>,
        out: &Output,
    ) -> Result<Self> {
        let dict_path = match dict {
            Some(path) => path,
            None => PathBuf::from(config.get_string("dictionary.path")?),
        };
        let buckets = config.get_usize("dictionary.buckets")?;
        let mode = match mode {
            Some(mode) => mode,
            None => config.get::<WorkerMode>("checker.mode")?,
        };
        let max_workers = match max_workers {
            Some(limit) => limit,
            None => config.get_usize("checker.max_workers")?,
        };

        let dictionary = Arc::new(Dictionary::load(&dict_path, buckets)?);
        out.info(&format!(
            "Loaded {} dictionary words from {}",
            dictionary.word_count(),
            dict_path.display()
        ));

        let summary = Arc::new(SummaryAggregator::new());
        let coordinator = Coordinator::new(dictionary, summary.clone(), mode, max_workers);
        Ok(Session {
            coordinator,
            summary,
        })
    }
}

/// Deliver the final summary to a file when one was chosen, otherwise print
/// it on the console.
pub fn emit_summary(
    summary: &SummaryData,
    destination: Option<&PathBuf>,
    format: OutputFormat,
    out: &Output,
) -> Result<()> {
    match destination {
        Some(path) => {
            report::write_to_file(summary, path, format)?;
            out.success(&format!("Summary written to {}", path.display()));
        }
        None => print!("{}", report::render_format(summary, format)?),
    }
    Ok(())
}

/// Pick the summary destination: an explicit `--output` path wins, then the
/// configured output file when `--log` was passed, then the console.
pub fn resolve_output(
    config: &SpellsweepConfig,
    output: Option<PathBuf>,
    log: bool,
) -> Result<Option<PathBuf>> {
    if output.is_some() {
        return Ok(output);
    }
    if log {
        return Ok(Some(PathBuf::from(config.get_string("output.file")?)));
    }
    Ok(None)
}
