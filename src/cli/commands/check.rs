use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use crate::check::WorkerMode;
use crate::check::report::OutputFormat;
use crate::cli::output::Output;
use crate::config::SpellsweepConfig;

use super::session::{self, Session};

#[derive(Args)]
pub struct CheckArgs {
    /// Files to spell-check
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Word-list file (defaults to dictionary.path from config)
    #[arg(short, long, value_name = "FILE")]
    pub dict: Option<PathBuf>,

    /// Write the summary to this file instead of the console
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the summary to the configured output file
    #[arg(short = 'l', long)]
    pub log: bool,

    /// Processing mode: spawn (one thread per file) or a bounded pool
    #[arg(long, value_enum)]
    pub mode: Option<WorkerMode>,

    /// Worker pool size for pool mode (0 = auto-detect)
    #[arg(long)]
    pub max_workers: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show timing statistics after the run
    #[arg(long)]
    pub stats: bool,
}

pub async fn execute(args: CheckArgs, quiet: bool, config_path: Option<&str>) -> Result<()> {
    let out = Output::new(quiet);
    let config = SpellsweepConfig::load_with_custom_config(config_path)?;
    let destination = session::resolve_output(&config, args.output, args.log)?;

    let session = Session::start(&config, args.dict, args.mode, args.max_workers, &out)?;

    let start_time = Instant::now();
    let submitted = args.files.len();
    for file in args.files {
        session.coordinator.submit(file);
    }
    session.coordinator.await_all();
    let elapsed = start_time.elapsed();

    let snapshot = session.summary.snapshot();
    session::emit_summary(&snapshot, destination.as_ref(), args.format, &out)?;

    if args.stats {
        out.info(&format!(
            "Checked {} files in {:.2}s ({} misspellings)",
            submitted,
            elapsed.as_secs_f64(),
            snapshot.spelling_errors
        ));
    }
    Ok(())
}
