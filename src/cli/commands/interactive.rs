use anyhow::Result;
use clap::Args;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::check::WorkerMode;
use crate::check::report::OutputFormat;
use crate::cli::output::Output;
use crate::config::SpellsweepConfig;

use super::session::{self, Session};

#[derive(Args)]
pub struct InteractiveArgs {
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
}

/// Menu loop front-end: submit one spell-check task per menu round, then
/// wait for every in-flight worker before reporting. Submission never
/// interleaves with the final wait.
pub async fn execute(args: InteractiveArgs, quiet: bool, config_path: Option<&str>) -> Result<()> {
    let out = Output::new(quiet);
    let config = SpellsweepConfig::load_with_custom_config(config_path)?;
    let destination = session::resolve_output(&config, args.output, args.log)?;

    let dict = match args.dict {
        Some(path) => Some(path),
        None => prompt("Enter dictionary file name: ")?
            .filter(|name| !name.is_empty())
            .map(PathBuf::from),
    };
    let session = Session::start(&config, dict, args.mode, args.max_workers, &out)?;

    loop {
        println!();
        println!("1. Start a new spellcheck task");
        println!("2. Exit");
        let Some(choice) = prompt("Select an option: ")? else {
            break; // stdin closed
        };

        match choice.as_str() {
            "1" => {
                if let Some(file) = prompt("Enter text file name: ")?.filter(|f| !f.is_empty()) {
                    session.coordinator.submit(PathBuf::from(file));
                }
            }
            "2" => break,
            other => out.warning(&format!("Unknown option: {other}")),
        }
    }

    session.coordinator.await_all();
    let snapshot = session.summary.snapshot();
    session::emit_summary(&snapshot, destination.as_ref(), OutputFormat::Text, &out)
}

/// Read one trimmed line from stdin; `None` on end of input
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{message}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
