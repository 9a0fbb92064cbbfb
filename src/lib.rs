//! # Spellsweep - Concurrent Spell Checking
//!
//! Spellsweep checks text files against a word-list dictionary, dispatching
//! each file to its own concurrent worker and aggregating every worker's
//! findings into one run-wide summary.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install spellsweep
//! cargo install spellsweep
//!
//! # Check a batch of files against a word-list
//! spellsweep check --dict words.txt chapter1.txt chapter2.txt
//!
//! # Or drive it interactively, one task at a time
//! spellsweep interactive --dict words.txt
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod dictionary;

pub use cli::Cli;
pub use config::SpellsweepConfig;

/// Result type alias for Spellsweep operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
