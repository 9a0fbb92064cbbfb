//! Command implementations for the Spellsweep CLI.

pub mod check;
pub mod interactive;
pub mod session;
pub mod version;
