//! Presentation layer for krew
//!
//! CLI argument definitions, the live console renderer for driver events,
//! and formatters for completed runs.

pub mod cli;
pub mod output;
pub mod progress;

pub use cli::commands::{Cli, OutputFormat};
pub use output::console::{ConsoleFormatter, EventRenderer};
pub use progress::spinner::TurnSpinner;
