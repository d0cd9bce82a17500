//! Console rendering and output formatting.

pub mod console;

pub use console::{ConsoleFormatter, EventRenderer};
