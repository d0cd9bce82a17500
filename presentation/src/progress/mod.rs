//! Live progress indicators.

pub mod spinner;

pub use spinner::TurnSpinner;
