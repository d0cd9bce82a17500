//! Spinner shown while a turn's responder call is outstanding.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// One spinner at a time, replaced on each new turn.
pub struct TurnSpinner {
    current: Option<ProgressBar>,
}

impl TurnSpinner {
    pub fn new() -> Self {
        Self { current: None }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    /// Start spinning with the given message, replacing any active spinner.
    pub fn start(&mut self, message: impl Into<String>) {
        self.stop();
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::style());
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.current = Some(pb);
    }

    /// Clear the active spinner, if any.
    pub fn stop(&mut self) {
        if let Some(pb) = self.current.take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for TurnSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TurnSpinner {
    fn drop(&mut self) {
        self.stop();
    }
}
