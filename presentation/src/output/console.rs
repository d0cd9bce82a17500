//! Console output for driver events.
//!
//! [`EventRenderer`] prints events live as the run progresses;
//! [`ConsoleFormatter`] formats a completed run for the `--output` modes.

use crate::progress::spinner::TurnSpinner;
use colored::Colorize;
use krew_domain::{EventKind, RunEvent};

/// Live renderer for the driver's event stream.
pub struct EventRenderer {
    spinner: TurnSpinner,
}

impl EventRenderer {
    pub fn new() -> Self {
        Self {
            spinner: TurnSpinner::new(),
        }
    }

    /// Print one event. Thinking events hold a spinner that the next event
    /// clears.
    pub fn render(&mut self, event: &RunEvent) {
        if event.kind == EventKind::Thinking {
            self.spinner.start(event.text.clone());
            return;
        }
        self.spinner.stop();

        match event.kind {
            EventKind::PhaseStart => {
                println!("\n{}", format!("== {} ==", event.text).cyan().bold());
            }
            EventKind::BriefIssued => {
                println!("{}", format!("[{}] {}", event.speaker, event.text).cyan());
            }
            EventKind::AgentReply => {
                println!("\n{}", format!("-- {} --", event.speaker).yellow().bold());
                println!("{}", event.text);
            }
            EventKind::ConsensusReached => {
                println!("\n{}", format!("[{}] {}", event.speaker, event.text).green().bold());
            }
            EventKind::FinalResult => {
                println!("\n{}", "== Final Result ==".green().bold());
                println!("{}", event.text);
            }
            EventKind::Thinking => {}
        }
    }

    /// Clear any outstanding spinner, e.g. when the run ends in an error.
    pub fn finish(&mut self) {
        self.spinner.stop();
    }
}

impl Default for EventRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a completed run's events
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Full conversation: every reply plus the final result.
    pub fn format_full(events: &[RunEvent]) -> String {
        let mut out = String::new();
        for event in events {
            match event.kind {
                EventKind::PhaseStart => {
                    out.push_str(&format!("\n== {} ==\n", event.text));
                }
                EventKind::AgentReply => {
                    out.push_str(&format!("\n-- {} --\n{}\n", event.speaker, event.text));
                }
                EventKind::ConsensusReached => {
                    if let Some(answer) = &event.final_answer {
                        out.push_str(&format!("\nConsensus: {answer}\n"));
                    }
                }
                EventKind::FinalResult => {
                    out.push_str(&format!("\n== Final Result ==\n{}\n", event.text));
                }
                EventKind::BriefIssued | EventKind::Thinking => {}
            }
        }
        out
    }

    /// Only the final synthesized result.
    pub fn format_final(events: &[RunEvent]) -> Option<String> {
        events
            .iter()
            .find(|e| e.kind == EventKind::FinalResult)
            .map(|e| e.text.clone())
    }

    /// The event sequence as pretty-printed JSON.
    pub fn format_json(events: &[RunEvent]) -> String {
        serde_json::to_string_pretty(events).unwrap_or_else(|_| "[]".to_string())
    }
}
