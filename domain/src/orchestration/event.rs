//! Driver event records
//!
//! The driver narrates a run as an ordered sequence of immutable
//! [`RunEvent`]s. Consumers render them live, log them, or collect them for
//! export; the driver never mutates an event after emission.

use crate::orchestration::entities::Phase;
use serde::{Deserialize, Serialize};

/// Kind of a driver event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A phase is starting
    PhaseStart,
    /// The team brief was built and seeded into the transcript
    BriefIssued,
    /// A persona's responder call is outstanding
    Thinking,
    /// A persona replied; the reply is already in the transcript
    AgentReply,
    /// A consensus reply carried the final-answer marker
    ConsensusReached,
    /// The synthesized final result; the only kind that signals completion
    FinalResult,
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::PhaseStart => "phase_start",
            EventKind::BriefIssued => "brief_issued",
            EventKind::Thinking => "thinking",
            EventKind::AgentReply => "agent_reply",
            EventKind::ConsensusReached => "consensus_reached",
            EventKind::FinalResult => "final_result",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable progress record emitted by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEvent {
    /// Position in the run's event sequence; strictly increasing from 0
    pub ordinal: u64,
    pub kind: EventKind,
    pub phase: Phase,
    /// Display name of whoever the event is about
    pub speaker: String,
    /// Display text for rendering
    pub text: String,
    /// Extracted answer, present on `ConsensusReached` events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_answer: Option<String>,
}

impl RunEvent {
    pub fn new(
        ordinal: u64,
        kind: EventKind,
        phase: Phase,
        speaker: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            ordinal,
            kind,
            phase,
            speaker: speaker.into(),
            text: text.into(),
            final_answer: None,
        }
    }

    pub fn with_final_answer(mut self, answer: impl Into<String>) -> Self {
        self.final_answer = Some(answer.into());
        self
    }

    /// True for the event that signals successful run completion.
    pub fn is_terminal(&self) -> bool {
        self.kind == EventKind::FinalResult
    }
}
