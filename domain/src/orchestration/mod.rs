//! Conversation protocol domain
//!
//! The types here describe one crew run: its configuration and turn
//! arithmetic ([`entities`]), the shared transcript ([`transcript`]), the
//! event records the driver emits ([`event`]), and the early-termination
//! marker ([`marker`]).

pub mod entities;
pub mod event;
pub mod marker;
pub mod transcript;

pub use entities::{MIN_EXPLORATION_ROUNDS, Phase, RunConfig};
pub use event::{EventKind, RunEvent};
pub use marker::{FINAL_ANSWER_MARKER, extract_final_answer};
pub use transcript::{Transcript, TranscriptEntry};
