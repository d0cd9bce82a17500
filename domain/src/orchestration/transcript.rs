//! Shared conversation transcript

use crate::core::string;
use crate::orchestration::entities::Phase;
use serde::{Deserialize, Serialize};

/// One contribution to the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: String,
    pub phase: Phase,
    /// Exploration round index, when the entry came from an exploration turn.
    pub round: Option<usize>,
    pub text: String,
}

impl TranscriptEntry {
    /// The short tag rendered next to the speaker in the shared buffer,
    /// e.g. `R1` for the first exploration round or `Consensus`.
    pub fn tag(&self) -> String {
        match (self.phase, self.round) {
            (Phase::Exploration, Some(round)) => format!("R{}", round + 1),
            _ => self.phase.display_name().to_string(),
        }
    }
}

/// Append-only record of one run's conversation.
///
/// The driver exclusively owns writes. Responders only ever read bounded
/// windows of the rendered buffer via [`Transcript::tail`].
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    shared: String,
}

impl Transcript {
    /// Start a transcript seeded with the team brief.
    ///
    /// The brief forms the head of the shared buffer verbatim, without a
    /// speaker tag, so the earliest prompt windows open on it.
    pub fn from_brief(speaker: impl Into<String>, brief: impl Into<String>) -> Self {
        let brief = brief.into();
        Self {
            entries: vec![TranscriptEntry {
                speaker: speaker.into(),
                phase: Phase::Brief,
                round: None,
                text: brief.clone(),
            }],
            shared: brief,
        }
    }

    /// Append a persona's reply.
    pub fn record(
        &mut self,
        speaker: impl Into<String>,
        phase: Phase,
        round: Option<usize>,
        text: impl Into<String>,
    ) {
        let entry = TranscriptEntry {
            speaker: speaker.into(),
            phase,
            round,
            text: text.into(),
        };
        self.shared.push_str(&format!(
            "\n\n**{} ({}):** {}",
            entry.speaker,
            entry.tag(),
            entry.text
        ));
        self.entries.push(entry);
    }

    /// The full rendered conversation buffer.
    pub fn shared(&self) -> &str {
        &self.shared
    }

    /// The trailing `max_bytes` window of the rendered buffer.
    pub fn tail(&self, max_bytes: usize) -> &str {
        string::tail(&self.shared, max_bytes)
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brief_seeds_shared_buffer() {
        let t = Transcript::from_brief("Coordinator", "TEAM BRIEF\nOBJECTIVE: x");
        assert_eq!(t.shared(), "TEAM BRIEF\nOBJECTIVE: x");
        assert_eq!(t.len(), 1);
        assert_eq!(t.entries()[0].phase, Phase::Brief);
    }

    #[test]
    fn test_record_appends_tagged_text() {
        let mut t = Transcript::from_brief("Coordinator", "brief");
        t.record("Researcher", Phase::Exploration, Some(0), "first pass");
        t.record("Researcher", Phase::Consensus, None, "we agree");

        assert_eq!(
            t.shared(),
            "brief\n\n**Researcher (R1):** first pass\n\n**Researcher (Consensus):** we agree"
        );
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_round_tags_are_one_based() {
        let entry = TranscriptEntry {
            speaker: "Writer".to_string(),
            phase: Phase::Exploration,
            round: Some(1),
            text: "x".to_string(),
        };
        assert_eq!(entry.tag(), "R2");
    }

    #[test]
    fn test_tail_windows_the_rendered_buffer() {
        let mut t = Transcript::from_brief("Coordinator", "0123456789");
        t.record("A", Phase::Consensus, None, "abcdefghij");
        let tail = t.tail(10);
        assert_eq!(tail.len(), 10);
        assert!(t.shared().ends_with(tail));
    }
}
