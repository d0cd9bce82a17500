//! Session archive writer.
//!
//! After a completed run, the collected events and the run configuration are
//! written to a session directory: `session.json` for machine consumption
//! and `transcript.md` for reading.

use krew_domain::{EventKind, RunConfig, RunEvent};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Serializable record of one completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub task: String,
    pub team: Vec<TeamMemberRecord>,
    pub round_budget: usize,
    pub steering_notes: String,
    pub events: Vec<RunEvent>,
    pub final_answer: Option<String>,
}

/// Team roster entry as exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberRecord {
    pub role: String,
    pub goal: String,
    pub expertise: String,
}

impl SessionRecord {
    /// Build a record from the run configuration and collected events.
    ///
    /// The final answer is taken from the `FinalResult` event when present.
    pub fn from_run(config: &RunConfig, events: Vec<RunEvent>) -> Self {
        let final_answer = events
            .iter()
            .find(|e| e.kind == EventKind::FinalResult)
            .map(|e| e.text.clone());

        Self {
            session_id: chrono::Utc::now().format("%Y%m%d-%H%M%S").to_string(),
            task: config.task.content().to_string(),
            team: config
                .personas
                .iter()
                .map(|p| TeamMemberRecord {
                    role: p.role().to_string(),
                    goal: p.goal().to_string(),
                    expertise: p.expertise().to_string(),
                })
                .collect(),
            round_budget: config.round_budget,
            steering_notes: config.steering_notes.clone(),
            events,
            final_answer,
        }
    }
}

/// Writes session records to disk.
pub struct SessionArchive;

impl SessionArchive {
    /// Write `session.json` and `transcript.md` under
    /// `<base_dir>/session-<id>/` and return the created directory.
    pub fn write(base_dir: &Path, record: &SessionRecord) -> io::Result<PathBuf> {
        let dir = base_dir.join(format!("session-{}", record.session_id));
        std::fs::create_dir_all(&dir)?;

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(dir.join("session.json"), json)?;
        std::fs::write(dir.join("transcript.md"), Self::render_transcript(record))?;

        Ok(dir)
    }

    fn render_transcript(record: &SessionRecord) -> String {
        let mut out = format!("# Crew session {}\n\n", record.session_id);
        out.push_str(&format!("**Task:** {}\n\n", record.task));

        out.push_str("## Team\n\n");
        for member in &record.team {
            out.push_str(&format!("- **{}** ({})\n", member.role, member.expertise));
        }
        out.push('\n');

        out.push_str("## Conversation\n");
        for event in &record.events {
            match event.kind {
                EventKind::PhaseStart => {
                    out.push_str(&format!("\n### {}\n", event.text));
                }
                EventKind::AgentReply => {
                    out.push_str(&format!("\n**{}:** {}\n", event.speaker, event.text));
                }
                EventKind::ConsensusReached => {
                    if let Some(answer) = &event.final_answer {
                        out.push_str(&format!("\n> Consensus: {answer}\n"));
                    }
                }
                // Brief notices and thinking lines carry no transcript text
                EventKind::BriefIssued | EventKind::Thinking | EventKind::FinalResult => {}
            }
        }

        if let Some(answer) = &record.final_answer {
            out.push_str(&format!("\n## Final result\n\n{answer}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krew_domain::{Persona, Phase, Task};

    fn sample_record() -> SessionRecord {
        let config = RunConfig::new(
            Task::new("Plan the launch"),
            vec![Persona::new("Researcher", "Find facts", "Research")],
            5,
        );
        let events = vec![
            RunEvent::new(
                0,
                EventKind::PhaseStart,
                Phase::Brief,
                "Coordinator",
                "New mission: Plan the launch",
            ),
            RunEvent::new(
                1,
                EventKind::AgentReply,
                Phase::Exploration,
                "Researcher",
                "We should start with the market size.",
            ),
            RunEvent::new(
                2,
                EventKind::FinalResult,
                Phase::Synthesis,
                "Coordinator",
                "Launch in Q3.",
            ),
        ];
        SessionRecord::from_run(&config, events)
    }

    #[test]
    fn test_final_answer_comes_from_final_result_event() {
        let record = sample_record();
        assert_eq!(record.final_answer.as_deref(), Some("Launch in Q3."));
        assert_eq!(record.team.len(), 1);
    }

    #[test]
    fn test_archive_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let record = sample_record();

        let session_dir = SessionArchive::write(dir.path(), &record).unwrap();
        assert!(session_dir.join("session.json").exists());
        assert!(session_dir.join("transcript.md").exists());

        let json = std::fs::read_to_string(session_dir.join("session.json")).unwrap();
        let parsed: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.task, "Plan the launch");
        assert_eq!(parsed.events.len(), 3);

        let transcript = std::fs::read_to_string(session_dir.join("transcript.md")).unwrap();
        assert!(transcript.contains("**Researcher:** We should start"));
        assert!(transcript.contains("## Final result"));
    }
}
