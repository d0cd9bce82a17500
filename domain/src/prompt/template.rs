//! Prompt templates for each stage of a crew run.
//!
//! Each turn prompt embeds a bounded trailing window of the shared
//! transcript; the window sizes are fixed per phase and the caller slices
//! the transcript before formatting.

use crate::core::string;
use crate::persona::entities::Persona;

/// Bytes of reference text quoted in the team brief.
pub const BRIEF_REFERENCE_PREVIEW_BYTES: usize = 500;
/// Transcript window for exploration-phase prompts.
pub const EXPLORATION_CONTEXT_BYTES: usize = 2500;
/// Transcript window for consensus-phase prompts.
pub const CONSENSUS_CONTEXT_BYTES: usize = 3000;
/// Transcript window for the synthesis prompt.
pub const SYNTHESIS_CONTEXT_BYTES: usize = 3500;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// The team brief that seeds the shared transcript.
    pub fn team_brief(
        task: &str,
        personas: &[Persona],
        reference_text: &str,
        steering_notes: &str,
    ) -> String {
        let team = personas
            .iter()
            .map(|p| format!("- {}: {}", p.role(), p.expertise()))
            .collect::<Vec<_>>()
            .join("\n");

        let mut brief = format!("TEAM BRIEF\nOBJECTIVE: {task}\nTEAM:\n{team}\n");

        if !reference_text.is_empty() {
            brief.push_str(&format!(
                "\nFILES PREVIEW:\n{}...\n",
                string::head(reference_text, BRIEF_REFERENCE_PREVIEW_BYTES)
            ));
        }
        if !steering_notes.is_empty() {
            brief.push_str(&format!("\nUSER NOTES:\n{steering_notes}\n"));
        }

        brief.push_str("\nSTANDARDS: specific, actionable, collaborative, comprehensive.\n");
        brief
    }

    /// First exploration round: state an initial assessment.
    pub fn initial_analysis(transcript_tail: &str, persona: &Persona) -> String {
        format!(
            "INITIAL ANALYSIS\n{}\nYour role: {} ({}). Provide a first assessment, \
             open questions, and initial recommendations. Do not finalize.",
            transcript_tail,
            persona.role(),
            persona.expertise()
        )
    }

    /// Later exploration rounds: build on the others without concluding.
    pub fn building_round(round: usize, transcript_tail: &str, persona: &Persona) -> String {
        format!(
            "BUILDING PHASE (Round {})\n{}\nYour role: {}. Build on the other \
             contributions, refine or challenge them, and add concrete next steps. \
             Do not conclude yet.",
            round + 1,
            transcript_tail,
            persona.role()
        )
    }

    /// Consensus turns: synthesize, and conclude with the marker when ready.
    pub fn consensus_building(transcript_tail: &str) -> String {
        format!(
            "CONSENSUS BUILDING\n{transcript_tail}\nSynthesize all inputs. If ready, \
             conclude with 'FINAL_ANSWER: ...' that addresses the original task \
             comprehensively with actionable steps."
        )
    }

    /// The coordinator's closing synthesis prompt.
    pub fn executive_synthesis(task: &str, transcript_tail: &str) -> String {
        format!("EXECUTIVE SYNTHESIS\nOriginal Task: {task}\nTeam Output:\n{transcript_tail}")
    }

    /// System prompt establishing a persona's identity for its responder.
    pub fn persona_system(persona: &Persona) -> String {
        format!(
            "You are a {} with expertise in {}.\nPrimary goal: {}\n\
             - Stay in character\n\
             - Provide detailed, actionable insights\n\
             - Reference the supplied documents when relevant\n\
             - Build on other team members\n\
             - Avoid generic responses\n",
            persona.role(),
            persona.expertise(),
            persona.goal()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn researcher() -> Persona {
        Persona::new("Researcher", "Find facts", "Research")
    }

    #[test]
    fn test_brief_lists_team_and_objective() {
        let team = vec![researcher(), Persona::new("Writer", "Write", "Writing")];
        let brief = PromptTemplate::team_brief("Plan the launch", &team, "", "");
        assert!(brief.contains("OBJECTIVE: Plan the launch"));
        assert!(brief.contains("- Researcher: Research"));
        assert!(brief.contains("- Writer: Writing"));
        assert!(!brief.contains("FILES PREVIEW"));
        assert!(!brief.contains("USER NOTES"));
    }

    #[test]
    fn test_brief_previews_reference_text() {
        let long = "x".repeat(2000);
        let brief = PromptTemplate::team_brief("t", &[researcher()], &long, "keep it short");
        // Preview is capped, the full document is not quoted
        assert!(brief.len() < 1200);
        assert!(brief.contains("FILES PREVIEW"));
        assert!(brief.contains("USER NOTES:\nkeep it short"));
    }

    #[test]
    fn test_round_prompts_address_the_persona() {
        let p = researcher();
        let initial = PromptTemplate::initial_analysis("history", &p);
        assert!(initial.starts_with("INITIAL ANALYSIS"));
        assert!(initial.contains("Your role: Researcher (Research)"));

        let building = PromptTemplate::building_round(1, "history", &p);
        assert!(building.contains("Round 2"));
        assert!(building.contains("Do not conclude yet"));
    }

    #[test]
    fn test_consensus_prompt_names_the_marker() {
        let prompt = PromptTemplate::consensus_building("history");
        assert!(prompt.contains("FINAL_ANSWER:"));
    }

    #[test]
    fn test_synthesis_prompt_carries_task_and_output() {
        let prompt = PromptTemplate::executive_synthesis("the task", "the output");
        assert!(prompt.contains("Original Task: the task"));
        assert!(prompt.contains("Team Output:\nthe output"));
    }

    #[test]
    fn test_persona_system_prompt() {
        let system = PromptTemplate::persona_system(&researcher());
        assert!(system.starts_with("You are a Researcher with expertise in Research."));
        assert!(system.contains("Primary goal: Find facts"));
    }
}
