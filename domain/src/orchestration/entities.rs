//! Run configuration and phase sequence

use crate::core::error::DomainError;
use crate::core::task::Task;
use crate::persona::entities::Persona;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of full round-robin exploration rounds before consensus begins.
pub const MIN_EXPLORATION_ROUNDS: usize = 2;

/// Phase of a crew run
///
/// Phases execute in declaration order with no branching back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The coordinator announces the task and issues the team brief
    Brief,
    /// Fixed round-robin rounds of initial analysis
    Exploration,
    /// Personas work toward a conclusion until the budget or the marker
    Consensus,
    /// The coordinator produces the final result
    Synthesis,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Brief => "brief",
            Phase::Exploration => "exploration",
            Phase::Consensus => "consensus",
            Phase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Brief => "Team Brief",
            Phase::Exploration => "Exploration",
            Phase::Consensus => "Consensus",
            Phase::Synthesis => "Synthesis",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configuration for a single crew run (Entity)
///
/// Supplied once at run start and immutable for the run's duration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The task the crew works on
    pub task: Task,
    /// Ordered team; turn order follows this list
    pub personas: Vec<Persona>,
    /// Total turn budget across exploration and consensus
    pub round_budget: usize,
    /// Pre-concatenated reference documents; empty when none supplied
    pub reference_text: String,
    /// Free-text steering notes from the user; empty when none supplied
    pub steering_notes: String,
}

impl RunConfig {
    pub fn new(task: Task, personas: Vec<Persona>, round_budget: usize) -> Self {
        Self {
            task,
            personas,
            round_budget,
            reference_text: String::new(),
            steering_notes: String::new(),
        }
    }

    pub fn with_reference_text(mut self, reference_text: impl Into<String>) -> Self {
        self.reference_text = reference_text.into();
        self
    }

    pub fn with_steering_notes(mut self, steering_notes: impl Into<String>) -> Self {
        self.steering_notes = steering_notes.into();
        self
    }

    /// Validate the configuration.
    ///
    /// Called by the driver before any responder is created or invoked.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.personas.is_empty() {
            return Err(DomainError::NoPersonas);
        }
        if self.round_budget == 0 {
            return Err(DomainError::ZeroRoundBudget);
        }
        let mut seen = HashSet::new();
        for persona in &self.personas {
            if !seen.insert(persona.role()) {
                return Err(DomainError::DuplicateRole(persona.role().to_string()));
            }
        }
        Ok(())
    }

    /// Turns consumed by the exploration phase.
    pub fn exploration_turns(&self) -> usize {
        MIN_EXPLORATION_ROUNDS * self.personas.len()
    }

    /// Turns available to the consensus phase. Always at least 1, even when
    /// exploration alone exceeds the budget.
    pub fn consensus_budget(&self) -> usize {
        self.round_budget.saturating_sub(self.exploration_turns()).max(1)
    }

    /// Upper bound on responder invocations for this configuration,
    /// including the trailing synthesis call.
    pub fn max_responder_calls(&self) -> usize {
        self.exploration_turns() + self.consensus_budget() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crew(n: usize) -> Vec<Persona> {
        (0..n)
            .map(|i| Persona::new(format!("Agent {i}"), "goal", "skill"))
            .collect()
    }

    #[test]
    fn test_validate_rejects_empty_team() {
        let config = RunConfig::new(Task::new("t"), vec![], 5);
        assert_eq!(config.validate(), Err(DomainError::NoPersonas));
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        let config = RunConfig::new(Task::new("t"), crew(2), 0);
        assert_eq!(config.validate(), Err(DomainError::ZeroRoundBudget));
    }

    #[test]
    fn test_validate_rejects_duplicate_roles() {
        let personas = vec![
            Persona::new("Writer", "a", ""),
            Persona::new("Writer", "b", ""),
        ];
        let config = RunConfig::new(Task::new("t"), personas, 5);
        assert_eq!(
            config.validate(),
            Err(DomainError::DuplicateRole("Writer".to_string()))
        );
    }

    #[test]
    fn test_turn_arithmetic() {
        // 2 personas, budget 5: exploration 4, consensus max(5-4, 1) = 1
        let config = RunConfig::new(Task::new("t"), crew(2), 5);
        assert_eq!(config.exploration_turns(), 4);
        assert_eq!(config.consensus_budget(), 1);
        assert_eq!(config.max_responder_calls(), 6);
    }

    #[test]
    fn test_consensus_budget_floor() {
        // Budget below the exploration cost still leaves one consensus turn
        let config = RunConfig::new(Task::new("t"), crew(3), 1);
        assert_eq!(config.exploration_turns(), 6);
        assert_eq!(config.consensus_budget(), 1);
        assert_eq!(config.max_responder_calls(), 8);
    }

    #[test]
    fn test_large_budget() {
        let config = RunConfig::new(Task::new("t"), crew(2), 12);
        assert_eq!(config.consensus_budget(), 8);
        assert_eq!(config.max_responder_calls(), 13);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::Exploration.as_str(), "exploration");
        assert_eq!(Phase::Synthesis.to_string(), "Synthesis");
    }
}
