//! Persona entity and identifier

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PERSONA_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, stable identifier for a persona, generated at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaId(String);

impl PersonaId {
    /// Generate a fresh process-unique identifier.
    pub fn generate() -> Self {
        let n = NEXT_PERSONA_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("persona-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An agent persona participating in a crew run (Entity)
///
/// Immutable once a run starts. The role is the display name and must be
/// unique within a run; the goal and expertise shape the persona's system
/// prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    id: PersonaId,
    role: String,
    goal: String,
    expertise: String,
}

impl Persona {
    /// Create a persona with a freshly generated identifier.
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        expertise: impl Into<String>,
    ) -> Self {
        Self {
            id: PersonaId::generate(),
            role: role.into(),
            goal: goal.into(),
            expertise: expertise.into(),
        }
    }

    /// The fixed coordinator persona that issues the brief and synthesizes
    /// the final result. Never part of the configured team.
    pub fn coordinator() -> Self {
        Self::new(
            "Coordinator",
            "Orchestrate team collaboration and synthesize final results",
            "Management, Planning, QA",
        )
    }

    pub fn id(&self) -> &PersonaId {
        &self.id
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Expertise tag; may be empty.
    pub fn expertise(&self) -> &str {
        &self.expertise
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_ids_are_unique() {
        let a = Persona::new("Researcher", "Research things", "Research");
        let b = Persona::new("Researcher", "Research things", "Research");
        assert_ne!(a.id(), b.id());
        assert!(a.id().as_str().starts_with("persona-"));
    }

    #[test]
    fn test_coordinator_identity() {
        let c = Persona::coordinator();
        assert_eq!(c.role(), "Coordinator");
        assert!(!c.goal().is_empty());
    }

    #[test]
    fn test_display_is_role() {
        let p = Persona::new("Writer", "Write well", "Writing");
        assert_eq!(p.to_string(), "Writer");
    }
}
