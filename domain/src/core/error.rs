//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All of these represent invalid run configurations and are detected
/// before any responder is invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Task cannot be empty")]
    EmptyTask,

    #[error("At least one persona is required")]
    NoPersonas,

    #[error("Round budget must be at least 1")]
    ZeroRoundBudget,

    #[error("Duplicate persona role: {0}")]
    DuplicateRole(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::NoPersonas.to_string(),
            "At least one persona is required"
        );
        assert_eq!(
            DomainError::DuplicateRole("Writer".to_string()).to_string(),
            "Duplicate persona role: Writer"
        );
    }
}
