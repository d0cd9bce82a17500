//! Early-termination marker detection.
//!
//! Consensus-phase prompts instruct personas to conclude with a literal
//! marker followed by their complete answer. Detection is a plain substring
//! match on the reply text: a reply that merely mentions the marker also
//! terminates the consensus loop, and callers depend on exactly that
//! matching, so it must not be tightened.

/// The literal marker a persona emits to conclude the consensus phase.
pub const FINAL_ANSWER_MARKER: &str = "FINAL_ANSWER:";

/// Extract the final answer from a consensus reply.
///
/// Returns the text strictly after the first occurrence of
/// [`FINAL_ANSWER_MARKER`], trimmed of surrounding whitespace, or `None`
/// when the reply does not contain the marker.
pub fn extract_final_answer(reply: &str) -> Option<String> {
    reply
        .find(FINAL_ANSWER_MARKER)
        .map(|at| reply[at + FINAL_ANSWER_MARKER.len()..].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_marker() {
        assert_eq!(extract_final_answer("still thinking"), None);
    }

    #[test]
    fn test_extracts_after_first_occurrence() {
        let reply = "... FINAL_ANSWER: Ship the v1 report.";
        assert_eq!(
            extract_final_answer(reply),
            Some("Ship the v1 report.".to_string())
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            extract_final_answer("FINAL_ANSWER:\n  Done.  \n"),
            Some("Done.".to_string())
        );
    }

    #[test]
    fn test_first_occurrence_wins() {
        let reply = "FINAL_ANSWER: one FINAL_ANSWER: two";
        assert_eq!(
            extract_final_answer(reply),
            Some("one FINAL_ANSWER: two".to_string())
        );
    }

    #[test]
    fn test_marker_anywhere_in_reply_matches() {
        // A reply discussing the marker still counts as concluding.
        let reply = "We should end with FINAL_ANSWER: once we agree.";
        assert_eq!(
            extract_final_answer(reply),
            Some("once we agree.".to_string())
        );
    }

    #[test]
    fn test_marker_with_nothing_after() {
        assert_eq!(extract_final_answer("FINAL_ANSWER:"), Some(String::new()));
    }
}
