//! Prompt construction for the crew conversation.

pub mod template;

pub use template::{
    BRIEF_REFERENCE_PREVIEW_BYTES, CONSENSUS_CONTEXT_BYTES, EXPLORATION_CONTEXT_BYTES,
    PromptTemplate, SYNTHESIS_CONTEXT_BYTES,
};
