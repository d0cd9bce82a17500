//! Responder port
//!
//! A responder is the capability behind one persona: given a prompt, the
//! shared context, and the reference documents, it produces a reply string.
//! Implementations (adapters) live in the infrastructure layer, typically
//! backed by a hosted chat-completion API.

use async_trait::async_trait;
use krew_domain::Persona;
use std::sync::Arc;
use thiserror::Error;

/// Errors from a single responder invocation.
///
/// The driver never retries these; callers needing retries must wrap the
/// responder implementation itself.
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// The capability bound to one persona.
///
/// Responders hold no conversation state of their own; everything they know
/// about the run arrives through the `context` and `reference_text`
/// arguments of each invocation.
#[async_trait]
pub trait Responder: Send + Sync {
    /// The persona this responder speaks as.
    fn persona(&self) -> &Persona;

    /// Produce a reply to `prompt`.
    ///
    /// `context` is the shared transcript so far; `reference_text` is the
    /// pre-concatenated reference documents. Either may be empty.
    async fn invoke(
        &self,
        prompt: &str,
        context: &str,
        reference_text: &str,
    ) -> Result<String, ResponderError>;
}

/// Factory binding personas to responders for one run.
///
/// The driver asks for one responder per configured persona plus one for
/// the coordinator; each run gets fresh responders.
pub trait ResponderGateway: Send + Sync {
    fn responder(&self, persona: &Persona) -> Arc<dyn Responder>;
}
