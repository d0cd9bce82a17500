//! OpenAI-compatible chat completion adapter.
//!
//! [`ChatClient`] speaks the `/chat/completions` wire format over HTTPS;
//! [`OpenAiGateway`] binds personas to [`OpenAiResponder`]s on top of one
//! shared client.

pub mod client;
pub mod error;
pub mod responder;

pub use client::{ChatClient, OpenAiConfig};
pub use error::OpenAiError;
pub use responder::{OpenAiGateway, OpenAiResponder};
