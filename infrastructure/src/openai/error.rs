//! Error types for the chat completion adapter

use thiserror::Error;

/// Errors from the chat completion backend
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Completion contained no choices")]
    EmptyCompletion,
}
