//! Infrastructure layer for krew
//!
//! Adapters for the application ports: the OpenAI-compatible chat gateway,
//! configuration loading, the JSONL conversation logger, and the session
//! archive exporter.

pub mod config;
pub mod export;
pub mod logging;
pub mod openai;

pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use export::{SessionArchive, SessionRecord};
pub use logging::JsonlConversationLogger;
pub use openai::{ChatClient, OpenAiConfig, OpenAiError, OpenAiGateway};
