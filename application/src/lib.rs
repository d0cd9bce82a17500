//! Application layer for krew
//!
//! Contains the conversation driver use case and the ports it depends on.
//! Adapters for the ports live in the infrastructure layer; rendering of
//! the emitted events lives in the presentation layer.

pub mod ports;
pub mod use_cases;

pub use ports::conversation_logger::{ConversationLogger, NoConversationLogger};
pub use ports::responder::{Responder, ResponderError, ResponderGateway};
pub use use_cases::delegate_task::{DelegateTaskError, DelegateTaskUseCase, EventStream};
