//! Ports (interfaces) consumed by the application layer.

pub mod conversation_logger;
pub mod responder;
