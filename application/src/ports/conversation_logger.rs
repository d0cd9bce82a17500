//! Port for structured conversation logging.
//!
//! Separate from `tracing`-based diagnostics: tracing carries operational
//! messages, while this port captures the driver's event stream in a
//! machine-readable form (one record per event).

use krew_domain::RunEvent;

/// Port for recording driver events to a structured log.
///
/// `record` is intentionally synchronous and non-fallible so logging can
/// never disturb the run; implementations swallow their own I/O errors.
pub trait ConversationLogger: Send + Sync {
    fn record(&self, event: &RunEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn record(&self, _event: &RunEvent) {}
}
