//! Persona-bound responders on top of the chat client.

use crate::openai::client::ChatClient;
use crate::openai::error::OpenAiError;
use async_trait::async_trait;
use krew_application::ports::responder::{Responder, ResponderError, ResponderGateway};
use krew_domain::{Persona, PromptTemplate, string};
use std::sync::Arc;

/// Bytes of reference text quoted in a responder's system prompt.
const REFERENCE_WINDOW_BYTES: usize = 3000;
/// Trailing bytes of shared context quoted in a responder's system prompt.
const CONTEXT_WINDOW_BYTES: usize = 2000;

/// A [`Responder`] that answers as one persona through the chat API.
pub struct OpenAiResponder {
    client: Arc<ChatClient>,
    persona: Persona,
}

impl OpenAiResponder {
    pub fn new(client: Arc<ChatClient>, persona: Persona) -> Self {
        Self { client, persona }
    }

    /// Assemble the system prompt: persona identity, then bounded windows
    /// of the reference documents and the shared context.
    fn system_prompt(&self, context: &str, reference_text: &str) -> String {
        let mut system = PromptTemplate::persona_system(&self.persona);
        if !reference_text.is_empty() {
            system.push_str(&format!(
                "\nFile content:\n{}...",
                string::head(reference_text, REFERENCE_WINDOW_BYTES)
            ));
        }
        if !context.is_empty() {
            system.push_str(&format!(
                "\nContext:\n{}",
                string::tail(context, CONTEXT_WINDOW_BYTES)
            ));
        }
        system
    }
}

#[async_trait]
impl Responder for OpenAiResponder {
    fn persona(&self) -> &Persona {
        &self.persona
    }

    async fn invoke(
        &self,
        prompt: &str,
        context: &str,
        reference_text: &str,
    ) -> Result<String, ResponderError> {
        let system = self.system_prompt(context, reference_text);
        let reply = self.client.chat(&system, prompt).await.map_err(map_error)?;
        if reply.is_empty() {
            return Err(ResponderError::MalformedReply(
                "empty completion text".to_string(),
            ));
        }
        Ok(reply)
    }
}

fn map_error(error: OpenAiError) -> ResponderError {
    match error {
        OpenAiError::Http(e) if e.is_timeout() => ResponderError::Timeout,
        OpenAiError::Http(e) if e.is_connect() => ResponderError::Unavailable(e.to_string()),
        OpenAiError::Http(e) => ResponderError::RequestFailed(e.to_string()),
        OpenAiError::Api { status, message } => {
            ResponderError::RequestFailed(format!("status {status}: {message}"))
        }
        OpenAiError::EmptyCompletion => {
            ResponderError::MalformedReply("completion contained no choices".to_string())
        }
    }
}

/// Gateway creating one [`OpenAiResponder`] per persona over a shared client.
pub struct OpenAiGateway {
    client: Arc<ChatClient>,
}

impl OpenAiGateway {
    pub fn new(client: ChatClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn client(&self) -> &Arc<ChatClient> {
        &self.client
    }
}

impl ResponderGateway for OpenAiGateway {
    fn responder(&self, persona: &Persona) -> Arc<dyn Responder> {
        Arc::new(OpenAiResponder::new(
            Arc::clone(&self.client),
            persona.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::client::OpenAiConfig;

    fn responder() -> OpenAiResponder {
        let client = ChatClient::new(OpenAiConfig::new("sk-test")).unwrap();
        OpenAiResponder::new(
            Arc::new(client),
            Persona::new("Researcher", "Find facts", "Research"),
        )
    }

    #[test]
    fn test_system_prompt_without_attachments() {
        let system = responder().system_prompt("", "");
        assert!(system.starts_with("You are a Researcher"));
        assert!(!system.contains("File content:"));
        assert!(!system.contains("Context:"));
    }

    #[test]
    fn test_system_prompt_windows_are_bounded() {
        let reference = "r".repeat(10_000);
        let context = "c".repeat(10_000);
        let system = responder().system_prompt(&context, &reference);

        assert!(system.contains("File content:"));
        assert!(system.contains("Context:"));
        // Identity + 3000-byte reference window + 2000-byte context window
        assert!(system.len() < 5600);
    }

    #[test]
    fn test_context_window_keeps_the_tail() {
        let context = format!("{}END", "x".repeat(5000));
        let system = responder().system_prompt(&context, "");
        assert!(system.ends_with("END"));
    }

    #[test]
    fn test_gateway_binds_personas() {
        let client = ChatClient::new(OpenAiConfig::new("sk-test")).unwrap();
        let gateway = OpenAiGateway::new(client);
        let persona = Persona::new("Writer", "Write", "Writing");
        let responder = gateway.responder(&persona);
        assert_eq!(responder.persona().role(), "Writer");
    }
}
