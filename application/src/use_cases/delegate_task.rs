//! Delegate task use case
//!
//! The conversation driver: sequences a bounded number of turns across the
//! brief → exploration → consensus → synthesis phases, maintains the shared
//! transcript, detects the early-termination marker, and narrates progress
//! as an ordered stream of [`RunEvent`]s.

use crate::ports::responder::{Responder, ResponderError, ResponderGateway};
use futures::Stream;
use krew_domain::prompt::{
    CONSENSUS_CONTEXT_BYTES, EXPLORATION_CONTEXT_BYTES, SYNTHESIS_CONTEXT_BYTES,
};
use krew_domain::{
    DomainError, EventKind, MIN_EXPLORATION_ROUNDS, Persona, Phase, PromptTemplate, RunConfig,
    RunEvent, Transcript, extract_final_answer,
};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Buffered events between the driver task and the consumer.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Errors that can end a delegation run
#[derive(Error, Debug)]
pub enum DelegateTaskError {
    /// Invalid run configuration, detected before any responder call
    #[error("Invalid run configuration: {0}")]
    Configuration(#[from] DomainError),

    /// A responder invocation failed; never retried
    #[error("{persona} failed to respond: {source}")]
    Responder {
        persona: String,
        #[source]
        source: ResponderError,
    },
}

/// Use case for running one crew delegation
pub struct DelegateTaskUseCase<G: ResponderGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ResponderGateway + 'static> DelegateTaskUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Start a run and return its event stream.
    ///
    /// Validates the configuration before creating or invoking any
    /// responder. The returned stream is finite and not restartable: it
    /// yields events in phase order, ends after a `FinalResult` event on
    /// success, and ends with an error item (and no `FinalResult`) when a
    /// responder fails. Dropping the stream cancels the run at the next
    /// emission point; an in-flight responder call finishes on its own and
    /// its reply is discarded.
    pub fn run(&self, config: RunConfig) -> Result<EventStream, DelegateTaskError> {
        config.validate()?;

        let responders: Vec<Arc<dyn Responder>> = config
            .personas
            .iter()
            .map(|persona| self.gateway.responder(persona))
            .collect();
        let synthesizer = self.gateway.responder(&Persona::coordinator());

        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        tokio::spawn(async move {
            let emitter = Emitter::new(tx);
            // Err means the consumer dropped the stream; nothing to do
            let _ = drive(config, responders, synthesizer, emitter).await;
        });

        Ok(EventStream { receiver: rx })
    }
}

/// Finite, forward-only sequence of driver events.
///
/// One per run; a fresh [`DelegateTaskUseCase::run`] call is needed to run
/// again.
pub struct EventStream {
    receiver: mpsc::Receiver<Result<RunEvent, DelegateTaskError>>,
}

impl EventStream {
    /// Receive the next event, or `None` once the run has ended.
    pub async fn next_event(&mut self) -> Option<Result<RunEvent, DelegateTaskError>> {
        self.receiver.recv().await
    }

    /// Drain the stream, returning all events plus the terminating error,
    /// if any.
    pub async fn collect_run(mut self) -> (Vec<RunEvent>, Option<DelegateTaskError>) {
        let mut events = Vec::new();
        while let Some(item) = self.receiver.recv().await {
            match item {
                Ok(event) => events.push(event),
                Err(error) => return (events, Some(error)),
            }
        }
        (events, None)
    }
}

impl Stream for EventStream {
    type Item = Result<RunEvent, DelegateTaskError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

/// Sent ordinals and the outbound channel, in one place so ordinals stay
/// strictly increasing no matter which phase emits.
struct Emitter {
    tx: mpsc::Sender<Result<RunEvent, DelegateTaskError>>,
    next_ordinal: u64,
}

/// The consumer dropped the stream; the run stops quietly.
struct Abandoned;

impl Emitter {
    fn new(tx: mpsc::Sender<Result<RunEvent, DelegateTaskError>>) -> Self {
        Self { tx, next_ordinal: 0 }
    }

    async fn emit(
        &mut self,
        kind: EventKind,
        phase: Phase,
        speaker: &str,
        text: impl Into<String>,
    ) -> Result<(), Abandoned> {
        let event = RunEvent::new(self.next_ordinal, kind, phase, speaker, text);
        self.send(event).await
    }

    async fn emit_with_answer(
        &mut self,
        kind: EventKind,
        phase: Phase,
        speaker: &str,
        text: impl Into<String>,
        answer: String,
    ) -> Result<(), Abandoned> {
        let event =
            RunEvent::new(self.next_ordinal, kind, phase, speaker, text).with_final_answer(answer);
        self.send(event).await
    }

    async fn send(&mut self, event: RunEvent) -> Result<(), Abandoned> {
        self.next_ordinal += 1;
        self.tx.send(Ok(event)).await.map_err(|_| Abandoned)
    }

    /// Report a responder failure and end the stream.
    async fn fail(&mut self, persona: &str, source: ResponderError) -> Result<(), Abandoned> {
        warn!(persona, error = %source, "Responder failed; aborting run");
        let _ = self
            .tx
            .send(Err(DelegateTaskError::Responder {
                persona: persona.to_string(),
                source,
            }))
            .await;
        Ok(())
    }
}

async fn drive(
    config: RunConfig,
    responders: Vec<Arc<dyn Responder>>,
    synthesizer: Arc<dyn Responder>,
    mut emitter: Emitter,
) -> Result<(), Abandoned> {
    let coordinator = synthesizer.persona().role().to_string();
    let task = config.task.content().to_string();

    info!(personas = responders.len(), budget = config.round_budget, "Starting crew run");

    // === Brief ===
    emitter
        .emit(
            EventKind::PhaseStart,
            Phase::Brief,
            &coordinator,
            format!("New mission: {task}"),
        )
        .await?;

    let brief = PromptTemplate::team_brief(
        &task,
        &config.personas,
        &config.reference_text,
        &config.steering_notes,
    );
    let mut transcript = Transcript::from_brief(coordinator.as_str(), brief);

    emitter
        .emit(EventKind::BriefIssued, Phase::Brief, &coordinator, "Team brief issued")
        .await?;

    // === Exploration ===
    emitter
        .emit(
            EventKind::PhaseStart,
            Phase::Exploration,
            &coordinator,
            format!("Round-robin collaboration with {} agents", responders.len()),
        )
        .await?;

    for round in 0..MIN_EXPLORATION_ROUNDS {
        info!(round = round + 1, "Exploration round");
        for responder in &responders {
            let persona = responder.persona().clone();
            let role = persona.role();

            emitter
                .emit(
                    EventKind::Thinking,
                    Phase::Exploration,
                    role,
                    format!("{role} is preparing a response"),
                )
                .await?;

            let window = transcript.tail(EXPLORATION_CONTEXT_BYTES);
            let prompt = if round == 0 {
                PromptTemplate::initial_analysis(window, &persona)
            } else {
                PromptTemplate::building_round(round, window, &persona)
            };
            debug!(role, prompt_bytes = prompt.len(), "Exploration turn");

            let reply = match responder
                .invoke(&prompt, transcript.shared(), &config.reference_text)
                .await
            {
                Ok(reply) => reply,
                Err(source) => return emitter.fail(role, source).await,
            };

            transcript.record(role, Phase::Exploration, Some(round), &reply);
            emitter
                .emit(EventKind::AgentReply, Phase::Exploration, role, reply)
                .await?;
        }
    }

    // === Consensus ===
    emitter
        .emit(EventKind::PhaseStart, Phase::Consensus, &coordinator, "Consensus phase")
        .await?;

    let budget = config.consensus_budget();
    for turn in 0..budget {
        let responder = &responders[turn % responders.len()];
        let persona = responder.persona().clone();
        let role = persona.role();

        emitter
            .emit(
                EventKind::Thinking,
                Phase::Consensus,
                role,
                format!("{role} is working toward consensus"),
            )
            .await?;

        let prompt = PromptTemplate::consensus_building(transcript.tail(CONSENSUS_CONTEXT_BYTES));
        debug!(role, turn, prompt_bytes = prompt.len(), "Consensus turn");

        let reply = match responder
            .invoke(&prompt, transcript.shared(), &config.reference_text)
            .await
        {
            Ok(reply) => reply,
            Err(source) => return emitter.fail(role, source).await,
        };

        transcript.record(role, Phase::Consensus, None, &reply);
        emitter
            .emit(EventKind::AgentReply, Phase::Consensus, role, reply.clone())
            .await?;

        if let Some(answer) = extract_final_answer(&reply) {
            info!(turn, "Consensus reached early");
            emitter
                .emit_with_answer(
                    EventKind::ConsensusReached,
                    Phase::Consensus,
                    role,
                    "Final solution synthesized",
                    answer,
                )
                .await?;
            break;
        }
    }

    // === Synthesis ===
    emitter
        .emit(
            EventKind::PhaseStart,
            Phase::Synthesis,
            &coordinator,
            "Final review and synthesis",
        )
        .await?;

    let prompt =
        PromptTemplate::executive_synthesis(&task, transcript.tail(SYNTHESIS_CONTEXT_BYTES));
    let final_text = match synthesizer
        .invoke(&prompt, transcript.shared(), &config.reference_text)
        .await
    {
        Ok(reply) => reply,
        Err(source) => return emitter.fail(&coordinator, source).await,
    };

    emitter
        .emit(EventKind::FinalResult, Phase::Synthesis, &coordinator, final_text)
        .await?;

    info!("Crew run complete");
    Ok(())
}
