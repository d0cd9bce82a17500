//! CLI entrypoint for krew
//!
//! Wires the layers together with dependency injection: configuration and
//! the chat gateway from the infrastructure layer, the conversation driver
//! from the application layer, and console rendering from the presentation
//! layer.

use anyhow::{Context, Result, bail};
use clap::Parser;
use krew_application::{ConversationLogger, DelegateTaskUseCase, NoConversationLogger};
use krew_domain::{Persona, RunConfig, Task, roster};
use krew_infrastructure::{
    ChatClient, ConfigError, ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiConfig,
    OpenAiGateway, SessionArchive, SessionRecord,
};
use krew_presentation::{Cli, ConsoleFormatter, EventRenderer, OutputFormat};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    if cli.list_personas {
        print_roster();
        return Ok(());
    }

    // Load configuration
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(ConfigError::Load)?
    };

    // Assemble the run configuration
    let task = Task::try_new(cli.task.clone().unwrap_or_default())
        .context("A task is required. Describe what the crew should work on.")?;
    let personas = resolve_team(&cli, &file_config)?;
    let round_budget = cli.rounds.unwrap_or(file_config.run.round_budget);
    let reference_text = read_reference_files(&cli)?;
    let steering_notes = cli.notes.clone().unwrap_or_default();

    let run_config = RunConfig::new(task, personas, round_budget)
        .with_reference_text(reference_text)
        .with_steering_notes(steering_notes);

    // === Dependency Injection ===
    let api_key = std::env::var(&file_config.api.key_env)
        .map_err(|_| ConfigError::MissingApiKey(file_config.api.key_env.clone()))?;

    let mut openai = OpenAiConfig::new(api_key)
        .with_base_url(file_config.api.base_url.clone())
        .with_model(
            cli.model
                .clone()
                .unwrap_or_else(|| file_config.model.name.clone()),
        );
    openai.temperature = file_config.model.temperature;
    openai.max_tokens = file_config.model.max_tokens;
    openai.timeout = Duration::from_secs(file_config.model.timeout_secs);

    let gateway = Arc::new(OpenAiGateway::new(ChatClient::new(openai)?));

    let logger: Box<dyn ConversationLogger> = match &cli.log_file {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(jsonl) => {
                info!("Logging conversation to {}", jsonl.path().display());
                Box::new(jsonl)
            }
            None => Box::new(NoConversationLogger),
        },
        None => Box::new(NoConversationLogger),
    };

    if !cli.quiet {
        print_header(&run_config, gateway.client().model());
    }

    info!(
        team = run_config.personas.len(),
        budget = run_config.round_budget,
        "Deploying crew"
    );

    // Run and consume the event stream
    let use_case = DelegateTaskUseCase::new(gateway);
    let mut stream = use_case.run(run_config.clone())?;

    let mut renderer = EventRenderer::new();
    let mut events = Vec::new();
    let mut failure = None;

    while let Some(item) = stream.next_event().await {
        match item {
            Ok(event) => {
                if !cli.quiet {
                    renderer.render(&event);
                }
                logger.record(&event);
                events.push(event);
            }
            Err(error) => {
                failure = Some(error);
                break;
            }
        }
    }
    renderer.finish();

    if let Some(error) = failure {
        bail!("Run aborted: {error}");
    }
    if !events.iter().any(|e| e.is_terminal()) {
        bail!("Run ended without a final result");
    }

    // Requested output (the live renderer already covered the non-quiet
    // full/final cases)
    match (cli.quiet, cli.output) {
        (true, OutputFormat::Full) => println!("{}", ConsoleFormatter::format_full(&events)),
        (true, OutputFormat::Final) => {
            if let Some(text) = ConsoleFormatter::format_final(&events) {
                println!("{text}");
            }
        }
        (_, OutputFormat::Json) => println!("{}", ConsoleFormatter::format_json(&events)),
        _ => {}
    }

    if let Some(dir) = &cli.export {
        let record = SessionRecord::from_run(&run_config, events);
        let path = SessionArchive::write(dir, &record)?;
        println!("Session archive written to {}", path.display());
    }

    Ok(())
}

/// Resolve the team from CLI flags, then configuration, then the default
/// preset.
fn resolve_team(cli: &Cli, file_config: &FileConfig) -> Result<Vec<Persona>> {
    if !cli.persona.is_empty() {
        return cli
            .persona
            .iter()
            .map(|role| {
                roster::find(role).map(|spec| spec.build()).ok_or_else(|| {
                    anyhow::anyhow!("Unknown persona role '{role}'; see --list-personas")
                })
            })
            .collect();
    }

    if let Some(preset) = &cli.team {
        return roster::team_preset(preset).ok_or_else(|| {
            anyhow::anyhow!("Unknown team preset '{preset}'; see --list-personas")
        });
    }

    let configured = file_config.resolve_team()?;
    if configured.is_empty() {
        Ok(roster::team_preset("default").expect("built-in preset exists"))
    } else {
        Ok(configured)
    }
}

/// Read and concatenate reference documents, one section per file.
fn read_reference_files(cli: &Cli) -> Result<String> {
    let mut sections = Vec::new();
    for path in &cli.reference {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference file {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        sections.push(format!("=== {name} ===\n{content}"));
    }
    Ok(sections.join("\n\n"))
}

fn print_roster() {
    println!("Predefined personas:");
    for spec in roster::PREDEFINED {
        println!("  {:<22} {}", spec.role, spec.expertise);
    }
    println!();
    println!("Team presets:");
    for name in roster::preset_names() {
        let team = roster::team_preset(name).expect("preset exists");
        let roles = team
            .iter()
            .map(|p| p.role().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {name:<10} {roles}");
    }
}

fn print_header(config: &RunConfig, model: &str) {
    let roles = config
        .personas
        .iter()
        .map(|p| p.role().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!();
    println!("Krew - The AI Agent Organization");
    println!("Task:  {}", config.task);
    println!("Team:  {roles}");
    println!("Model: {model} | Round budget: {}", config.round_budget);
}
