//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for completed runs
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full conversation with all replies
    Full,
    /// Only the final synthesized result
    Final,
    /// JSON event stream
    Json,
}

/// CLI arguments for krew
#[derive(Parser, Debug)]
#[command(name = "krew")]
#[command(author, version, about = "Krew - specialized AI agents collaborate on your task")]
#[command(long_about = r#"
Krew runs an organization of AI agent personas against a free-text task.

The run has four phases:
1. Brief: the coordinator issues a team brief
2. Exploration: two round-robin rounds of initial analysis
3. Consensus: the team works toward a conclusion within the round budget
4. Synthesis: the coordinator produces the final result

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./krew.toml       Project-level config
3. ~/.config/krew/config.toml   Global config

Examples:
  krew "Create a comprehensive market analysis for our espresso machines"
  krew --team research --rounds 8 "Summarize the attached study" --reference study.txt
  krew -p "Technical Expert" -p "Quality Assurance" "Review this architecture"
"#)]
pub struct Cli {
    /// The task for the crew
    pub task: Option<String>,

    /// Personas from the predefined catalog (can be given multiple times)
    #[arg(short, long, value_name = "ROLE")]
    pub persona: Vec<String>,

    /// Team preset: default, research, or business
    #[arg(short, long, value_name = "PRESET")]
    pub team: Option<String>,

    /// Total turn budget across exploration and consensus
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Reference document(s) to share with the crew (plain text)
    #[arg(long, value_name = "PATH")]
    pub reference: Vec<PathBuf>,

    /// Additional steering notes for the crew
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,

    /// Chat model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "final")]
    pub output: OutputFormat,

    /// Write a session archive under this directory after the run
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Append each driver event to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// List the predefined personas and team presets, then exit
    #[arg(long)]
    pub list_personas: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress live rendering; only print the requested output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_invocation() {
        let cli = Cli::parse_from(["krew", "Plan the launch"]);
        assert_eq!(cli.task.as_deref(), Some("Plan the launch"));
        assert!(cli.persona.is_empty());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parses_repeated_personas_and_rounds() {
        let cli = Cli::parse_from([
            "krew",
            "-p",
            "Technical Expert",
            "-p",
            "Quality Assurance",
            "--rounds",
            "8",
            "task text",
        ]);
        assert_eq!(cli.persona.len(), 2);
        assert_eq!(cli.rounds, Some(8));
    }

    #[test]
    fn test_list_personas_needs_no_task() {
        let cli = Cli::parse_from(["krew", "--list-personas"]);
        assert!(cli.list_personas);
        assert!(cli.task.is_none());
    }
}
