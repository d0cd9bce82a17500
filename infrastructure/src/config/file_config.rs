//! Raw TOML configuration data types
//!
//! These structs mirror the structure of `krew.toml`. They are deserialized
//! directly and resolved into domain values at the wiring edge.

use crate::config::ConfigError;
use krew_domain::{Persona, roster};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// API endpoint settings
    pub api: FileApiConfig,
    /// Chat model settings
    pub model: FileModelConfig,
    /// Run settings
    pub run: FileRunConfig,
    /// Default team; empty means the built-in default preset
    pub team: Vec<FileTeamMember>,
}

impl FileConfig {
    /// Resolve the configured team into personas.
    ///
    /// Members naming a predefined role inherit its goal and expertise;
    /// a member with an explicit goal defines an ad-hoc persona.
    pub fn resolve_team(&self) -> Result<Vec<Persona>, ConfigError> {
        self.team
            .iter()
            .map(FileTeamMember::resolve)
            .collect()
    }
}

/// `[api]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub key_env: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// `[model]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    pub name: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 1500,
            timeout_secs: 60,
        }
    }
}

/// `[run]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRunConfig {
    /// Total turn budget across exploration and consensus
    pub round_budget: usize,
}

impl Default for FileRunConfig {
    fn default() -> Self {
        Self { round_budget: 12 }
    }
}

/// One `[[team]]` entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTeamMember {
    pub role: String,
    pub goal: Option<String>,
    pub expertise: Option<String>,
}

impl FileTeamMember {
    fn resolve(&self) -> Result<Persona, ConfigError> {
        if let Some(goal) = &self.goal {
            return Ok(Persona::new(
                &self.role,
                goal,
                self.expertise.clone().unwrap_or_default(),
            ));
        }
        match roster::find(&self.role) {
            Some(spec) => Ok(Persona::new(
                &self.role,
                spec.goal,
                self.expertise
                    .clone()
                    .unwrap_or_else(|| spec.expertise.to_string()),
            )),
            None => Err(ConfigError::UnknownRole(self.role.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.api.base_url, "https://api.openai.com/v1");
        assert_eq!(config.api.key_env, "OPENAI_API_KEY");
        assert_eq!(config.model.name, "gpt-4o-mini");
        assert_eq!(config.run.round_budget, 12);
        assert!(config.team.is_empty());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [model]
            name = "gpt-4o"

            [run]
            round_budget = 8

            [[team]]
            role = "Research Specialist"

            [[team]]
            role = "Pit Crew Chief"
            goal = "Keep the process on track"
            expertise = "Operations"
            "#,
        )
        .unwrap();

        assert_eq!(config.model.name, "gpt-4o");
        // Untouched sections keep their defaults
        assert_eq!(config.model.max_tokens, 1500);
        assert_eq!(config.run.round_budget, 8);

        let team = config.resolve_team().unwrap();
        assert_eq!(team.len(), 2);
        assert_eq!(team[0].expertise(), "Research, Analysis, Fact-checking");
        assert_eq!(team[1].goal(), "Keep the process on track");
    }

    #[test]
    fn test_unknown_role_without_goal_is_rejected() {
        let config: FileConfig = toml::from_str(
            r#"
            [[team]]
            role = "Sous Chef"
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.resolve_team(),
            Err(ConfigError::UnknownRole(role)) if role == "Sous Chef"
        ));
    }
}
