//! Configuration loading and file format.

pub mod file_config;
pub mod loader;

pub use file_config::{FileApiConfig, FileConfig, FileModelConfig, FileRunConfig, FileTeamMember};
pub use loader::ConfigLoader;

use thiserror::Error;

/// Errors resolving a loaded configuration into domain values
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Unknown persona role '{0}' and no goal given to define it")]
    UnknownRole(String),

    #[error("API key environment variable {0} is not set")]
    MissingApiKey(String),
}
