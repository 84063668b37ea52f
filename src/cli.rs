use std::path::PathBuf;

use thiserror::Error;

use crate::DEFAULT_OUTPUT_DIR;

pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, clap::Parser)]
#[command(about = "Generates the snow-themed landing page illustrations")]
pub struct Cli {
    /// Gemini API key. Read from GEMINI_API_KEY if not given
    #[arg(short, long)]
    pub api_key: Option<String>,

    /// Only generate the image with this filename
    #[arg(short, long)]
    pub single: Option<String>,

    /// Print the available image filenames and exit
    #[arg(short, long)]
    pub list: bool,

    /// Directory the generated images are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,
}

/// Errors that abort the run before any request is made
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "No API key given. Pass --api-key <key> or set the {API_KEY_ENV_VAR} environment variable"
    )]
    MissingApiKey,

    #[error("Unknown image filename: {name}\n\nAvailable images:\n{available}")]
    UnknownFilename { name: String, available: String },
}

impl Cli {
    /// The flag wins over the environment variable
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        resolve_api_key(
            self.api_key.as_deref(),
            std::env::var(API_KEY_ENV_VAR).ok(),
        )
    }
}

fn resolve_api_key(flag: Option<&str>, env: Option<String>) -> Result<String, ConfigError> {
    flag.map(str::to_string)
        .or(env)
        .ok_or(ConfigError::MissingApiKey)
}
