use sims::core::presets::catalog::PresetLoadError;
use sims::engine::error::RegistryError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] RegistryError),

    #[error(transparent)]
    Presets(#[from] PresetLoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
