use std::process::ExitCode;

use interval_core::config::ConfigError;
use interval_core::types::StreamError;
use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad or missing configuration; nothing was written.
    #[error("{0}")]
    Usage(#[from] ConfigError),

    #[error(transparent)]
    Run(#[from] StreamError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// 2 for usage errors (same as clap), 1 for everything else.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Usage(_) => ExitCode::from(2),
            CliError::Run(e) if e.is_usage() => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}
