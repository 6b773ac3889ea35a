use std::io;

use thiserror::Error;

use crate::{codec::CodecError, config::ConfigError, interval::IntervalError};

/// Unified stream error covering I/O, record, codec, interval and config failures.
/// - `From<T>` impls enable `?` across layers.
/// - Nothing here is retried; callers decide.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Sink/source open, write, read or close failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A malformed record; `line` is 1-based.
    #[error("malformed record at line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: CodecError,
    },

    /// Codec error outside a stream (e.g. bad separator).
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Generation received invalid numeric input.
    #[error("interval error: {0}")]
    Interval(#[from] IntervalError),

    /// Configuration rejected before any I/O.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Read-back verification failed.
    #[error("verification failed: {0}")]
    Validation(String),
}

impl StreamError {
    /// True for errors caused by caller-supplied configuration or arguments,
    /// as opposed to storage failures or corrupt input.
    pub fn is_usage(&self) -> bool {
        matches!(self, StreamError::Config(_) | StreamError::Interval(_))
    }
}
