//! config.rs
//! Typed job configuration, validated once at the boundary.
//!
//! The cli crate parses arguments into a `JobConfig`; everything below it
//! only ever sees a validated value.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::Separator;
use crate::constants::MAX_WORKERS;
use crate::interval::PartitionPlan;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing value for <{name}>")]
    MissingValue { name: &'static str },

    #[error("invalid value for <{name}>: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("unknown filesystem kind {value:?} (expected local|distributed)")]
    UnknownFsKind { value: String },

    #[error("distributed filesystem needs a mount root (--dfs-root or {env})")]
    MissingDfsRoot { env: &'static str },

    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

/// Storage the output is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FsKind {
    Local,
    Distributed,
}

impl FsKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FsKind::Local => "local",
            FsKind::Distributed => "distributed",
        }
    }
}

impl fmt::Display for FsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FsKind {
    type Err = ConfigError;

    /// Accepts `local` / `lfs` and `distributed` / `dfs`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" | "lfs" => Ok(FsKind::Local),
            "distributed" | "dfs" => Ok(FsKind::Distributed),
            _ => Err(ConfigError::UnknownFsKind { value: s.to_string() }),
        }
    }
}

/// One generate-and-write job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Output path, or a `dfs://` / `hdfs://` URI for the distributed backend.
    pub output: String,
    pub start: f64,
    pub end: f64,
    /// Number of intervals.
    pub intervals: usize,
    /// Sample points per interval.
    pub resolution: u32,
    pub fs: FsKind,
    #[serde(default)]
    pub separator: Separator,
    /// Mount root for `FsKind::Distributed`.
    #[serde(default)]
    pub dfs_root: Option<PathBuf>,
    /// Read the output back and check it after writing.
    #[serde(default)]
    pub verify: bool,
    /// Worker threads for generate / encode; `None` = single-threaded.
    #[serde(default)]
    pub workers: Option<usize>,
}

impl JobConfig {
    pub fn new(
        output: impl Into<String>,
        start: f64,
        end: f64,
        intervals: usize,
        resolution: u32,
        fs: FsKind,
    ) -> Self {
        Self {
            output: output.into(),
            start,
            end,
            intervals,
            resolution,
            fs,
            separator: Separator::default(),
            dfs_root: None,
            verify: false,
            workers: None,
        }
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_dfs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.dfs_root = Some(root.into());
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Check every field. Runs before any I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.trim().is_empty() {
            return Err(ConfigError::MissingValue { name: "output" });
        }

        // Same preconditions the generator enforces, reported with argument names.
        if let Err(e) = PartitionPlan::new(self.start, self.end, self.intervals, self.resolution) {
            let name = match e.param() {
                Some("count") => "intervals",
                Some("resolution") => "resolutionPerInterval",
                Some("end") => "end",
                _ => "start",
            };
            return Err(ConfigError::InvalidValue { name, reason: e.to_string() });
        }

        if let Some(w) = self.workers {
            if w == 0 || w > MAX_WORKERS {
                return Err(ConfigError::InvalidValue {
                    name: "workers",
                    reason: format!("must be in 1..={MAX_WORKERS}, got {w}"),
                });
            }
        }

        if let Some(root) = &self.dfs_root {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::InvalidPath {
                    path: String::new(),
                    reason: "dfs root is empty",
                });
            }
        }
        Ok(())
    }

    /// Consume and return the config if valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}
