use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use interval_core::codec::Separator;
use interval_core::config::{ConfigError, FsKind, JobConfig};
use interval_core::constants::DFS_ROOT_ENV;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FsKindArg {
    #[value(alias = "lfs")]
    Local,
    #[value(alias = "dfs")]
    Distributed,
}

impl From<FsKindArg> for FsKind {
    fn from(v: FsKindArg) -> Self {
        match v {
            FsKindArg::Local => FsKind::Local,
            FsKindArg::Distributed => FsKind::Distributed,
        }
    }
}

/// Generate integration intervals and write them as delimited text records.
#[derive(Debug, Parser)]
#[command(name = "intervalgen", version, about, long_about = None)]
pub struct Args {
    /// Output path (or dfs:// URI with `distributed`)
    #[arg(value_name = "output")]
    pub output: String,

    /// Start of the range
    #[arg(value_name = "start", allow_negative_numbers = true)]
    pub start: f64,

    /// End of the range
    #[arg(value_name = "end", allow_negative_numbers = true)]
    pub end: f64,

    /// Number of intervals
    #[arg(value_name = "intervals")]
    pub intervals: usize,

    /// Sample points per interval
    #[arg(value_name = "resolutionPerInterval")]
    pub resolution: u32,

    /// Filesystem kind
    #[arg(value_name = "fs-kind", value_enum)]
    pub fs: FsKindArg,

    /// Field separator
    #[arg(long, default_value = " ")]
    pub separator: String,

    /// Mount root of the distributed filesystem
    #[arg(long = "dfs-root", env = DFS_ROOT_ENV)]
    pub dfs_root: Option<PathBuf>,

    /// Read the output back and check it after writing
    #[arg(long)]
    pub verify: bool,

    /// Print a JSON telemetry snapshot on stdout
    #[arg(long)]
    pub telemetry: bool,

    /// Worker threads for generate / encode
    #[arg(long)]
    pub workers: Option<usize>,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Convert into a validated job config.
    pub fn to_config(&self) -> Result<JobConfig, ConfigError> {
        let separator = Separator::new(self.separator.clone()).map_err(|e| {
            ConfigError::InvalidValue { name: "separator", reason: e.to_string() }
        })?;

        let mut config = JobConfig::new(
            self.output.clone(),
            self.start,
            self.end,
            self.intervals,
            self.resolution,
            self.fs.into(),
        )
        .with_separator(separator)
        .with_verify(self.verify)
        .with_workers(self.workers);

        if let Some(root) = &self.dfs_root {
            config = config.with_dfs_root(root.clone());
        }
        config.validated()
    }
}
