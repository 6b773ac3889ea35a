//! storage.rs
//! Filesystem backends that open record sinks and sources.
//!
//! - `LocalFs`: paths are used as given.
//! - `MountedDfs`: distributed filesystem reached through a local mount
//!   (FUSE / NFS gateway). `dfs://` and `hdfs://` URIs, or absolute paths,
//!   are resolved under the mount root.
//!
//! The generator and codec never see a backend; swapping one only changes
//! which sink/source the record stream is handed.

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::config::{ConfigError, FsKind, JobConfig};
use crate::constants::{DFS_ROOT_ENV, DFS_SCHEMES};
use crate::stream::io::{InputSource, OutputSink, StreamSink, StreamSource};
use crate::types::StreamError;

pub trait StorageBackend: Send + Sync {
    fn kind(&self) -> FsKind;

    /// Map a location (path or URI) to a local path.
    fn resolve(&self, location: &str) -> Result<PathBuf, StreamError>;

    /// Sink for `location`. Nothing is opened until the stream opens it.
    fn sink(&self, location: &str) -> Result<StreamSink, StreamError> {
        Ok(StreamSink::new(OutputSink::File(self.resolve(location)?)))
    }

    fn source(&self, location: &str) -> Result<StreamSource, StreamError> {
        Ok(StreamSource::new(InputSource::File(self.resolve(location)?)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl StorageBackend for LocalFs {
    fn kind(&self) -> FsKind {
        FsKind::Local
    }

    fn resolve(&self, location: &str) -> Result<PathBuf, StreamError> {
        if location.is_empty() {
            return Err(ConfigError::InvalidPath {
                path: location.to_string(),
                reason: "empty path",
            }
            .into());
        }
        Ok(PathBuf::from(location))
    }
}

#[derive(Debug, Clone)]
pub struct MountedDfs {
    root: PathBuf,
}

impl MountedDfs {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        if root.as_os_str().is_empty() {
            return Err(ConfigError::MissingDfsRoot { env: DFS_ROOT_ENV });
        }
        Ok(Self { root })
    }

    /// Root from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(DFS_ROOT_ENV) {
            Some(root) => Self::new(root),
            None => Err(ConfigError::MissingDfsRoot { env: DFS_ROOT_ENV }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Strip a `dfs://` / `hdfs://` scheme and its authority (`host:port`).
fn strip_scheme(location: &str) -> &str {
    for scheme in DFS_SCHEMES {
        if let Some(rest) = location.strip_prefix(scheme) {
            return match rest.find('/') {
                Some(0) => rest,
                Some(i) => &rest[i..],
                None => "",
            };
        }
    }
    location
}

impl StorageBackend for MountedDfs {
    fn kind(&self) -> FsKind {
        FsKind::Distributed
    }

    fn resolve(&self, location: &str) -> Result<PathBuf, StreamError> {
        let rel = Path::new(strip_scheme(location));
        let mut out = self.root.clone();
        let mut pushed = false;

        for comp in rel.components() {
            match comp {
                Component::Normal(part) => {
                    out.push(part);
                    pushed = true;
                }
                Component::RootDir | Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) => {
                    return Err(ConfigError::InvalidPath {
                        path: location.to_string(),
                        reason: "must stay inside the dfs root",
                    }
                    .into());
                }
            }
        }

        if !pushed {
            return Err(ConfigError::InvalidPath {
                path: location.to_string(),
                reason: "no file name",
            }
            .into());
        }
        Ok(out)
    }

    /// Like the default, but creates missing parent directories first.
    fn sink(&self, location: &str) -> Result<StreamSink, StreamError> {
        let path = self.resolve(location)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(location, path = %path.display(), "resolved dfs sink");
        Ok(StreamSink::new(OutputSink::File(path)))
    }
}

/// Backend for a validated job config.
///
/// The distributed root comes from `config.dfs_root`, falling back to the
/// environment.
pub fn backend_for(config: &JobConfig) -> Result<Box<dyn StorageBackend>, ConfigError> {
    match config.fs {
        FsKind::Local => Ok(Box::new(LocalFs)),
        FsKind::Distributed => {
            let dfs = match &config.dfs_root {
                Some(root) => MountedDfs::new(root.clone())?,
                None => MountedDfs::from_env()?,
            };
            Ok(Box::new(dfs))
        }
    }
}
