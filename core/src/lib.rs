//! interval-core
//!
//! Partitions a numeric range into integration work-units ("intervals") and
//! moves them through a newline-delimited text format.
//! No CLI, no logging setup; storage is reached through sink/source traits.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Model and codec
pub mod interval;
pub mod codec;

// Storage and streams
pub mod storage;
pub mod stream;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{decode_record, encode_record, CodecError, Separator};
    pub use crate::config::{ConfigError, FsKind, JobConfig};
    pub use crate::interval::{generate, generate_parallel, Interval, IntervalError, IntervalSequence};
    pub use crate::storage::{backend_for, LocalFs, MountedDfs, StorageBackend};
    pub use crate::stream::{
        read_records, run_job, write_records, InputSource, OutputSink, ReadPolicy, ReadReport,
        RecordSink, RecordSource, StreamSink, StreamSource, WriteReport,
    };
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::StreamError;
}
