//! stream — record streams over abstract sinks and sources.
//!
//! Layers:
//! - `io`: `RecordSink` / `RecordSource` and the canonical in/out enums
//! - `records`: write / read of newline-delimited records
//! - `core`: job-level API (generate → write → verify) and path helpers

pub mod io;
pub mod records;
pub mod core;

pub use io::{
    InputSource,
    OutputSink,
    RecordSink,
    RecordSource,
    SharedBuffer,
    StreamSink,
    StreamSource,
};

pub use records::{
    read_records,
    write_records,
    write_records_parallel,
    ReadPolicy,
    ReadReport,
    SkippedRecord,
    WriteReport,
};

pub use self::core::{read_from_path, run_job, write_to_path};
