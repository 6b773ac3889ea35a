// ## `core.rs` — stable public API

use tracing::{info, info_span};

use crate::codec::Separator;
use crate::config::JobConfig;
use crate::constants::PARTITION_TOLERANCE;
use crate::interval::{generate, generate_parallel, IntervalSequence};
use crate::storage::StorageBackend;
use crate::stream::records::{
    read_records, write_records, write_records_parallel, ReadPolicy, ReadReport, WriteReport,
};
use crate::telemetry::{RecordCounters, Stage, TelemetrySnapshot, TelemetryTimer};
use crate::types::StreamError;

/// Write `seq` to `location` with the default separator.
pub fn write_to_path(
    seq: &IntervalSequence,
    location: &str,
    backend: &dyn StorageBackend,
) -> Result<WriteReport, StreamError> {
    let mut sink = backend.sink(location)?;
    write_records(seq, &mut sink, &Separator::default())
}

/// Read `location` with the default separator and the strict policy.
pub fn read_from_path(
    location: &str,
    backend: &dyn StorageBackend,
) -> Result<IntervalSequence, StreamError> {
    let mut source = backend.source(location)?;
    Ok(read_records(&mut source, &Separator::default(), ReadPolicy::Strict)?.into_sequence())
}

/// Generate the configured intervals, write them, and optionally read them
/// back and check them.
///
/// The config is validated before anything is generated; a rejected config
/// performs no I/O.
pub fn run_job(
    config: &JobConfig,
    backend: &dyn StorageBackend,
) -> Result<TelemetrySnapshot, StreamError> {
    config.validate()?;

    let span = info_span!("job", output = %config.output, fs = %backend.kind());
    let _enter = span.enter();

    let mut timer = TelemetryTimer::new();
    let mut counters = RecordCounters::default();

    let seq = timer.time(Stage::Generate, || match config.workers {
        Some(w) if w > 1 => {
            generate_parallel(config.start, config.end, config.intervals, config.resolution, Some(w))
        }
        _ => generate(config.start, config.end, config.intervals, config.resolution),
    })?;
    counters.add_generated(seq.len());

    let mut sink = backend.sink(&config.output)?;
    let written = timer.time(Stage::Write, || match config.workers {
        Some(w) if w > 1 => write_records_parallel(&seq, &mut sink, &config.separator, Some(w)),
        _ => write_records(&seq, &mut sink, &config.separator),
    })?;
    counters.add_write(&written);
    info!(records = written.records, bytes = written.bytes, "intervals written");

    if config.verify {
        let report = timer.time(Stage::Read, || -> Result<ReadReport, StreamError> {
            let mut source = backend.source(&config.output)?;
            read_records(&mut source, &config.separator, ReadPolicy::Strict)
        })?;
        counters.add_read(&report);
        timer.time(Stage::Verify, || verify_read_back(config, &seq, &report.intervals))?;
        info!(records = report.intervals.len(), "read-back verified");
    }

    timer.finish();
    Ok(TelemetrySnapshot::from(
        config.output.clone(),
        backend.kind(),
        &counters,
        &timer,
        config.verify,
    ))
}

fn verify_read_back(
    config: &JobConfig,
    written: &IntervalSequence,
    read: &IntervalSequence,
) -> Result<(), StreamError> {
    if written.len() != read.len() {
        return Err(StreamError::Validation(format!(
            "wrote {} records, read back {}",
            written.len(),
            read.len()
        )));
    }
    if let Some(i) = written.iter().zip(read.iter()).position(|(a, b)| a != b) {
        return Err(StreamError::Validation(format!(
            "record {} differs: wrote {}, read {}",
            i + 1,
            written[i],
            read[i]
        )));
    }
    read.check_partition(config.start, config.end, PARTITION_TOLERANCE)?;
    Ok(())
}
