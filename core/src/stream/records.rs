//! stream/records.rs
//!
//! Newline-delimited record streams.
//!
//! - `write_records`: encode each interval and append `<record>\n` to a sink,
//!   in sequence order. The sink is closed on every exit path.
//! - `read_records`: decode a source line by line under a [`ReadPolicy`].
//!
//! No retries and no rollback: a mid-stream write failure leaves the prefix
//! that already reached the sink.

use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::codec::{decode_record, encode_line, encode_records_parallel, CodecError, Separator};
use crate::interval::IntervalSequence;
use crate::stream::io::{RecordSink, RecordSource};
use crate::types::StreamError;

/// What `read_records` does with a malformed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Abort on the first malformed line, reporting its line number.
    #[default]
    Strict,
    /// Skip malformed lines and report them in [`ReadReport::skipped`].
    Skip,
}

/// A line rejected under [`ReadPolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// 1-based line number.
    pub line: usize,
    pub error: CodecError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadReport {
    pub intervals: IntervalSequence,
    pub skipped: Vec<SkippedRecord>,
    /// Lines with nothing before the terminator; ignored, never malformed.
    pub blank_lines: usize,
    /// Total lines seen.
    pub lines: usize,
    pub bytes: u64,
}

impl ReadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn into_sequence(self) -> IntervalSequence {
        self.intervals
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub records: usize,
    pub bytes: u64,
}

/// Holds an open sink and closes it on drop unless `finish` ran.
struct SinkGuard<'a, S: RecordSink + ?Sized> {
    sink: &'a mut S,
    armed: bool,
}

impl<'a, S: RecordSink + ?Sized> SinkGuard<'a, S> {
    fn open(sink: &'a mut S) -> io::Result<Self> {
        if let Err(e) = sink.open() {
            // Release whatever a partial open acquired.
            if let Err(close_err) = sink.close() {
                warn!(sink = %sink.describe(), error = %close_err, "close after failed open failed");
            }
            return Err(e);
        }
        Ok(Self { sink, armed: true })
    }

    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.append(bytes)
    }

    /// Flush and close, surfacing the close error.
    fn finish(mut self) -> io::Result<()> {
        self.armed = false;
        self.sink.close()
    }
}

impl<S: RecordSink + ?Sized> Drop for SinkGuard<'_, S> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = self.sink.close() {
                warn!(sink = %self.sink.describe(), error = %e, "close on error path failed");
            }
        }
    }
}

fn write_lines<S, I, L>(lines: I, sink: &mut S) -> Result<WriteReport, StreamError>
where
    S: RecordSink + ?Sized,
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let label = sink.describe();
    let mut guard = SinkGuard::open(sink)?;
    let mut report = WriteReport::default();

    for line in lines {
        let line = line.as_ref();
        guard.append(line.as_bytes())?;
        report.records += 1;
        report.bytes += line.len() as u64;
    }

    guard.finish()?;
    debug!(sink = %label, records = report.records, bytes = report.bytes, "records written");
    Ok(report)
}

/// Encode every interval and append `<record>\n` to `sink`, in order.
///
/// # Errors
/// `StreamError::Io` on open, write or close failure. Records already flushed
/// stay in the sink.
pub fn write_records<S: RecordSink + ?Sized>(
    seq: &IntervalSequence,
    sink: &mut S,
    sep: &Separator,
) -> Result<WriteReport, StreamError> {
    write_lines(seq.iter().map(|iv| encode_line(iv, sep)), sink)
}

/// Like [`write_records`], but encodes on worker threads before writing.
/// Output bytes are identical.
pub fn write_records_parallel<S: RecordSink + ?Sized>(
    seq: &IntervalSequence,
    sink: &mut S,
    sep: &Separator,
    workers: Option<usize>,
) -> Result<WriteReport, StreamError> {
    let lines = encode_records_parallel(seq.as_slice(), sep, workers);
    write_lines(lines, sink)
}

/// Decode `source` line by line.
///
/// Empty lines are ignored. A whitespace-only line is a record and goes
/// through the decoder like any other. An empty source yields an empty
/// sequence.
///
/// # Errors
/// - `StreamError::Io` on open/read failure (including invalid UTF-8)
/// - `StreamError::Record` on the first malformed line under `ReadPolicy::Strict`
pub fn read_records<S: RecordSource + ?Sized>(
    source: &mut S,
    sep: &Separator,
    policy: ReadPolicy,
) -> Result<ReadReport, StreamError> {
    let label = source.describe();
    let mut reader = source.open()?;
    let mut report = ReadReport::default();
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            break;
        }
        report.lines += 1;
        report.bytes += n as u64;
        let line_no = report.lines;

        let content = line.strip_suffix('\n').unwrap_or(&line);
        let content = content.strip_suffix('\r').unwrap_or(content);
        if content.is_empty() {
            report.blank_lines += 1;
            continue;
        }

        match decode_record(&line, sep) {
            Ok(iv) => report.intervals.push(iv),
            Err(error) => match policy {
                ReadPolicy::Strict => {
                    return Err(StreamError::Record { line: line_no, source: error });
                }
                ReadPolicy::Skip => {
                    warn!(source = %label, line = line_no, %error, "skipping malformed record");
                    report.skipped.push(SkippedRecord { line: line_no, error });
                }
            },
        }
    }

    debug!(
        source = %label,
        records = report.intervals.len(),
        skipped = report.skipped.len(),
        "records read"
    );
    Ok(report)
}
