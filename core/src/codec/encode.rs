//! codec/encode.rs
//!
//! Record encoding.
//!
//! Design notes:
//! - Floats use Rust's shortest round-trip representation (`{:?}`): it always
//!   parses back to the same `f64` and always carries a `.` or an exponent,
//!   so `2.0` stays `2.0` rather than `2`.
//! - Resolution is a plain decimal integer.
//! - Encoding cannot fail: an `Interval` is valid by construction and a
//!   `Separator` is validated when built.

use std::panic;

use crate::codec::types::Separator;
use crate::constants::RECORD_TERMINATOR;
use crate::interval::Interval;
use crate::utils::{effective_workers, resolve_workers, split_ranges};

/// Canonical text for a float field.
#[inline]
pub fn format_float(v: f64) -> String {
    format!("{v:?}")
}

/// Encode one interval as `<start><sep><end><sep><resolution>` (no terminator).
pub fn encode_record(interval: &Interval, sep: &Separator) -> String {
    let sep = sep.as_str();
    format!(
        "{:?}{sep}{:?}{sep}{}",
        interval.start(),
        interval.end(),
        interval.resolution()
    )
}

/// Encode one interval as a full line, terminator included.
pub fn encode_line(interval: &Interval, sep: &Separator) -> String {
    let mut line = encode_record(interval, sep);
    line.push_str(RECORD_TERMINATOR);
    line
}

/// Encode many intervals on scoped worker threads; output keeps input order.
///
/// Each returned string is a full line (terminator included).
pub fn encode_records_parallel(
    intervals: &[Interval],
    sep: &Separator,
    workers: Option<usize>,
) -> Vec<String> {
    let workers = effective_workers(intervals.len(), resolve_workers(workers));
    if workers == 1 {
        return intervals.iter().map(|iv| encode_line(iv, sep)).collect();
    }

    let ranges = split_ranges(intervals.len(), workers);
    let parts = crossbeam::thread::scope(|s| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| {
                let chunk = &intervals[range];
                s.spawn(move |_| chunk.iter().map(|iv| encode_line(iv, sep)).collect::<Vec<_>>())
            })
            .collect();
        handles.into_iter().map(|h| h.join()).collect::<Vec<_>>()
    })
    .unwrap_or_else(|payload| panic::resume_unwind(payload));

    let mut lines = Vec::with_capacity(intervals.len());
    for part in parts {
        lines.extend(part.unwrap_or_else(|payload| panic::resume_unwind(payload)));
    }
    lines
}
