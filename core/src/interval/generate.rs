//! interval/generate.rs
//!
//! Range partitioning.
//!
//! Design notes:
//! - `offset = (end - start) / count`; boundary `i` is `start + i * offset`.
//! - A finite range wider than `f64::MAX` (e.g. `-MAX..MAX`) is partitioned at
//!   half scale: `offset = (end/2 - start/2) / count` and boundary `i` is
//!   `2 * (start/2 + i * offset)`, which stays finite.
//! - Boundary 0 is exactly `start` and boundary `count` is exactly `end`, so
//!   coverage never drifts no matter how the multiplication rounds.
//! - Interval `i` is `[boundary(i), boundary(i + 1))`. Neighbours share the
//!   same computed boundary, so contiguity is bit-exact.
//! - Each interval depends only on its index, which is what makes the
//!   parallel path trivially equal to the sequential one.

use std::ops::Range;
use std::panic;

use tracing::debug;

use crate::interval::types::{Interval, IntervalError, IntervalSequence};
use crate::utils::{effective_workers, resolve_workers, split_ranges};

/// Validated partition parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionPlan {
    start: f64,
    end: f64,
    count: usize,
    offset: f64,
    /// 1.0, or 2.0 when `end - start` overflows.
    scale: f64,
    resolution: u32,
}

impl PartitionPlan {
    /// Validate `count > 0`, `resolution > 0`, finite `start < end`.
    pub fn new(start: f64, end: f64, count: usize, resolution: u32) -> Result<Self, IntervalError> {
        if count == 0 {
            return Err(IntervalError::invalid("count", "must be greater than 0"));
        }
        if resolution == 0 {
            return Err(IntervalError::invalid("resolution", "must be greater than 0"));
        }
        if !start.is_finite() {
            return Err(IntervalError::invalid("start", format!("must be finite, got {start}")));
        }
        if !end.is_finite() {
            return Err(IntervalError::invalid("end", format!("must be finite, got {end}")));
        }
        if start >= end {
            return Err(IntervalError::invalid(
                "start",
                format!("must be less than end ({start:?} >= {end:?})"),
            ));
        }

        let scale = if (end - start).is_finite() { 1.0 } else { 2.0 };
        let offset = (end / scale - start / scale) / count as f64;

        Ok(Self { start, end, count, offset, scale, resolution })
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Interval width. Overflows to infinity only for a single interval
    /// spanning a range wider than `f64::MAX`.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset * self.scale
    }

    /// Boundary `i` for `i` in `0..=count`.
    #[inline]
    pub fn boundary(&self, i: usize) -> f64 {
        if i == 0 {
            self.start
        } else if i >= self.count {
            self.end
        } else {
            self.scale * (self.start / self.scale + i as f64 * self.offset)
        }
    }

    /// The `i`-th interval. Fails only if rounding collapsed it to zero width.
    pub fn interval(&self, i: usize) -> Result<Interval, IntervalError> {
        let lo = self.boundary(i);
        let hi = self.boundary(i + 1);
        Interval::new(lo, hi, self.resolution).map_err(|_| {
            IntervalError::invalid(
                "count",
                format!(
                    "interval {i} collapses to zero width ({lo:?}..{hi:?}); \
                     too many intervals for the range"
                ),
            )
        })
    }

    fn intervals_in(&self, range: Range<usize>) -> Result<Vec<Interval>, IntervalError> {
        range.map(|i| self.interval(i)).collect()
    }
}

/// Partition `[start, end)` into `count` contiguous intervals of equal width,
/// each sampled with `resolution` points.
///
/// # Errors
/// `IntervalError::InvalidArgument` naming `count`, `resolution`, `start` or `end`.
pub fn generate(
    start: f64,
    end: f64,
    count: usize,
    resolution: u32,
) -> Result<IntervalSequence, IntervalError> {
    let plan = PartitionPlan::new(start, end, count, resolution)?;
    Ok(IntervalSequence::from(plan.intervals_in(0..count)?))
}

/// Same result as [`generate`], computed by scoped worker threads over
/// contiguous index ranges.
///
/// `workers = None` uses one worker per core (minus one). Small inputs fall
/// back to a single thread.
pub fn generate_parallel(
    start: f64,
    end: f64,
    count: usize,
    resolution: u32,
    workers: Option<usize>,
) -> Result<IntervalSequence, IntervalError> {
    let plan = PartitionPlan::new(start, end, count, resolution)?;
    let workers = effective_workers(count, resolve_workers(workers));
    if workers == 1 {
        return Ok(IntervalSequence::from(plan.intervals_in(0..count)?));
    }

    let ranges = split_ranges(count, workers);
    debug!(count, workers = ranges.len(), "generating intervals in parallel");

    let plan = &plan;
    let parts = crossbeam::thread::scope(|s| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| s.spawn(move |_| plan.intervals_in(range)))
            .collect();

        // Join in spawn order to keep index order.
        handles.into_iter().map(|h| h.join()).collect::<Vec<_>>()
    })
    .unwrap_or_else(|payload| panic::resume_unwind(payload));

    let mut seq = IntervalSequence::with_capacity(count);
    for part in parts {
        let part = part.unwrap_or_else(|payload| panic::resume_unwind(payload))?;
        seq.extend(part);
    }
    Ok(seq)
}
