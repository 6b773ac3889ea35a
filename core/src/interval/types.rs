//! interval/types.rs
//! Interval value type and ordered sequences of intervals.

use std::fmt;
use std::ops::Index;
use std::slice;
use std::vec;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntervalError {
    /// A parameter violates its precondition. `param` names it.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument { param: &'static str, reason: String },

    /// A sequence is not a contiguous, uniform partition of the expected range.
    #[error("not a partition at interval {index}: {reason}")]
    Partition { index: usize, reason: String },
}

impl IntervalError {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        IntervalError::InvalidArgument { param, reason: reason.into() }
    }

    /// Name of the offending parameter, if any.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            IntervalError::InvalidArgument { param, .. } => Some(param),
            IntervalError::Partition { .. } => None,
        }
    }
}

/// Half-open range `[start, end)` sampled with `resolution` points.
///
/// Immutable once built; equality is structural.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
    resolution: u32,
}

impl Interval {
    /// Build an interval, enforcing finite bounds, `start < end` and `resolution >= 1`.
    pub fn new(start: f64, end: f64, resolution: u32) -> Result<Self, IntervalError> {
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
        if resolution == 0 {
            return Err(IntervalError::invalid("resolution", "must be at least 1"));
        }
        Ok(Self { start, end, resolution })
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}) x{}", self.start, self.end, self.resolution)
    }
}

/// Ordered intervals from one generate or read call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalSequence {
    intervals: Vec<Interval>,
}

impl IntervalSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { intervals: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    pub fn first(&self) -> Option<&Interval> {
        self.intervals.first()
    }

    pub fn last(&self) -> Option<&Interval> {
        self.intervals.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }

    /// Check that the sequence partitions `[start, end)`:
    /// - non-empty
    /// - first start / last end match the range within `tolerance`
    /// - neighbours touch within `tolerance`
    /// - every interval carries the same resolution
    pub fn check_partition(&self, start: f64, end: f64, tolerance: f64) -> Result<(), IntervalError> {
        let (first, last) = match (self.first(), self.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => {
                return Err(IntervalError::Partition {
                    index: 0,
                    reason: "sequence is empty".into(),
                })
            }
        };

        if (first.start - start).abs() >= tolerance {
            return Err(IntervalError::Partition {
                index: 0,
                reason: format!("starts at {:?}, expected {:?}", first.start, start),
            });
        }
        if (last.end - end).abs() >= tolerance {
            return Err(IntervalError::Partition {
                index: self.len() - 1,
                reason: format!("ends at {:?}, expected {:?}", last.end, end),
            });
        }

        for (i, pair) in self.intervals.windows(2).enumerate() {
            if (pair[0].end - pair[1].start).abs() >= tolerance {
                return Err(IntervalError::Partition {
                    index: i + 1,
                    reason: format!("gap between {:?} and {:?}", pair[0].end, pair[1].start),
                });
            }
            if pair[1].resolution != first.resolution {
                return Err(IntervalError::Partition {
                    index: i + 1,
                    reason: format!(
                        "resolution {} differs from {}",
                        pair[1].resolution, first.resolution
                    ),
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<Interval>> for IntervalSequence {
    fn from(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }
}

impl FromIterator<Interval> for IntervalSequence {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self { intervals: iter.into_iter().collect() }
    }
}

impl Extend<Interval> for IntervalSequence {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        self.intervals.extend(iter);
    }
}

impl Index<usize> for IntervalSequence {
    type Output = Interval;

    fn index(&self, index: usize) -> &Interval {
        &self.intervals[index]
    }
}

/// Allow iteration over an owned sequence.
impl IntoIterator for IntervalSequence {
    type Item = Interval;
    type IntoIter = vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

/// Allow iteration over a borrowed sequence.
impl<'a> IntoIterator for &'a IntervalSequence {
    type Item = &'a Interval;
    type IntoIter = slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
