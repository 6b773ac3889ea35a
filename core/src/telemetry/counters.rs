//! telemetry/counters.rs
//! Mutable counters collected while a job runs.
//!
//! Converted into an immutable `TelemetrySnapshot` at the end.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::stream::{ReadReport, WriteReport};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounters {
    pub intervals_generated: u64,
    pub records_written: u64,
    pub bytes_written: u64,
    pub records_read: u64,
    pub bytes_read: u64,
    pub records_skipped: u64,
    pub blank_lines: u64,
}

impl RecordCounters {
    pub fn add_generated(&mut self, count: usize) {
        self.intervals_generated += count as u64;
    }

    pub fn add_write(&mut self, report: &WriteReport) {
        self.records_written += report.records as u64;
        self.bytes_written += report.bytes;
    }

    pub fn add_read(&mut self, report: &ReadReport) {
        self.records_read += report.intervals.len() as u64;
        self.bytes_read += report.bytes;
        self.records_skipped += report.skipped_count() as u64;
        self.blank_lines += report.blank_lines as u64;
    }

    pub fn merge(&mut self, other: &RecordCounters) {
        self.intervals_generated += other.intervals_generated;
        self.records_written += other.records_written;
        self.bytes_written += other.bytes_written;
        self.records_read += other.records_read;
        self.bytes_read += other.bytes_read;
        self.records_skipped += other.records_skipped;
        self.blank_lines += other.blank_lines;
    }
}

impl AddAssign for RecordCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
