//! telemetry/snapshot.rs
//!
//! Immutable job telemetry.
//!
//! Design notes:
//! - Built once from counters + timer when a job ends.
//! - Serializes to JSON for the cli's `--telemetry` flag.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FsKind;
use crate::telemetry::counters::RecordCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub output: String,
    pub fs: FsKind,
    pub counters: RecordCounters,
    pub records_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
    pub verified: bool,
    pub finished_at: DateTime<Utc>,
}

impl TelemetrySnapshot {
    pub fn from(
        output: impl Into<String>,
        fs: FsKind,
        counters: &RecordCounters,
        timer: &TelemetryTimer,
        verified: bool,
    ) -> Self {
        let elapsed = timer.elapsed();
        let records_per_sec = if elapsed.as_secs_f64() > 0.0 {
            counters.records_written as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            output: output.into(),
            fs,
            counters: counters.clone(),
            records_per_sec,
            elapsed,
            stage_times: timer.stage_times().clone(),
            verified,
            finished_at: Utc::now(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.stage_times.contains(*s))
    }

    /// Internal invariants:
    /// - stage times fit inside elapsed
    /// - every generated interval was written
    /// - a verified job read back exactly what it wrote
    pub fn sanity_check(&self) -> bool {
        let c = &self.counters;
        self.total_stage_time() <= self.elapsed
            && c.records_written == c.intervals_generated
            && (!self.verified || (c.records_read == c.records_written && c.records_skipped == 0))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
