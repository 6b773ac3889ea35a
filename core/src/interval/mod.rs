//! interval/mod.rs
//! Interval model and range partitioning.
//!
//! Responsibilities:
//! - Define the `Interval` value and its invariant (`start < end`, `resolution >= 1`)
//! - Partition a range into contiguous sub-intervals
//!
//! Non-responsibilities:
//! - Text encoding
//! - IO

pub mod types;
pub mod generate;

pub use types::{Interval, IntervalError, IntervalSequence};
pub use generate::{generate, generate_parallel, PartitionPlan};
