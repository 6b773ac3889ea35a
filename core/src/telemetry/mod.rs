//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for generate/write/read jobs.
//!
//! Notes:
//! - Counters are plain integers; workers never touch them.
//! - Snapshots are serde-serializable so the cli can print them as JSON.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
