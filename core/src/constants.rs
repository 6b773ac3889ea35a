//! constants.rs
//! Record format constants and generator defaults.
//!
//! These values are shared by the codec, the record stream and the cli crate.
//! The downstream integration job reads the same layout, so changing any of
//! them is a format change.

/// Default field separator: a single space.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Every record, including the last one, ends with this terminator.
pub const RECORD_TERMINATOR: &str = "\n";

/// Fields per record: start, end, resolution.
pub const RECORD_FIELDS: usize = 3;

/// Field names in wire order.
pub const FIELD_NAMES: [&str; RECORD_FIELDS] = ["start", "end", "resolution"];

/// Characters a float or integer field may contain.
/// A separator containing any of them could split a field apart.
pub const NUMERIC_CHARS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', 'e', 'E',
];

/// Tolerance used when checking contiguity / coverage of a sequence that did
/// not come straight from the generator (e.g. one read back from storage).
pub const PARTITION_TOLERANCE: f64 = 1e-6;

/// Job argument names, in positional order.
pub const ARGUMENT_NAMES: [&str; 6] = [
    "output",
    "start",
    "end",
    "intervals",
    "resolutionPerInterval",
    "fs-kind",
];

/// Environment variable holding the mount root of the distributed filesystem.
pub const DFS_ROOT_ENV: &str = "INTERVALGEN_DFS_ROOT";

/// URI schemes accepted for distributed locations.
pub const DFS_SCHEMES: &[&str] = &["dfs://", "hdfs://"];

/// Hard cap on worker threads for parallel generate / encode.
pub const MAX_WORKERS: usize = 64;

/// Below this many intervals per worker the split costs more than it saves.
pub const MIN_INTERVALS_PER_WORKER: usize = 4 * 1024;
