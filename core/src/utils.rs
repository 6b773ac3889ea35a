use std::ops::Range;

use crate::constants::{MAX_WORKERS, MIN_INTERVALS_PER_WORKER};

/// Resolve a worker count.
///
/// - `None` → one worker per core, leaving one core free.
/// - `Some(n)` → `n`, clamped to `1..=MAX_WORKERS`.
pub fn resolve_workers(requested: Option<usize>) -> usize {
    let n = match requested {
        Some(n) => n,
        None => num_cpus::get().saturating_sub(1),
    };
    n.clamp(1, MAX_WORKERS)
}

/// Number of workers actually worth spawning for `len` items.
pub fn effective_workers(len: usize, workers: usize) -> usize {
    let by_size = len.div_ceil(MIN_INTERVALS_PER_WORKER);
    workers.min(by_size).max(1)
}

/// Split `0..len` into at most `parts` contiguous, ordered, non-empty ranges.
/// Sizes differ by at most one.
pub fn split_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let parts = parts.clamp(1, len);
    let base = len / parts;
    let extra = len % parts;

    let mut ranges = Vec::with_capacity(parts);
    let mut lo = 0;
    for p in 0..parts {
        let size = base + usize::from(p < extra);
        ranges.push(lo..lo + size);
        lo += size;
    }
    debug_assert_eq!(lo, len);
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_ranges_covers_everything_in_order() {
        let ranges = split_ranges(10, 3);
        assert_eq!(ranges, vec![0..4, 4..7, 7..10]);
    }

    #[test]
    fn split_ranges_never_yields_empty_parts() {
        let ranges = split_ranges(2, 8);
        assert_eq!(ranges, vec![0..1, 1..2]);
        assert!(split_ranges(0, 4).is_empty());
    }

    #[test]
    fn resolve_workers_clamps() {
        assert_eq!(resolve_workers(Some(0)), 1);
        assert_eq!(resolve_workers(Some(10_000)), MAX_WORKERS);
        assert!(resolve_workers(None) >= 1);
    }

    #[test]
    fn small_inputs_stay_single_threaded() {
        assert_eq!(effective_workers(10, 8), 1);
        assert_eq!(effective_workers(MIN_INTERVALS_PER_WORKER * 3, 8), 3);
    }
}
