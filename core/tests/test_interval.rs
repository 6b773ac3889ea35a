// Covers `generate`, `generate_parallel`, `Interval::new` and
// `IntervalSequence::check_partition`.

#[cfg(test)]
mod tests {
    use interval_core::constants::{MIN_INTERVALS_PER_WORKER, PARTITION_TOLERANCE};
    use interval_core::interval::{generate, generate_parallel, Interval, IntervalError, IntervalSequence};
    use proptest::prelude::*;

    fn param_of(err: IntervalError) -> &'static str {
        err.param().expect("expected an InvalidArgument error")
    }

// # ✅ 1. Five even intervals over [0, 10)

    #[test]
    fn generate_five_intervals_over_ten() {
        let seq = generate(0.0, 10.0, 5, 100).unwrap();

        let bounds: Vec<(f64, f64)> = seq.iter().map(|iv| (iv.start(), iv.end())).collect();
        assert_eq!(
            bounds,
            vec![(0.0, 2.0), (2.0, 4.0), (4.0, 6.0), (6.0, 8.0), (8.0, 10.0)]
        );
        assert!(seq.iter().all(|iv| iv.resolution() == 100));
    }

    #[test]
    fn single_interval_is_the_whole_range() {
        let seq = generate(-1.5, 3.25, 1, 7).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0], Interval::new(-1.5, 3.25, 7).unwrap());
    }

// # ✅ 2. Coverage is exact even when offsets do not divide evenly

    #[test]
    fn last_interval_ends_exactly_at_end() {
        let seq = generate(0.1, 0.7, 3, 1).unwrap();
        assert_eq!(seq.first().unwrap().start(), 0.1);
        assert_eq!(seq.last().unwrap().end(), 0.7);

        let seq = generate(0.0, 1.0, 49, 1).unwrap();
        assert_eq!(seq.last().unwrap().end(), 1.0);
    }

    #[test]
    fn neighbours_share_boundaries_bit_for_bit() {
        let seq = generate(-3.3, 17.9, 1_000, 4).unwrap();
        for pair in seq.as_slice().windows(2) {
            assert_eq!(pair[0].end().to_bits(), pair[1].start().to_bits());
        }
    }

// # ❌ 3. Preconditions name the offending parameter

    #[test]
    fn zero_count_is_rejected() {
        assert_eq!(param_of(generate(0.0, 1.0, 0, 10).unwrap_err()), "count");
    }

    #[test]
    fn zero_resolution_is_rejected() {
        assert_eq!(param_of(generate(0.0, 1.0, 4, 0).unwrap_err()), "resolution");
    }

    #[test]
    fn reversed_or_empty_range_is_rejected() {
        assert_eq!(param_of(generate(1.0, 1.0, 4, 10).unwrap_err()), "start");
        assert_eq!(param_of(generate(2.0, 1.0, 4, 10).unwrap_err()), "start");
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert_eq!(param_of(generate(f64::NAN, 1.0, 4, 10).unwrap_err()), "start");
        assert_eq!(param_of(generate(0.0, f64::INFINITY, 4, 10).unwrap_err()), "end");
    }

    #[test]
    fn range_wider_than_f64_max_is_partitioned() {
        let seq = generate(-f64::MAX, f64::MAX, 4, 1).unwrap();

        assert_eq!(seq.len(), 4);
        assert_eq!(seq[0].start(), -f64::MAX);
        assert_eq!(seq[3].end(), f64::MAX);
        let expected = [-f64::MAX / 2.0, 0.0, f64::MAX / 2.0];
        for (i, want) in expected.into_iter().enumerate() {
            let got = seq[i].end();
            assert_eq!(got.to_bits(), seq[i + 1].start().to_bits());
            assert!((got - want).abs() <= f64::MAX * 1e-15, "boundary {}: {got:?}", i + 1);
        }

        let whole = generate(-f64::MAX, f64::MAX, 1, 1).unwrap();
        assert_eq!(whole[0], Interval::new(-f64::MAX, f64::MAX, 1).unwrap());

        let par = generate_parallel(-f64::MAX, f64::MAX, MIN_INTERVALS_PER_WORKER * 2, 1, Some(2)).unwrap();
        assert_eq!(par, generate(-f64::MAX, f64::MAX, MIN_INTERVALS_PER_WORKER * 2, 1).unwrap());
        assert_eq!(par.last().unwrap().end(), f64::MAX);
        for pair in par.as_slice().windows(2) {
            assert_eq!(pair[0].end().to_bits(), pair[1].start().to_bits());
        }
    }

    #[test]
    fn collapsing_partition_is_rejected() {
        // Range one ulp wide cannot hold two intervals.
        let start = 1.0_f64;
        let end = f64::from_bits(start.to_bits() + 1);
        assert_eq!(param_of(generate(start, end, 2, 1).unwrap_err()), "count");
    }

// # ✅ 4. Interval::new invariant

    #[test]
    fn interval_new_enforces_invariant() {
        assert!(Interval::new(0.0, 1.0, 1).is_ok());
        assert!(Interval::new(1.0, 0.0, 1).is_err());
        assert!(Interval::new(0.0, 1.0, 0).is_err());
        assert!(Interval::new(f64::NEG_INFINITY, 1.0, 1).is_err());
    }

// # ✅ 5. Parallel generation equals sequential

    #[test]
    fn parallel_matches_sequential() {
        let count = MIN_INTERVALS_PER_WORKER * 4 + 3;
        let seq = generate(-50.0, 75.0, count, 12).unwrap();
        let par = generate_parallel(-50.0, 75.0, count, 12, Some(4)).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn parallel_validates_like_sequential() {
        let err = generate_parallel(0.0, 1.0, 0, 1, Some(4)).unwrap_err();
        assert_eq!(err.param(), Some("count"));
    }

// # ✅ 6. check_partition

    #[test]
    fn generated_sequence_is_a_partition() {
        let seq = generate(2.0, 9.0, 13, 3).unwrap();
        assert!(seq.check_partition(2.0, 9.0, PARTITION_TOLERANCE).is_ok());
    }

    #[test]
    fn gap_is_detected() {
        let seq: IntervalSequence = vec![
            Interval::new(0.0, 1.0, 5).unwrap(),
            Interval::new(1.5, 2.0, 5).unwrap(),
        ]
        .into();
        assert!(matches!(
            seq.check_partition(0.0, 2.0, PARTITION_TOLERANCE),
            Err(IntervalError::Partition { index: 1, .. })
        ));
    }

    #[test]
    fn mixed_resolution_is_detected() {
        let seq: IntervalSequence = vec![
            Interval::new(0.0, 1.0, 5).unwrap(),
            Interval::new(1.0, 2.0, 6).unwrap(),
        ]
        .into();
        assert!(seq.check_partition(0.0, 2.0, PARTITION_TOLERANCE).is_err());
    }

    #[test]
    fn empty_sequence_is_not_a_partition() {
        assert!(IntervalSequence::new().check_partition(0.0, 1.0, PARTITION_TOLERANCE).is_err());
    }

// # 🎲 7. Properties: length, contiguity, coverage

    proptest! {
        #[test]
        fn prop_partition_invariants(
            start in -1.0e6f64..1.0e6,
            width in 1.0e-3f64..1.0e6,
            count in 1usize..2_000,
            resolution in 1u32..10_000,
        ) {
            let end = start + width;
            prop_assume!(start < end);

            let seq = generate(start, end, count, resolution).unwrap();

            prop_assert_eq!(seq.len(), count);
            prop_assert!((seq[0].start() - start).abs() < 1e-6);
            prop_assert!((seq[count - 1].end() - end).abs() < 1e-6);
            for i in 0..count - 1 {
                prop_assert!((seq[i].end() - seq[i + 1].start()).abs() < 1e-6);
            }
            prop_assert!(seq.iter().all(|iv| iv.resolution() == resolution));
        }
    }
}
