#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use interval_core::config::FsKind;
    use interval_core::interval::generate;
    use interval_core::stream::{ReadReport, WriteReport};
    use interval_core::telemetry::{RecordCounters, Stage, StageTimes, TelemetrySnapshot, TelemetryTimer};

    fn make_counters() -> RecordCounters {
        RecordCounters {
            intervals_generated: 10,
            records_written: 10,
            bytes_written: 120,
            records_read: 10,
            bytes_read: 120,
            records_skipped: 0,
            blank_lines: 0,
        }
    }

    fn make_timer() -> TelemetryTimer {
        let mut timer = TelemetryTimer::new();
        timer.time(Stage::Generate, || std::thread::sleep(Duration::from_millis(2)));
        timer.time(Stage::Write, || std::thread::sleep(Duration::from_millis(5)));
        timer.finish();
        timer
    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Write, Duration::from_millis(3));
        times.add(Stage::Write, Duration::from_millis(4));

        assert_eq!(times.get(Stage::Write), Duration::from_millis(7));
        assert_eq!(times.get(Stage::Read), Duration::ZERO);
        assert!(!times.contains(Stage::Read));
        assert_eq!(times.total(), Duration::from_millis(7));
    }

    #[test]
    fn timer_time_charges_the_stage_and_returns_value() {
        let mut timer = TelemetryTimer::new();
        let v = timer.time(Stage::Verify, || {
            std::thread::sleep(Duration::from_millis(2));
            41 + 1
        });
        assert_eq!(v, 42);
        assert!(timer.stage_times().get(Stage::Verify) >= Duration::from_millis(2));
    }

    #[test]
    fn counters_follow_reports() {
        let mut c = RecordCounters::default();
        c.add_generated(3);
        c.add_write(&WriteReport { records: 3, bytes: 30 });
        c.add_read(&ReadReport {
            intervals: generate(0.0, 1.0, 3, 1).unwrap(),
            blank_lines: 2,
            lines: 5,
            bytes: 32,
            ..Default::default()
        });

        assert_eq!(c.intervals_generated, 3);
        assert_eq!(c.records_written, 3);
        assert_eq!(c.records_read, 3);
        assert_eq!(c.bytes_read, 32);
        assert_eq!(c.blank_lines, 2);

        let mut total = RecordCounters::default();
        total += c.clone();
        total += c;
        assert_eq!(total.records_written, 6);
    }

    #[test]
    fn snapshot_is_sane() {
        let snap = TelemetrySnapshot::from("out.txt", FsKind::Local, &make_counters(), &make_timer(), true);

        assert_eq!(snap.output, "out.txt");
        assert!(snap.has_all_stages(&[Stage::Generate, Stage::Write]));
        assert!(!snap.has_all_stages(&[Stage::Read]));
        assert!(snap.elapsed >= snap.total_stage_time());
        assert!(snap.records_per_sec > 0.0);
        assert!(snap.sanity_check());
    }

    #[test]
    fn sanity_check_catches_short_read_back() {
        let mut counters = make_counters();
        counters.records_read = 9;
        let snap = TelemetrySnapshot::from("out.txt", FsKind::Local, &counters, &make_timer(), true);
        assert!(!snap.sanity_check());

        // Unverified jobs do not read back.
        let snap = TelemetrySnapshot::from("out.txt", FsKind::Local, &counters, &make_timer(), false);
        assert!(snap.sanity_check());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snap = TelemetrySnapshot::from("dfs:///x", FsKind::Distributed, &make_counters(), &make_timer(), false);
        let json = snap.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fs"], "distributed");
        assert_eq!(value["counters"]["records_written"], 10);
        assert!(value["stage_times"]["times"]["write"].is_object());

        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.counters, snap.counters);
    }
}
