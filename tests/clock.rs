mod tests {
    use embassy_time::Duration;
    use pattern_composer::clock::Clock;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_phase_period_is_65536_ms_per_unit() {
        let mut clock = Clock::new();
        assert!(close(clock.phase(1.0), 0.0));

        clock.advance(Duration::from_millis(16_384));
        assert!(close(clock.phase(1.0), 0.25));

        clock.advance(Duration::from_millis(49_152));
        // One full period later the phase wraps back to 0
        assert!(close(clock.phase(1.0), 0.0));
    }

    #[test]
    fn test_phase_interval_scaling() {
        let mut clock = Clock::new();
        clock.advance(Duration::from_millis(6_554));
        // interval 0.1 -> 6553.6 ms period, so just past one wrap
        let p = clock.phase(0.1);
        assert!(p < 0.01, "phase = {p}");
    }

    #[test]
    fn test_phase_invalid_interval() {
        let mut clock = Clock::new();
        clock.advance(Duration::from_millis(1000));
        assert!(close(clock.phase(0.0), 0.0));
        assert!(close(clock.phase(-1.0), 0.0));
    }

    #[test]
    fn test_seconds_and_millis() {
        let mut clock = Clock::new();
        clock.advance(Duration::from_millis(1500));
        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.millis(), 2000);
        assert!(close(clock.seconds(), 2.0));
    }
}
