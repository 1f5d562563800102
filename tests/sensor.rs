mod tests {
    use embassy_time::Duration;
    use pattern_composer::clock::Clock;
    use pattern_composer::pattern::SpectrumPattern;
    use pattern_composer::sensor::array_lerp;
    use pattern_composer::{FrameEnv, Pattern, SensorFrame};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_sensor_frame_availability_sentinel() {
        let frame = SensorFrame::default();
        assert!(!frame.available());

        let mut frame = SensorFrame::default();
        frame.light = 0.0;
        assert!(frame.available());
    }

    #[test]
    fn test_array_lerp() {
        let values = [0.0, 1.0, 3.0];
        assert!(close(array_lerp(&values, 0.5), 0.5));
        assert!(close(array_lerp(&values, 1.5), 2.0));
        assert!(close(array_lerp(&values, 1.0), 1.0));
        // Out-of-range indexes clamp to the ends
        assert!(close(array_lerp(&values, -2.0), 0.0));
        assert!(close(array_lerp(&values, 10.0), 3.0));
        assert!(close(array_lerp(&[], 1.0), 0.0));
    }

    #[test]
    fn test_spectrum_gain_waits_for_sensor_board() {
        let clock = Clock::new();
        let no_board = SensorFrame::default();
        let env = FrameEnv {
            clock: &clock,
            sensors: &no_board,
            pixel_count: 8,
        };

        let mut pattern: SpectrumPattern<8> = SpectrumPattern::new();
        for _ in 0..10 {
            pattern.before_render(Duration::from_millis(16), &env);
        }
        // No sensor frames yet: the gain loop never runs
        assert!(close(pattern.sensitivity(), 0.0));

        let mut board = SensorFrame::default();
        board.light = 50.0;
        let env = FrameEnv {
            clock: &clock,
            sensors: &board,
            pixel_count: 8,
        };
        pattern.before_render(Duration::from_millis(16), &env);
        assert!(pattern.sensitivity() > 0.0);
    }
}
