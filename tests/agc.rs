mod tests {
    use pattern_composer::agc::PiController;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_pi_controller_single_step() {
        let mut controller = PiController::new(0.5, 0.5, 0.0, 0.0, 10.0);
        let out = controller.update(1.0);
        // accumulator becomes 1.0, output = kp*error + ki*accumulator
        assert!(close(out, 1.0));
        assert!(close(controller.accumulator(), 1.0));
    }

    #[test]
    fn test_pi_controller_accumulator_clamps_high() {
        let mut controller = PiController::new(0.5, 0.5, 0.0, 0.0, 10.0);
        for _ in 0..100 {
            controller.update(100.0);
        }
        assert!(close(controller.accumulator(), 10.0));
        let out = controller.update(100.0);
        assert!(close(out, 0.5 * 100.0 + 0.5 * 10.0));
    }

    #[test]
    fn test_pi_controller_accumulator_clamps_low() {
        let mut controller = PiController::new(0.5, 0.5, 5.0, 0.0, 10.0);
        for _ in 0..100 {
            controller.update(-100.0);
        }
        assert!(close(controller.accumulator(), 0.0));
    }

    #[test]
    fn test_pi_controller_settles_on_zero_error() {
        let mut controller = PiController::new(0.05, 0.15, 30.0, 0.0, 400.0);
        let first = controller.update(0.0);
        let second = controller.update(0.0);
        // Zero error leaves the accumulator alone, output is steady
        assert!(close(first, second));
        assert!(close(first, 0.15 * 30.0));
    }
}
