mod tests {
    use embassy_time::Duration;
    use pattern_composer::palette::{Palette, PaletteCycle, tables};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_palette_exact_stop() {
        let palette = Palette::new(tables::FIRE);
        // FIRE has a stop at 0.2 = pure red
        let c = palette.sample(0.2);
        assert!(close(c.r, 1.0) && close(c.g, 0.0) && close(c.b, 0.0));
    }

    #[test]
    fn test_palette_midpoint_lerp() {
        let palette = Palette::new(tables::FIRE);
        // Halfway between the 0.2 (red) and 0.8 (yellow) stops
        let c = palette.sample(0.5);
        assert!(close(c.r, 1.0) && close(c.g, 0.5) && close(c.b, 0.0));
    }

    #[test]
    fn test_palette_clamps_out_of_range() {
        let palette = Palette::new(tables::FIRE);
        let below = palette.sample(-0.5);
        assert!(close(below.r, 0.0) && close(below.g, 0.0) && close(below.b, 0.0));
        let above = palette.sample(2.0);
        assert!(close(above.r, 1.0) && close(above.g, 1.0) && close(above.b, 1.0));
    }

    #[test]
    fn test_palette_empty_table() {
        let palette = Palette::new(&[]);
        let c = palette.sample(0.5);
        assert!(close(c.r, 0.0) && close(c.g, 0.0) && close(c.b, 0.0));
    }

    const RED: &[f32] = &[0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0];
    const BLUE: &[f32] = &[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_palette_cycle_holds_then_crossfades() {
        let sources: &[&[f32]] = &[RED, BLUE];
        let mut cycle = PaletteCycle::new(
            sources,
            Duration::from_millis(100),
            Duration::from_millis(100),
        );

        // Initially holding the first palette
        assert!(close(cycle.sample(0.5).r, 1.0));
        assert!(!cycle.in_transition());

        cycle.tick(Duration::from_millis(50));
        assert!(!cycle.in_transition());
        assert!(close(cycle.sample(0.5).r, 1.0));

        // Hold expires, transition begins
        cycle.tick(Duration::from_millis(60));
        assert!(cycle.in_transition());

        // Halfway through the crossfade both palettes contribute
        cycle.tick(Duration::from_millis(50));
        let mid = cycle.sample(0.5);
        assert!(close(cycle.blend(), 0.5));
        assert!(close(mid.r, 0.5) && close(mid.b, 0.5));

        // Transition completes and the next palette becomes current
        cycle.tick(Duration::from_millis(60));
        assert!(!cycle.in_transition());
        assert_eq!(cycle.current_index(), 1);
        let done = cycle.sample(0.5);
        assert!(close(done.r, 0.0) && close(done.b, 1.0));
    }

    #[test]
    fn test_palette_cycle_single_source_never_transitions() {
        let sources: &[&[f32]] = &[RED];
        let mut cycle = PaletteCycle::new(
            sources,
            Duration::from_millis(10),
            Duration::from_millis(10),
        );
        for _ in 0..10 {
            cycle.tick(Duration::from_millis(10));
        }
        assert!(!cycle.in_transition());
        assert!(close(cycle.sample(0.5).r, 1.0));
    }
}
