mod tests {
    use embassy_time::{Duration, Instant};
    use pattern_composer::bounds::RenderingBounds;
    use pattern_composer::{
        BrightnessFilterConfig, ComposerConfig, ComposerIntent, ComposerStateIntent,
        FilterProcessorConfig, IntentChannel, PatternId, PixelLayout, Renderer,
        SensorFrame, TransitionTimings,
    };

    fn config() -> ComposerConfig {
        ComposerConfig {
            pattern: PatternId::PaletteWaves,
            layout: PixelLayout::Strip,
            bounds: RenderingBounds::full(8),
            filters: FilterProcessorConfig {
                brightness: BrightnessFilterConfig {
                    min_brightness: 0,
                    scale: 255,
                    adjust: None,
                },
            },
            timings: TransitionTimings {
                fade_out: Duration::from_millis(0),
                fade_in: Duration::from_millis(0),
                brightness: Duration::from_millis(0),
            },
            brightness: 255,
        }
    }

    #[test]
    fn test_render_produces_bounded_frame() {
        let channel = IntentChannel::<8>::new();
        let mut renderer: Renderer<8, 8> = Renderer::new(channel.receiver(), &config());

        let frame = renderer.render(Instant::from_millis(0));
        assert_eq!(frame.len(), 8);
    }

    #[test]
    fn test_pattern_switch_intent() {
        let channel = IntentChannel::<8>::new();
        let mut renderer: Renderer<8, 8> = Renderer::new(channel.receiver(), &config());
        assert_eq!(renderer.pattern_id(), PatternId::PaletteWaves);

        channel
            .sender()
            .try_send(ComposerIntent::State(ComposerStateIntent {
                pattern_id: Some(PatternId::SpinWheel),
                ..Default::default()
            }))
            .unwrap();

        // Zero transition timings: fade out, switch, fade in resolve
        // over the next few frames
        for i in 0..4 {
            renderer.render(Instant::from_millis(i * 16));
        }
        assert_eq!(renderer.pattern_id(), PatternId::SpinWheel);
    }

    #[test]
    fn test_bounds_intent_shrinks_frame() {
        let channel = IntentChannel::<8>::new();
        let mut renderer: Renderer<8, 8> = Renderer::new(channel.receiver(), &config());

        channel
            .sender()
            .try_send(ComposerIntent::Bounds(RenderingBounds { start: 2, end: 6 }))
            .unwrap();

        let frame = renderer.render(Instant::from_millis(0));
        assert_eq!(frame.len(), 4);
    }

    #[test]
    fn test_power_off_blanks_frame() {
        let channel = IntentChannel::<8>::new();
        let mut renderer: Renderer<8, 8> = Renderer::new(channel.receiver(), &config());

        channel
            .sender()
            .try_send(ComposerIntent::State(ComposerStateIntent {
                power: Some(false),
                ..Default::default()
            }))
            .unwrap();

        let mut last_sum = 0u32;
        for i in 0..3 {
            let frame = renderer.render(Instant::from_millis(i * 16));
            last_sum = frame
                .iter()
                .map(|c| u32::from(c.r) + u32::from(c.g) + u32::from(c.b))
                .sum();
        }
        assert_eq!(last_sum, 0);
    }

    #[test]
    fn test_sensor_intent_reaches_patterns() {
        let channel = IntentChannel::<8>::new();
        let mut renderer: Renderer<8, 8> = Renderer::new(channel.receiver(), &config());

        let mut frame = SensorFrame::default();
        frame.light = 120.0;
        channel
            .sender()
            .try_send(ComposerIntent::Sensors(frame))
            .unwrap();

        // Must not panic; the frame is stored and handed to patterns
        renderer.render(Instant::from_millis(0));
        renderer.render(Instant::from_millis(16));
    }
}
