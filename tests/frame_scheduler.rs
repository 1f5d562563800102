mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use embassy_time::{Duration, Instant};
    use pattern_composer::bounds::RenderingBounds;
    use pattern_composer::{
        BrightnessFilterConfig, ComposerConfig, FilterProcessorConfig, FrameScheduler,
        IntentChannel, OutputDriver, PatternId, PixelLayout, Renderer, Rgb,
        TransitionTimings,
    };

    #[derive(Default)]
    struct CaptureState {
        frames: usize,
        last_len: usize,
    }

    struct CaptureDriver(Rc<RefCell<CaptureState>>);

    impl OutputDriver for CaptureDriver {
        fn write(&mut self, colors: &[Rgb]) {
            let mut state = self.0.borrow_mut();
            state.frames += 1;
            state.last_len = colors.len();
        }
    }

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
    fn test_tick_writes_frames_and_paces() {
        let channel = IntentChannel::<8>::new();
        let renderer: Renderer<8, 8> = Renderer::new(channel.receiver(), &config());
        let state = Rc::new(RefCell::new(CaptureState::default()));
        let mut scheduler = FrameScheduler::with_frame_duration(
            renderer,
            CaptureDriver(Rc::clone(&state)),
            Duration::from_millis(16),
        );

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.sleep_duration, Duration::from_millis(16));
        assert_eq!(result.next_deadline, Instant::from_millis(16));

        let result = scheduler.tick(Instant::from_millis(16));
        assert_eq!(result.next_deadline, Instant::from_millis(32));

        assert_eq!(state.borrow().frames, 2);
        assert_eq!(state.borrow().last_len, 8);
    }

    #[test]
    fn test_tick_skips_backlog_after_stall() {
        let channel = IntentChannel::<8>::new();
        let renderer: Renderer<8, 8> = Renderer::new(channel.receiver(), &config());
        let state = Rc::new(RefCell::new(CaptureState::default()));
        let mut scheduler = FrameScheduler::with_frame_duration(
            renderer,
            CaptureDriver(Rc::clone(&state)),
            Duration::from_millis(16),
        );

        scheduler.tick(Instant::from_millis(0));
        scheduler.tick(Instant::from_millis(16));

        // A long stall resets the deadline instead of bursting
        let result = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(result.next_deadline, Instant::from_millis(1016));
        assert_eq!(result.sleep_duration, Duration::from_millis(16));
    }
}
