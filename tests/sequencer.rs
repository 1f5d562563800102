mod tests {
    use embassy_time::Duration;
    use pattern_composer::clock::Clock;
    use pattern_composer::{
        FrameEnv, Pattern, PatternId, Playlist, PlaylistEntry, SensorFrame,
    };

    fn entries() -> [PlaylistEntry; 2] {
        [
            PlaylistEntry::new(PatternId::PaletteWaves, Duration::from_millis(100)),
            PlaylistEntry::new(PatternId::SpinWheel, Duration::from_millis(100)),
        ]
    }

    #[test]
    fn test_playlist_advances_on_schedule() {
        let clock = Clock::new();
        let sensors = SensorFrame::default();
        let env = FrameEnv {
            clock: &clock,
            sensors: &sensors,
            pixel_count: 8,
        };

        let mut playlist: Playlist<8, 4> =
            Playlist::new(&entries(), Duration::from_millis(40));
        assert_eq!(playlist.current_id(), PatternId::PaletteWaves);

        playlist.before_render(Duration::from_millis(30), &env);
        assert!(!playlist.crossfading());

        // 70 ms: inside the 40 ms fade window before the 100 ms mark
        playlist.before_render(Duration::from_millis(40), &env);
        assert!(playlist.crossfading());
        assert_eq!(playlist.current_id(), PatternId::PaletteWaves);

        // Past the entry duration: the next pattern takes over
        playlist.before_render(Duration::from_millis(50), &env);
        assert_eq!(playlist.current_id(), PatternId::SpinWheel);
        assert!(!playlist.crossfading());
    }

    #[test]
    fn test_playlist_wraps_around() {
        let clock = Clock::new();
        let sensors = SensorFrame::default();
        let env = FrameEnv {
            clock: &clock,
            sensors: &sensors,
            pixel_count: 8,
        };

        let mut playlist: Playlist<8, 4> =
            Playlist::new(&entries(), Duration::from_millis(0));
        for _ in 0..2 {
            playlist.before_render(Duration::from_millis(110), &env);
        }
        // Two full entries later we are back at the first pattern
        assert_eq!(playlist.current_id(), PatternId::PaletteWaves);
    }

    #[test]
    fn test_playlist_renders_during_crossfade() {
        let clock = Clock::new();
        let sensors = SensorFrame::default();
        let env = FrameEnv {
            clock: &clock,
            sensors: &sensors,
            pixel_count: 8,
        };
        let layout = pattern_composer::PixelLayout::Strip;

        let mut playlist: Playlist<8, 4> =
            Playlist::new(&entries(), Duration::from_millis(40));
        playlist.before_render(Duration::from_millis(70), &env);
        assert!(playlist.crossfading());

        // Every pixel resolves to a color from one of the two patterns
        for i in 0..8 {
            let _ = playlist.render_pixel(layout.coords(i, 8));
        }
    }

    #[test]
    fn test_empty_playlist_falls_back_to_default() {
        let clock = Clock::new();
        let sensors = SensorFrame::default();
        let env = FrameEnv {
            clock: &clock,
            sensors: &sensors,
            pixel_count: 8,
        };

        let mut playlist: Playlist<8, 4> = Playlist::new(&[], Duration::from_millis(40));
        playlist.before_render(Duration::from_millis(100), &env);
        assert_eq!(playlist.current_id(), PatternId::PaletteWaves);
        assert!(!playlist.crossfading());
    }
}
