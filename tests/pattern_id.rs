mod tests {
    use pattern_composer::PatternId;

    #[test]
    fn test_pattern_id_parse_palette_waves() {
        assert_eq!(
            PatternId::parse_from_str("palette_waves"),
            Some(PatternId::PaletteWaves)
        );
    }

    #[test]
    fn test_pattern_id_from_raw_palette_waves() {
        assert_eq!(PatternId::from_raw(0), Some(PatternId::PaletteWaves));
    }

    #[test]
    fn test_pattern_id_parse_spectrum() {
        assert_eq!(
            PatternId::parse_from_str("spectrum"),
            Some(PatternId::Spectrum)
        );
    }

    #[test]
    fn test_pattern_id_from_raw_spectrum() {
        assert_eq!(PatternId::from_raw(3), Some(PatternId::Spectrum));
    }

    #[test]
    fn test_pattern_id_as_str_sparks() {
        assert_eq!(PatternId::Sparks.as_str(), "sparks");
    }

    #[test]
    fn test_pattern_id_from_raw_sparks() {
        // Sparks is appended at the end; current ID is 5.
        assert_eq!(PatternId::from_raw(5), Some(PatternId::Sparks));
    }

    #[test]
    fn test_pattern_id_from_raw_unknown() {
        assert_eq!(PatternId::from_raw(200), None);
        assert_eq!(PatternId::parse_from_str("nope"), None);
    }

    const ALL_IDS: [PatternId; 6] = [
        PatternId::PaletteWaves,
        PatternId::PerlinFire,
        PatternId::PlanePulse,
        PatternId::Spectrum,
        PatternId::SpinWheel,
        PatternId::Sparks,
    ];

    #[test]
    fn test_pattern_id_round_trips_all_variants() {
        for id in ALL_IDS {
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(id));
            assert_eq!(PatternId::from_raw(id as u8), Some(id));
        }
    }
}
