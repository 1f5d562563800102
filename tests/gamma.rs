mod tests {
    use pattern_composer::ws2812_lut;

    #[test]
    fn test_ws2812_lut_endpoints() {
        assert_eq!(ws2812_lut(0), 0);
        assert_eq!(ws2812_lut(255), 255);
    }

    #[test]
    fn test_ws2812_lut_monotonic() {
        for v in 0..255u8 {
            assert!(ws2812_lut(v) <= ws2812_lut(v + 1));
        }
    }

    #[test]
    fn test_ws2812_lut_darkens_midtones() {
        // Gamma > 1 pulls everything below the identity line
        assert!(ws2812_lut(128) < 128);
    }
}
