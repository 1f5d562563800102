mod tests {
    use pattern_composer::PixelLayout;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_strip_endpoints() {
        let layout = PixelLayout::Strip;
        let first = layout.coords(0, 10);
        let last = layout.coords(9, 10);
        assert!(close(first.x, 0.0));
        assert!(close(last.x, 1.0));
        assert!(close(first.y, 0.0) && close(first.z, 0.0));
    }

    #[test]
    fn test_strip_single_pixel() {
        let layout = PixelLayout::Strip;
        let px = layout.coords(0, 1);
        assert!(close(px.x, 0.0));
        assert_eq!(px.count, 1);
    }

    #[test]
    fn test_matrix_rows_and_columns() {
        let layout = PixelLayout::Matrix {
            width: 4,
            zigzag: false,
        };
        // 4x4 matrix: index 5 is row 1, column 1
        let px = layout.coords(5, 16);
        assert!(close(px.x, 1.0 / 3.0));
        assert!(close(px.y, 1.0 / 3.0));
    }

    #[test]
    fn test_matrix_zigzag_flips_odd_rows() {
        let straight = PixelLayout::Matrix {
            width: 4,
            zigzag: false,
        };
        let serpentine = PixelLayout::Matrix {
            width: 4,
            zigzag: true,
        };
        // Row 1 runs backwards when zigzag wiring is active
        let a = straight.coords(5, 16);
        let b = serpentine.coords(5, 16);
        assert!(close(a.x, 1.0 / 3.0));
        assert!(close(b.x, 2.0 / 3.0));
        // Even rows are unaffected
        let c = straight.coords(1, 16);
        let d = serpentine.coords(1, 16);
        assert!(close(c.x, d.x));
    }

    #[test]
    fn test_index_clamped_to_count() {
        let layout = PixelLayout::Strip;
        let px = layout.coords(50, 10);
        assert_eq!(px.index, 9);
        assert!(close(px.x, 1.0));
    }
}
