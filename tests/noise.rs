mod tests {
    use pattern_composer::noise::{fbm, perlin3, ridge, turbulence};

    #[test]
    fn test_perlin3_deterministic() {
        let a = perlin3(1.3, 2.7, 0.4);
        let b = perlin3(1.3, 2.7, 0.4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_perlin3_zero_at_lattice_points() {
        // Gradient noise is exactly zero on integer lattice points
        assert_eq!(perlin3(0.0, 0.0, 0.0), 0.0);
        assert_eq!(perlin3(3.0, 7.0, 11.0), 0.0);
    }

    #[test]
    fn test_perlin3_bounded() {
        let mut i = 0;
        while i < 1000 {
            let x = (i as f32) * 0.173;
            let y = (i as f32) * 0.091;
            let z = (i as f32) * 0.047;
            let v = perlin3(x, y, z);
            assert!(v.abs() <= 1.5, "perlin3({x}, {y}, {z}) = {v}");
            i += 1;
        }
    }

    #[test]
    fn test_perlin3_wraps_every_256_units() {
        // Exactly representable offsets keep the fractional part identical
        let v0 = perlin3(3.25, 7.5, 0.75);
        let v1 = perlin3(3.25 + 256.0, 7.5, 0.75);
        let v2 = perlin3(3.25, 7.5 + 256.0, 0.75);
        let v3 = perlin3(3.25, 7.5, 0.75 + 256.0);
        assert!((v0 - v1).abs() < 1e-6);
        assert!((v0 - v2).abs() < 1e-6);
        assert!((v0 - v3).abs() < 1e-6);
    }

    #[test]
    fn test_fbm_bounded() {
        let mut i = 0;
        while i < 200 {
            let x = (i as f32) * 0.311;
            let v = fbm(x, 0.5, 0.25, 2.0, 0.5, 4);
            assert!(v.abs() <= 1.5, "fbm at {x} = {v}");
            i += 1;
        }
    }

    #[test]
    fn test_fbm_zero_octaves() {
        assert_eq!(fbm(1.0, 2.0, 3.0, 2.0, 0.5, 0), 0.0);
    }

    #[test]
    fn test_turbulence_non_negative() {
        let mut i = 0;
        while i < 200 {
            let x = (i as f32) * 0.217;
            let v = turbulence(x, 1.5, 0.25, 2.0, 0.5, 3);
            assert!(v >= 0.0, "turbulence at {x} = {v}");
            i += 1;
        }
    }

    #[test]
    fn test_ridge_non_negative() {
        let mut i = 0;
        while i < 200 {
            let x = (i as f32) * 0.217;
            let v = ridge(x, 1.5, 0.25, 2.0, 0.5, 1.1, 3);
            assert!(v >= 0.0, "ridge at {x} = {v}");
            i += 1;
        }
    }
}
