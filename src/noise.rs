//! Perlin-style gradient noise for procedural texture
//!
//! Lattice gradients come from SplitMix64-style integer mixing rather
//! than a permutation table, so no static state is needed. The lattice
//! wraps every 256 units on each axis, which lets patterns scroll a
//! coordinate with a 0..256 phase and loop seamlessly.
//!
//! `perlin3` returns roughly -1..1; the fractal wrappers take
//! `lacunarity`, `gain` and `octaves` in that order.

/// Deterministic integer mixing (no floats)
#[inline]
const fn hash(x: u64) -> u32 {
    // SplitMix64-style mixing, then fold down to u32.
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    #[allow(clippy::cast_possible_truncation)]
    {
        (z ^ (z >> 31)) as u32
    }
}

/// Hash one lattice corner, wrapping each axis at 256.
#[inline]
#[allow(clippy::cast_sign_loss)]
const fn corner(xi: i32, yi: i32, zi: i32) -> u32 {
    let x = (xi & 0xFF) as u64;
    let y = (yi & 0xFF) as u64;
    let z = (zi & 0xFF) as u64;
    hash(x | (y << 8) | (z << 16))
}

/// Gradient dot product for one corner (12 edge directions).
#[inline]
fn grad(h: u32, x: f32, y: f32, z: f32) -> f32 {
    let (u, v) = match h & 0xF {
        0 | 12 => (x, y),
        1 | 13 => (-x, y),
        2 => (x, -y),
        3 => (-x, -y),
        4 => (x, z),
        5 => (-x, z),
        6 => (x, -z),
        7 => (-x, -z),
        8 => (y, z),
        9 | 14 => (-y, z),
        10 => (y, -z),
        _ => (-y, -z),
    };
    u + v
}

/// Quintic fade curve (6t^5 - 15t^4 + 10t^3)
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// 3D gradient noise, roughly -1..1, wrapping every 256 units.
#[allow(clippy::cast_possible_truncation, clippy::many_single_char_names)]
pub fn perlin3(x: f32, y: f32, z: f32) -> f32 {
    let xf = libm::floorf(x);
    let yf = libm::floorf(y);
    let zf = libm::floorf(z);
    let (xi, yi, zi) = (xf as i32, yf as i32, zf as i32);
    let (fx, fy, fz) = (x - xf, y - yf, z - zf);

    let u = fade(fx);
    let v = fade(fy);
    let w = fade(fz);

    let g = |dx: i32, dy: i32, dz: i32| {
        #[allow(clippy::cast_precision_loss)]
        grad(
            corner(xi + dx, yi + dy, zi + dz),
            fx - dx as f32,
            fy - dy as f32,
            fz - dz as f32,
        )
    };

    let x00 = lerp(g(0, 0, 0), g(1, 0, 0), u);
    let x10 = lerp(g(0, 1, 0), g(1, 1, 0), u);
    let x01 = lerp(g(0, 0, 1), g(1, 0, 1), u);
    let x11 = lerp(g(0, 1, 1), g(1, 1, 1), u);

    let y0 = lerp(x00, x10, v);
    let y1 = lerp(x01, x11, v);

    lerp(y0, y1, w)
}

/// Fractal Brownian motion: summed noise octaves, roughly -1..1.
pub fn fbm(x: f32, y: f32, z: f32, lacunarity: f32, gain: f32, octaves: u32) -> f32 {
    let mut sum = 0.0;
    let mut amp = 1.0;
    let mut norm = 0.0;
    let mut freq = 1.0;
    for _ in 0..octaves {
        sum += perlin3(x * freq, y * freq, z * freq) * amp;
        norm += amp;
        amp *= gain;
        freq *= lacunarity;
    }
    if norm > 0.0 { sum / norm } else { 0.0 }
}

/// Ridged multifractal: inverted absolute noise, producing tendrils.
///
/// `offset` shifts the ridge; 1.0 is the classic value, slightly above
/// thickens the ridges.
pub fn ridge(
    x: f32,
    y: f32,
    z: f32,
    lacunarity: f32,
    gain: f32,
    offset: f32,
    octaves: u32,
) -> f32 {
    let mut sum = 0.0;
    let mut amp = 0.5;
    let mut freq = 1.0;
    let mut prev = 1.0;
    for _ in 0..octaves {
        let mut n = offset - libm::fabsf(perlin3(x * freq, y * freq, z * freq));
        n *= n;
        sum += n * amp * prev;
        prev = n;
        amp *= gain;
        freq *= lacunarity;
    }
    sum
}

/// Turbulence: summed absolute noise octaves, 0..~1.
pub fn turbulence(
    x: f32,
    y: f32,
    z: f32,
    lacunarity: f32,
    gain: f32,
    octaves: u32,
) -> f32 {
    let mut sum = 0.0;
    let mut amp = 1.0;
    let mut norm = 0.0;
    let mut freq = 1.0;
    for _ in 0..octaves {
        sum += libm::fabsf(perlin3(x * freq, y * freq, z * freq)) * amp;
        norm += amp;
        amp *= gain;
        freq *= lacunarity;
    }
    if norm > 0.0 { sum / norm } else { 0.0 }
}
