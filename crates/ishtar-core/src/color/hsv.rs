/// Color in HSV space.
///
/// `h` is in degrees `[0, 360)`; `s` and `v` are normalized `[0, 1]`.
///
/// Hue is mathematically undefined for achromatic colors; [`rgb_to_hsv`]
/// reports `h = 0, s = 0` there by convention. Because of that collapse,
/// controls that drag HSV values across frames must keep the `Hsv` value
/// itself as state — re-deriving it from the rounded RGB every frame makes
/// the hue jitter visibly near gray.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Converts normalized `[r, g, b]` to HSV via max/min/delta decomposition.
pub fn rgb_to_hsv(rgb: [f32; 3]) -> Hsv {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;

    // Achromatic: hue and saturation collapse to 0 by convention.
    if delta <= f32::EPSILON || max <= 0.0 {
        return Hsv::new(0.0, 0.0, v);
    }

    let s = delta / max;

    let mut h = if r >= max {
        // Between yellow and magenta.
        (g - b) / delta
    } else if g >= max {
        // Between cyan and yellow.
        2.0 + (b - r) / delta
    } else {
        // Between magenta and cyan.
        4.0 + (r - g) / delta
    };

    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsv::new(h, s, v)
}

/// Converts HSV back to normalized `[r, g, b]` with the sector formula.
pub fn hsv_to_rgb(hsv: Hsv) -> [f32; 3] {
    let Hsv { h, s, v } = hsv;

    // Gray short-circuit.
    if s <= 0.0 {
        return [v, v, v];
    }

    let h = if h >= 360.0 { 0.0 } else { h / 60.0 };
    let i = h.floor();
    let f = h - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (i as i32).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
