//! Deterministic pastel palettes for per-residue coloring.
//!
//! Colors cycle through a fixed 11-hue pattern (secondary, primary, then two
//! tertiary triads; pure red is reserved and never emitted). Each time the
//! pattern wraps, saturation and value step from the light pastel setting
//! toward the dark one so later colors stay distinguishable.

/// Hue pattern, as fractions of the color wheel.
const HUE_PATTERN: [f32; 11] = [
    0.17, 0.50, 0.83, // secondary
    0.33, 0.67, // primary (red omitted)
    0.08, 0.42, 0.75, // tertiary
    0.25, 0.58, 0.92, // tertiary
];

const SATURATION_LIGHT: f32 = 0.30;
const SATURATION_DARK: f32 = 0.90;
const VALUE_LIGHT: f32 = 0.70;
const VALUE_DARK: f32 = 0.60;

/// Chroma below which hue is undefined and the result is gray.
const CHROMA_EPSILON: f32 = 1e-4;

/// Convert HSV plus alpha to RGBA. All inputs in [0, 1]; hue wraps.
#[must_use]
pub fn hsva_to_rgba(h: f32, s: f32, v: f32, a: f32) -> [f32; 4] {
    let c = s * v;
    if c < CHROMA_EPSILON {
        return [v, v, v, a];
    }

    let h = h.rem_euclid(1.0);
    let x = c * (1.0 - ((6.0 * h) % 2.0 - 1.0).abs());
    let (r, g, b) = match ((6.0 * h) as u32).min(5) {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    [r + m, g + m, b + m, a]
}

/// Generate `n` visually distinct pastel colors with alpha `a`.
///
/// The sequence depends only on `n` and `a`.
#[must_use]
pub fn generate_pastel_colors(n: usize, a: f32) -> Vec<[f32; 4]> {
    if n == 0 {
        return Vec::new();
    }

    let cycles = n.div_ceil(HUE_PATTERN.len()) as f32;
    let delta_s = (SATURATION_LIGHT - SATURATION_DARK) / cycles;
    let delta_v = (VALUE_LIGHT - VALUE_DARK) / cycles;

    let mut s = SATURATION_LIGHT;
    let mut v = VALUE_LIGHT;
    let mut colors = Vec::with_capacity(n);
    for (i, &h) in HUE_PATTERN.iter().cycle().take(n).enumerate() {
        if i > 0 && i % HUE_PATTERN.len() == 0 {
            s -= delta_s;
            v -= delta_v;
        }
        colors.push(hsva_to_rgba(h, s, v, a));
    }
    colors
}

/// `n` copies of one color.
#[must_use]
pub fn repeat_color(color: [f32; 4], n: usize) -> Vec<[f32; 4]> {
    vec![color; n]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn primaries() {
        assert!(approx(hsva_to_rgba(0.0, 1.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]));
        assert!(approx(
            hsva_to_rgba(1.0 / 3.0, 1.0, 1.0, 0.5),
            [0.0, 1.0, 0.0, 0.5]
        ));
        assert!(approx(
            hsva_to_rgba(2.0 / 3.0, 1.0, 1.0, 1.0),
            [0.0, 0.0, 1.0, 1.0]
        ));
    }

    #[test]
    fn cyan_at_pastel_settings() {
        // c = 0.21, x = c, offset 0.49
        assert!(approx(
            hsva_to_rgba(0.5, 0.30, 0.70, 1.0),
            [0.49, 0.70, 0.70, 1.0]
        ));
    }

    #[test]
    fn zero_chroma_is_gray_at_value() {
        assert_eq!(hsva_to_rgba(0.4, 0.0, 0.6, 1.0), [0.6, 0.6, 0.6, 1.0]);
        assert_eq!(hsva_to_rgba(0.4, 1.0, 0.0, 1.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn max_channel_equals_value() {
        for i in 0..60 {
            let h = i as f32 / 60.0;
            let rgba = hsva_to_rgba(h, 0.5, 0.8, 1.0);
            let max = rgba[..3].iter().copied().fold(f32::MIN, f32::max);
            let min = rgba[..3].iter().copied().fold(f32::MAX, f32::min);
            assert!((max - 0.8).abs() < 1e-5, "h = {h}");
            assert!((max - min - 0.4).abs() < 1e-5, "h = {h}");
        }
    }

    #[test]
    fn first_three_are_secondary_hues() {
        let colors = generate_pastel_colors(3, 1.0);
        let expected: Vec<[f32; 4]> = [0.17, 0.50, 0.83]
            .iter()
            .map(|&h| hsva_to_rgba(h, 0.30, 0.70, 1.0))
            .collect();
        assert_eq!(colors, expected);
        assert_eq!(colors, generate_pastel_colors(3, 1.0));
    }

    #[test]
    fn red_is_never_emitted() {
        for c in generate_pastel_colors(50, 1.0) {
            let pure_red_hue = c[0] > c[1] && c[1] == c[2];
            assert!(!pure_red_hue, "{c:?}");
        }
    }

    #[test]
    fn later_cycles_change_saturation_and_value() {
        let colors = generate_pastel_colors(23, 0.8);
        assert_eq!(colors.len(), 23);
        // Same hue, next cycle: darker value and stronger saturation.
        let first = colors[0];
        let second = colors[11];
        let third = colors[22];
        let max = |c: [f32; 4]| c[0].max(c[1]).max(c[2]);
        assert!(max(second) < max(first));
        assert!(max(third) < max(second));
        assert!(colors.iter().all(|c| c[3] == 0.8));
    }

    #[test]
    fn prefix_within_first_cycle_is_stable() {
        let short = generate_pastel_colors(5, 1.0);
        let long = generate_pastel_colors(11, 1.0);
        assert_eq!(short[..], long[..5]);
    }

    #[test]
    fn empty_and_repeat() {
        assert!(generate_pastel_colors(0, 1.0).is_empty());
        let c = [0.1, 0.2, 0.3, 1.0];
        assert_eq!(repeat_color(c, 4), vec![c; 4]);
    }
}
