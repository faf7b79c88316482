//! WCAG luminance and legible label colors for swatches.
//!
//! Label color selection is a binary threshold on relative luminance: black
//! text on bright swatches, white text on dark ones. This is not a full
//! contrast-ratio search; it guarantees a legible label, not the best one.
//! [`contrast_ratio`] is provided for callers that want to report how
//! legible the chosen label actually is.

use crate::color::Rgb;

/// Luminance above which a swatch gets a black label.
pub const LABEL_THRESHOLD: f64 = 0.5;

/// Convert one sRGB component (0.0–1.0) to linear light.
///
/// Uses the WCAG 2.x breakpoint of 0.03928.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of 0–255 channels per WCAG.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(r: f64, g: f64, b: f64) -> f64 {
    let r_lin = srgb_to_linear(r / 255.0);
    let g_lin = srgb_to_linear(g / 255.0);
    let b_lin = srgb_to_linear(b / 255.0);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Pick a label color for text drawn on top of `(r, g, b)`.
///
/// Black when the luminance exceeds [`LABEL_THRESHOLD`], white otherwise.
#[must_use]
pub fn contrast_color(r: f64, g: f64, b: f64) -> Rgb {
    if relative_luminance(r, g, b) > LABEL_THRESHOLD {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(0.0, 0.0, 0.0);
        assert!(approx_eq(lum, 0.0, 1e-6), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(255.0, 255.0, 255.0);
        assert!(approx_eq(lum, 1.0, 1e-6), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_primaries() {
        assert!(approx_eq(relative_luminance(255.0, 0.0, 0.0), 0.2126, 1e-6));
        assert!(approx_eq(relative_luminance(0.0, 255.0, 0.0), 0.7152, 1e-6));
        assert!(approx_eq(relative_luminance(0.0, 0.0, 255.0), 0.0722, 1e-6));
    }

    #[test]
    fn luminance_mid_gray() {
        // sRGB 128 linearizes to ~0.2158.
        let lum = relative_luminance(128.0, 128.0, 128.0);
        assert!(approx_eq(lum, 0.2158, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn linear_segment_below_breakpoint() {
        // 10/255 ≈ 0.0392 sits just under the breakpoint.
        let c = 10.0 / 255.0;
        assert!(approx_eq(srgb_to_linear(c), c / 12.92, 1e-12));
    }

    #[test]
    fn luminance_is_monotonic_in_gray() {
        let mut last = -1.0;
        for v in 0..=255u8 {
            let lum = relative_luminance(f64::from(v), f64::from(v), f64::from(v));
            assert!(lum > last, "Not increasing at {v}");
            last = lum;
        }
    }

    // ── contrast_color ──────────────────────────────────────────────

    #[test]
    fn black_gets_white_label() {
        assert_eq!(contrast_color(0.0, 0.0, 0.0), Rgb::WHITE);
    }

    #[test]
    fn white_gets_black_label() {
        assert_eq!(contrast_color(255.0, 255.0, 255.0), Rgb::BLACK);
    }

    #[test]
    fn saturated_blue_gets_white_label() {
        // #3b82f6 has luminance ~0.23.
        assert_eq!(contrast_color(59.0, 130.0, 246.0), Rgb::WHITE);
    }

    #[test]
    fn yellow_gets_black_label() {
        assert_eq!(contrast_color(250.0, 204.0, 21.0), Rgb::BLACK);
    }

    #[test]
    fn threshold_is_exclusive() {
        // Gray 187 is just under 0.5, gray 188 just over.
        assert!(relative_luminance(187.0, 187.0, 187.0) < LABEL_THRESHOLD);
        assert!(relative_luminance(188.0, 188.0, 188.0) > LABEL_THRESHOLD);
        assert_eq!(contrast_color(187.0, 187.0, 187.0), Rgb::WHITE);
        assert_eq!(contrast_color(188.0, 188.0, 188.0), Rgb::BLACK);
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-6), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Rgb::new(204.0, 51.0, 77.0);
        let b = Rgb::new(26.0, 26.0, 102.0);
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    #[test]
    fn label_contrast_has_a_floor() {
        // A threshold at 0.5 guarantees (0.5 + 0.05) / 0.05 = 11 for black
        // labels and 1.05 / 0.55 ≈ 1.91 for white ones. Orange-ish colors
        // near the threshold sit close to that lower bound.
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let c = Rgb::new(f64::from(r), f64::from(g), f64::from(b));
                    let ratio = contrast_ratio(c, c.contrast_color());
                    assert!(ratio >= 1.9, "Label contrast {ratio} for {c}");
                }
            }
        }
    }
}
