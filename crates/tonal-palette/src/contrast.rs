//! Black or white text, whichever reads on a given shade.
//!
//! The decision is a pure luminance threshold: shades darker than a third
//! of full relative luminance get white text, everything else black.

use tonal_color::Color;
use tonal_color::color::srgb_to_linear;

/// Luminance below which text switches from black to white.
pub const CONTRAST_THRESHOLD: f64 = 1.0 / 3.0;

/// WCAG relative luminance, 0 for black through 1 for white.
///
/// Each linearized sRGB channel is weighted by its contribution to
/// perceived brightness (green dominates, blue barely registers).
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    const WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
    let (r, g, b) = color.to_srgb();
    [r, g, b]
        .into_iter()
        .zip(WEIGHTS)
        .map(|(channel, weight)| weight * srgb_to_linear(channel))
        .sum()
}

/// How well `text` reads on `background`, as a WCAG ratio in [1, 21].
///
/// Luminances are offset by 0.05 for ambient flare; the brighter one is the
/// numerator, so swapping the arguments gives the same ratio.
#[must_use]
pub fn contrast_ratio(text: Color, background: Color) -> f64 {
    let flare = |color| relative_luminance(color) + 0.05;
    let (a, b) = (flare(text), flare(background));
    a.max(b) / a.min(b)
}

/// White text for dark backgrounds, black text otherwise.
#[must_use]
pub fn contrast_text(background: Color) -> Color {
    if relative_luminance(background) < CONTRAST_THRESHOLD {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(relative_luminance(Color::BLACK), 0.0, 1e-9));
        assert!(approx_eq(relative_luminance(Color::WHITE), 1.0, 1e-9));
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance(Color::rgb8(255, 0, 0)), 0.2126, 1e-6));
        assert!(approx_eq(relative_luminance(Color::rgb8(0, 255, 0)), 0.7152, 1e-6));
        assert!(approx_eq(relative_luminance(Color::rgb8(0, 0, 255)), 0.0722, 1e-6));
    }

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-6), "B/W contrast: {ratio}");
        assert!(approx_eq(contrast_ratio(Color::WHITE, Color::BLACK), ratio, 1e-12));
    }

    #[test]
    fn dark_backgrounds_get_white_text() {
        for hex in ["#000000", "#009688", "#3f51b5", "#004d40", "#ff0000"] {
            let bg = Color::hex(hex).unwrap();
            assert_eq!(contrast_text(bg), Color::WHITE, "{hex}");
        }
    }

    #[test]
    fn light_backgrounds_get_black_text() {
        for hex in ["#ffffff", "#e0f2f1", "#ffeb3b", "#a7ffeb", "#00ff00"] {
            let bg = Color::hex(hex).unwrap();
            assert_eq!(contrast_text(bg), Color::BLACK, "{hex}");
        }
    }

    #[test]
    fn threshold_is_strict() {
        // A gray sitting just above one third of full luminance reads black.
        let gray = Color::rgb8(157, 157, 157);
        assert!(relative_luminance(gray) >= CONTRAST_THRESHOLD);
        assert_eq!(contrast_text(gray), Color::BLACK);
        let darker = Color::rgb8(156, 156, 156);
        assert!(relative_luminance(darker) < CONTRAST_THRESHOLD);
        assert_eq!(contrast_text(darker), Color::WHITE);
    }

    #[test]
    fn chosen_text_clears_minimum_contrast() {
        for hex in ["#26a69a", "#80cbc4", "#795548", "#9e9e9e", "#e91e63"] {
            let bg = Color::hex(hex).unwrap();
            let chosen = contrast_ratio(contrast_text(bg), bg);
            assert!(chosen > 2.5, "{hex}: {chosen}");
        }
    }
}
