//! Seed derivation — one color in, a full palette out.
//!
//! The seed's hue, saturation and value are turned into the six range
//! endpoints a palette needs. The curves only approximate a hand-tuned ramp,
//! so once the palette is generated its `500` entry is replaced by the seed
//! itself: the midpoint of every derived palette is exact.

use serde::{Deserialize, Serialize};
use tonal_color::{Color, OutputFormat};
use tracing::debug;

use crate::error::Result;
use crate::palette::{Palette, PaletteEntry, ShadeKey, generate_material_ui_palette};
use crate::range::round_half_up;
use crate::shades::GenerationParameters;

/// Angle (radians) in the value-start formula.
///
/// Calibrated by eye rather than derived; 2.6 is also in use.
pub const VALUE_START_THETA: f64 = 2.65;

/// Logarithm used in the value-start formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogBase {
    #[default]
    Ten,
    Natural,
}

impl LogBase {
    #[must_use]
    pub fn log(self, x: f64) -> f64 {
        match self {
            Self::Ten => x.log10(),
            Self::Natural => x.ln(),
        }
    }
}

/// Tunable constants of the value-start formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SeedCalibration {
    pub theta: f64,
    pub log_base: LogBase,
}

impl Default for SeedCalibration {
    fn default() -> Self {
        Self {
            theta: VALUE_START_THETA,
            log_base: LogBase::Ten,
        }
    }
}

impl SeedCalibration {
    /// Brightness of the lightest shade for a seed of value `x` (percent).
    ///
    /// Maps 0..=100 onto roughly 20..=100, rising steeply for dark seeds so
    /// even a near-black seed gets a usable light end.
    #[must_use]
    pub fn value_start(&self, x: f64) -> f64 {
        let numerator = 100.0 - x / 100.0 - x.sqrt() + x * self.theta.cos();
        let denominator = 2.0 * self.log_base.log(x + 1.0) + 1.25;
        round_half_up(100.0 - numerator / denominator)
    }
}

/// The generation parameters a seed implies.
///
/// ```text
/// hue: h → (h + 354) mod 360
/// sat: round(s·10) → round(min(100, s·108))
/// val: value_start(v·100) → round(v·66)
/// ```
///
/// with `s` and `v` as fractions of 1.
#[must_use]
pub fn seed_parameters(
    seed: Color,
    format: OutputFormat,
    calibration: &SeedCalibration,
) -> GenerationParameters {
    let (h, s, v) = seed.to_hsv();
    let (s, v) = (s / 100.0, v / 100.0);

    let hue = (h, (h + 354.0) % 360.0);
    let sat = (round_half_up(s * 10.0), round_half_up((s * 108.0).min(100.0)));
    let val = (calibration.value_start(v * 100.0), round_half_up(v * 66.0));

    debug!(?seed, ?hue, ?sat, ?val, "derived seed endpoints");
    GenerationParameters::for_palette(hue, sat, val).with_format(format)
}

/// Derive a palette from `seed` with the default calibration.
///
/// Entry `500` is always exactly `seed`. Pass `OutputFormat::default()` for
/// the usual hex strings.
///
/// # Errors
///
/// Propagates generation errors; none occur for finite seeds.
pub fn derive_palette_from_seed(seed: Color, format: OutputFormat) -> Result<Palette> {
    derive_palette_with(seed, format, &SeedCalibration::default())
}

/// [`derive_palette_from_seed`] with explicit calibration constants.
///
/// # Errors
///
/// Propagates generation errors.
pub fn derive_palette_with(
    seed: Color,
    format: OutputFormat,
    calibration: &SeedCalibration,
) -> Result<Palette> {
    let params = seed_parameters(seed, format, calibration);
    let mut palette = generate_material_ui_palette(&params)?;
    palette.replace(ShadeKey::S500, PaletteEntry::new(seed));
    Ok(palette)
}

/// Parse `input` as a color and derive its palette.
///
/// # Errors
///
/// [`PaletteError::Color`](crate::PaletteError::Color) when `input` is not a
/// color; the parse error is passed through unchanged.
pub fn derive_palette_from_str(input: &str, format: OutputFormat) -> Result<Palette> {
    let seed: Color = input.parse()?;
    derive_palette_from_seed(seed, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use crate::hue::shortest_distance;
    use pretty_assertions::assert_eq;
    use tonal_color::ColorError;

    /// Reference teal ramp, `50` through `900`.
    #[rustfmt::skip]
    const TEAL: [&str; 10] = [
        "#e0f2f1", "#b2dfdb", "#80cbc4", "#4db6ac", "#26a69a",
        "#009688", "#00897b", "#00796b", "#00695c", "#004d40",
    ];

    fn teal_seed() -> Color {
        Color::hex("#009688").unwrap()
    }

    #[test]
    fn teal_endpoints() {
        let p = seed_parameters(teal_seed(), OutputFormat::Hex, &SeedCalibration::default());
        assert!((p.hue_start - 174.4).abs() < 1e-9);
        assert!((p.hue_end - 168.4).abs() < 1e-9);
        assert_eq!((p.sat_start, p.sat_end), (10.0, 100.0));
        assert_eq!((p.val_start, p.val_end), (92.0, 39.0));
        assert_eq!(p.format, OutputFormat::Hex);
    }

    #[test]
    fn value_start_calibrations() {
        let ten = SeedCalibration::default();
        let natural = SeedCalibration {
            theta: 2.6,
            log_base: LogBase::Natural,
        };
        assert_eq!(ten.value_start(0.0), 20.0);
        assert_eq!(ten.value_start(100.0), 100.0);
        assert_eq!(ten.value_start(58.823_529_411_764_7), 92.0);
        assert_eq!(natural.value_start(58.823_529_411_764_7), 96.0);
        for x in 0..=100 {
            let start = ten.value_start(f64::from(x));
            assert!((20.0..=100.0).contains(&start), "{x} → {start}");
        }
    }

    #[test]
    fn midpoint_is_the_exact_seed() {
        for hex in [
            "#009688", "#3f51b5", "#f44336", "#ffeb3b", "#9e9e9e", "#000000", "#ffffff",
        ] {
            let seed = Color::hex(hex).unwrap();
            for &format in OutputFormat::all() {
                let palette = derive_palette_from_seed(seed, format).unwrap();
                assert_eq!(palette[ShadeKey::S500].color, seed, "{hex} as {format}");
                assert_eq!(
                    palette[ShadeKey::S500].contrast_text,
                    crate::contrast::contrast_text(seed)
                );
            }
        }
    }

    #[test]
    fn teal_ramp_tracks_the_reference() {
        let palette = derive_palette_from_seed(teal_seed(), OutputFormat::Hex).unwrap();
        for (shade, reference) in palette.tonal().into_iter().zip(TEAL) {
            let expected = Color::hex(reference).unwrap();
            let hue = shortest_distance(shade.h, expected.h);
            assert!(hue <= 5.0, "{reference}: hue off by {hue} ({shade:?})");
            assert!((shade.s - expected.s).abs() <= 15.0, "{reference}: saturation {shade:?}");
            assert!((shade.v - expected.v).abs() <= 15.0, "{reference}: value {shade:?}");
        }
    }

    #[test]
    fn teal_accents_are_more_vivid() {
        let palette = derive_palette_from_seed(teal_seed(), OutputFormat::Hex).unwrap();
        for key in ShadeKey::ACCENT {
            let accent = key.accent().unwrap();
            let a = palette[key].color;
            let t = palette.tonal()[accent.source_index()];
            assert!(a.h > t.h, "{key} hue");
            assert!(a.v > t.v, "{key} value");
            // Saturation saturates: a tonal shade already at 100 stays there.
            if t.s < 100.0 {
                assert!(a.s > t.s, "{key} saturation");
            } else {
                assert_eq!(a.s, 100.0, "{key} saturation");
            }
        }
    }

    #[test]
    fn default_format_renders_hex() {
        let palette = derive_palette_from_seed(teal_seed(), OutputFormat::default()).unwrap();
        assert_eq!(palette.format(), OutputFormat::Hex);
        let (color, _) = palette.render(ShadeKey::S500);
        assert_eq!(color.as_text(), Some("#009688"));
    }

    #[test]
    fn parses_string_seeds() {
        let from_str = derive_palette_from_str("rgb(0, 150, 136)", OutputFormat::Rgb).unwrap();
        assert_eq!(from_str[ShadeKey::S500].color, teal_seed());
        let (color, text) = from_str.render(ShadeKey::S500);
        assert_eq!(color.as_text(), Some("rgb(0, 150, 136)"));
        assert_eq!(text.as_text(), Some("rgb(255, 255, 255)"));
    }

    #[test]
    fn malformed_seeds_propagate_the_color_error() {
        let err = derive_palette_from_str("#12", OutputFormat::Hex).unwrap_err();
        match err {
            PaletteError::Color(inner) => {
                assert_eq!(inner, ColorError::Malformed("#12".to_owned()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn near_red_seed_wraps_hue() {
        // Hue 2 ends at (2 + 354) % 360 = 356: the arc crosses zero.
        let seed = Color::hsv(2.0, 80.0, 90.0);
        let palette = derive_palette_from_seed(seed, OutputFormat::Structured).unwrap();
        for (key, entry) in palette.iter() {
            let h = entry.color.h;
            assert!(h <= 8.0 || h >= 354.0, "{key}: hue {h}");
        }
    }
}
