//! Loading generation parameters and seeds from TOML.
//!
//! Keys are kebab-case. Curves are either a name (`"ease-out-quad"`) or an
//! inline table carrying Bezier control points:
//!
//! ```toml
//! hue-start = 174.4
//! hue-end = 168.4
//! hue-curve = { cubic-bezier = [0.6, 0.0, 0.8, 0.4] }
//! sat-start = 10
//! sat-end = 100
//! val-start = 92
//! val-end = 39
//! format = "hex"
//! ```
//!
//! Omitted optional keys take the same defaults as
//! [`GenerationParameters::new`].

use serde::{Deserialize, Serialize};
use tonal_color::{Color, OutputFormat};
use tracing::debug;

use crate::error::Result;
use crate::palette::Palette;
use crate::seed::{SeedCalibration, derive_palette_with};
use crate::shades::GenerationParameters;

impl GenerationParameters {
    /// Parse parameters from a TOML document.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Config`](crate::PaletteError::Config) on malformed
    /// TOML, unknown curve names, or Bezier x values outside [0, 1].
    pub fn from_toml(input: &str) -> Result<Self> {
        let params: Self = toml::from_str(input)?;
        debug!(steps = params.steps, format = %params.format, "loaded generation parameters");
        Ok(params)
    }
}

/// A seed plus the knobs that shape its palette.
///
/// ```toml
/// seed = "#009688"
/// format = "rgb"
///
/// [calibration]
/// theta = 2.6
/// log-base = "natural"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeedConfig {
    /// Any color string [`Color`] parses: hex, `rgb(..)` or `hsv(..)`.
    pub seed: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub calibration: SeedCalibration,
}

impl SeedConfig {
    /// Parse a seed configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Config`](crate::PaletteError::Config) on malformed
    /// TOML. The seed string itself is only checked by [`Self::derive`].
    pub fn from_toml(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Parse the seed and derive its palette.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Color`](crate::PaletteError::Color) when the seed is
    /// not a color.
    pub fn derive(&self) -> Result<Palette> {
        let seed: Color = self.seed.parse()?;
        derive_palette_with(seed, self.format, &self.calibration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{CubicBezier, Curve, PALETTE_HUE};
    use crate::error::PaletteError;
    use crate::palette::ShadeKey;
    use crate::seed::{LogBase, derive_palette_from_seed};
    use crate::shades::generate_shades;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_document_takes_defaults() {
        let params = GenerationParameters::from_toml(
            "hue-start = 230\nhue-end = 225\n\
             sat-start = 7\nsat-end = 70\n\
             val-start = 94\nval-end = 47\n",
        )
        .unwrap();
        assert!(matches!(params.hue_curve, Curve::EaseInQuad));
        assert!(matches!(params.sat_curve, Curve::EaseOutQuad));
        assert!(matches!(params.val_curve, Curve::EaseOutQuad));
        assert_eq!(params.sat_rate, 100.0);
        assert_eq!(params.steps, 10);
        assert_eq!(params.format, OutputFormat::Structured);
    }

    #[test]
    fn curves_by_name_and_by_points() {
        let params = GenerationParameters::from_toml(
            r#"
            hue-start = 174.4
            hue-end = 168.4
            hue-curve = { cubic-bezier = [0.6, 0.0, 0.8, 0.4] }
            sat-start = 10
            sat-end = 100
            sat-curve = "linear"
            sat-rate = 90
            val-start = 92
            val-end = 39
            val-curve = "ease-in-out-sine"
            steps = 12
            format = "hsv"
            "#,
        )
        .unwrap();
        match (params.hue_curve, PALETTE_HUE) {
            (Curve::CubicBezier(parsed), Curve::CubicBezier(expected)) => {
                assert_eq!(parsed, expected);
            }
            other => panic!("unexpected curves: {other:?}"),
        }
        assert!(matches!(params.sat_curve, Curve::Linear));
        assert!(matches!(params.val_curve, Curve::EaseInOutSine));
        assert_eq!(params.sat_rate, 90.0);
        assert_eq!(params.format, OutputFormat::Hsv);
        assert_eq!(generate_shades(&params).unwrap().len(), 12);
    }

    #[test]
    fn rejects_bad_documents() {
        const RANGES: &str = "hue-start = 0\nhue-end = 0\n\
                              sat-start = 0\nsat-end = 0\n\
                              val-start = 0\nval-end = 0\n";
        let cases = [
            "hue-start = 1".to_owned(),
            format!("{RANGES}hue-curve = \"wobbly\""),
            format!("{RANGES}hue-curve = {{ cubic-bezier = [1.5, 0, 0.5, 1] }}"),
        ];
        for input in &cases {
            let err = GenerationParameters::from_toml(input).unwrap_err();
            assert!(matches!(err, PaletteError::Config(_)), "{input}: {err}");
        }
    }

    #[test]
    fn seed_config_matches_direct_derivation() {
        let config = SeedConfig::from_toml("seed = \"#3f51b5\"\nformat = \"hex\"\n").unwrap();
        assert_eq!(config.calibration, SeedCalibration::default());

        let seed = Color::hex("#3f51b5").unwrap();
        let direct = derive_palette_from_seed(seed, OutputFormat::Hex).unwrap();
        assert_eq!(config.derive().unwrap(), direct);
    }

    #[test]
    fn seed_config_with_calibration() {
        let config = SeedConfig::from_toml(
            "seed = \"hsv(174, 100%, 59%)\"\n\n\
             [calibration]\ntheta = 2.6\nlog-base = \"natural\"\n",
        )
        .unwrap();
        assert_eq!(config.format, OutputFormat::Hex);
        let expected = SeedCalibration {
            theta: 2.6,
            log_base: LogBase::Natural,
        };
        assert_eq!(config.calibration, expected);

        let palette = config.derive().unwrap();
        assert_eq!(palette[ShadeKey::S500].color, Color::hsv(174.0, 100.0, 59.0));
    }

    #[test]
    fn seed_config_reports_bad_seeds_on_derive() {
        let config = SeedConfig::from_toml("seed = \"teal\"").unwrap();
        assert!(matches!(config.derive(), Err(PaletteError::Color(_))));
    }

    #[test]
    fn parameters_round_trip_through_toml() {
        let bezier = CubicBezier::new(0.1, -0.1, 0.9, 0.9).unwrap();
        let params = GenerationParameters::new((10.0, 20.0), (30.0, 40.0), (90.0, 50.0))
            .with_curves(Curve::Linear, Curve::CubicBezier(bezier), Curve::EaseOutCubic);
        let text = toml::to_string(&params).unwrap();
        assert!(text.contains("cubic-bezier = [0.1, -0.1, 0.9, 0.9]"), "{text}");
        let back = GenerationParameters::from_toml(&text).unwrap();
        assert_eq!(generate_shades(&back).unwrap(), generate_shades(&params).unwrap());
    }
}
