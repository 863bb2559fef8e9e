//! Shade synthesis — a curve-paced gradient across hue, saturation and value.
//!
//! Each channel has its own range and its own curve. Hue and saturation
//! progress from start to end as the step index grows; value runs the other
//! way, which is what turns a start/end pair into a light-to-dark ramp.

use serde::{Deserialize, Serialize};
use tonal_color::{Color, OutputFormat, Rendered};
use tracing::trace;

use crate::curve::{self, Curve, PALETTE_HUE, PALETTE_SAT, PALETTE_VAL};
use crate::error::Result;
use crate::hue::calc_hue_distance;
use crate::range::distribute;

/// Number of tonal shades in a palette.
pub const SHADE_STEPS: usize = 10;

/// Everything [`generate_shades`] needs.
///
/// `hue_end` encodes direction as well as angle: it may exceed 360 or sit
/// below `hue_start`. Saturation and value are percents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GenerationParameters {
    pub hue_start: f64,
    pub hue_end: f64,
    #[serde(default = "default_hue_curve")]
    pub hue_curve: Curve,

    pub sat_start: f64,
    pub sat_end: f64,
    #[serde(default = "default_sat_curve")]
    pub sat_curve: Curve,
    /// Percentage applied to every mapped saturation (100 = unchanged).
    #[serde(default = "default_sat_rate")]
    pub sat_rate: f64,

    pub val_start: f64,
    pub val_end: f64,
    #[serde(default = "default_val_curve")]
    pub val_curve: Curve,

    /// Number of shades to produce; at least 2.
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// How shades are rendered for output.
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

const fn default_hue_curve() -> Curve {
    Curve::EaseInQuad
}

const fn default_sat_curve() -> Curve {
    Curve::EaseOutQuad
}

const fn default_val_curve() -> Curve {
    Curve::EaseOutQuad
}

const fn default_sat_rate() -> f64 {
    100.0
}

const fn default_steps() -> usize {
    SHADE_STEPS
}

const fn default_format() -> OutputFormat {
    OutputFormat::Structured
}

impl GenerationParameters {
    /// Parameters with the generic easing defaults: ease-in hue, ease-out
    /// saturation and value, 10 steps, structured output.
    #[must_use]
    pub const fn new(hue: (f64, f64), sat: (f64, f64), val: (f64, f64)) -> Self {
        Self {
            hue_start: hue.0,
            hue_end: hue.1,
            hue_curve: default_hue_curve(),
            sat_start: sat.0,
            sat_end: sat.1,
            sat_curve: default_sat_curve(),
            sat_rate: default_sat_rate(),
            val_start: val.0,
            val_end: val.1,
            val_curve: default_val_curve(),
            steps: default_steps(),
            format: default_format(),
        }
    }

    /// Parameters with the palette defaults: the three calibrated palette
    /// curves and hex output.
    #[must_use]
    pub const fn for_palette(hue: (f64, f64), sat: (f64, f64), val: (f64, f64)) -> Self {
        Self::new(hue, sat, val)
            .with_curves(PALETTE_HUE, PALETTE_SAT, PALETTE_VAL)
            .with_format(OutputFormat::Hex)
    }

    /// Replace all three channel curves.
    #[must_use]
    pub const fn with_curves(mut self, hue: Curve, sat: Curve, val: Curve) -> Self {
        self.hue_curve = hue;
        self.sat_curve = sat;
        self.val_curve = val;
        self
    }

    #[must_use]
    pub const fn with_sat_rate(mut self, sat_rate: f64) -> Self {
        self.sat_rate = sat_rate;
        self
    }

    #[must_use]
    pub const fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Generate `params.steps` shades, index 0 at the gradient start.
///
/// Per step, the hue sample is mapped onto the directed arc from
/// [`calc_hue_distance`], saturation onto `[sat_start, sat_end]` scaled by
/// `sat_rate`, and the reversed value sample onto `[val_end, val_start]`.
/// Each channel is rounded up to a whole number; hue wraps into [0, 360)
/// and saturation and value are capped at 100.
///
/// # Errors
///
/// [`PaletteError::InvalidArgument`](crate::PaletteError::InvalidArgument)
/// when `steps < 2`, and
/// [`PaletteError::UnresolvedHueArc`](crate::PaletteError::UnresolvedHueArc)
/// for non-finite hues.
pub fn generate_shades(params: &GenerationParameters) -> Result<Vec<Color>> {
    let steps = params.steps;
    let hues = curve::sample(params.hue_curve, steps)?;
    let sats = curve::sample(params.sat_curve, steps)?;
    let mut vals = curve::sample(params.val_curve, steps)?;
    vals.reverse();

    let hue_arc = calc_hue_distance(params.hue_start, params.hue_end)?;
    let sat_range = (params.sat_start, params.sat_end);
    let val_range = (params.val_end, params.val_start);
    let sat_scale = params.sat_rate / 100.0;

    hues.iter()
        .zip(&sats)
        .zip(&vals)
        .enumerate()
        .map(|(step, ((&h, &s), &v))| {
            let hue = distribute(h, (0.0, 1.0), hue_arc)?.ceil();
            let sat = (distribute(s, (0.0, 1.0), sat_range)? * sat_scale).ceil().min(100.0);
            let val = distribute(v, (0.0, 1.0), val_range)?.ceil().min(100.0);
            trace!(step, hue, sat, val, "synthesized shade");
            Ok(Color::hsv(hue, sat, val))
        })
        .collect()
}

/// [`generate_shades`], with each shade rendered in `params.format`.
///
/// # Errors
///
/// Same as [`generate_shades`].
pub fn render_shades(params: &GenerationParameters) -> Result<Vec<Rendered>> {
    Ok(generate_shades(params)?
        .into_iter()
        .map(|shade| params.format.apply(shade))
        .collect())
}
