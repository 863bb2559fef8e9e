//! Easing curves — how fast a channel moves across the shade ramp.
//!
//! A curve maps a normalized parameter `t` in [0, 1] to a progress value.
//! Most curves stay in [0, 1], but a cubic Bezier may overshoot; the range
//! mapper clamps whatever comes out.
//!
//! Named easings are the usual CSS cubic-Bezier approximations. The three
//! `PALETTE_*` curves are the defaults for palette generation, calibrated
//! so a ramp derived from a seed lands close to hand-tuned design-system
//! ramps.

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

// ---------------------------------------------------------------------------
// Curve
// ---------------------------------------------------------------------------

/// An interpolation pacing function.
///
/// Curves are immutable values; `evaluate` is pure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Curve {
    /// `t` unchanged.
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    /// A custom cubic Bezier through (0,0) and (1,1).
    CubicBezier(CubicBezier),
    /// Any pure function of `t`. Not serializable.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

/// Default hue pacing for palettes: holds the seed hue, then drifts late.
pub const PALETTE_HUE: Curve = Curve::CubicBezier(CubicBezier::new_unchecked(0.6, 0.0, 0.8, 0.4));

/// Default saturation pacing for palettes: overshoots so the darker half of
/// the ramp sits at the saturation ceiling.
pub const PALETTE_SAT: Curve = Curve::CubicBezier(CubicBezier::new_unchecked(0.2, 0.0, 0.65, 1.6));

/// Default value pacing for palettes: close to linear with soft ends.
pub const PALETTE_VAL: Curve = Curve::CubicBezier(CubicBezier::new_unchecked(0.1, -0.1, 0.9, 0.9));

impl Curve {
    /// Evaluate the curve at `t`.
    #[must_use]
    pub fn evaluate(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::CubicBezier(bezier) => bezier.evaluate(t),
            Self::Custom(f) => f(t),
            named => named.bezier().map_or(t, |bezier| bezier.evaluate(t)),
        }
    }

    /// The control points behind a named easing or a custom Bezier.
    #[must_use]
    pub const fn bezier(self) -> Option<CubicBezier> {
        let points = match self {
            Self::EaseInQuad => (0.55, 0.085, 0.68, 0.53),
            Self::EaseOutQuad => (0.25, 0.46, 0.45, 0.94),
            Self::EaseInOutQuad => (0.455, 0.03, 0.515, 0.955),
            Self::EaseInCubic => (0.55, 0.055, 0.675, 0.19),
            Self::EaseOutCubic => (0.215, 0.61, 0.355, 1.0),
            Self::EaseInOutCubic => (0.645, 0.045, 0.355, 1.0),
            Self::EaseInSine => (0.47, 0.0, 0.745, 0.715),
            Self::EaseOutSine => (0.39, 0.575, 0.565, 1.0),
            Self::EaseInOutSine => (0.445, 0.05, 0.55, 0.95),
            Self::CubicBezier(bezier) => return Some(bezier),
            Self::Linear | Self::Custom(_) => return None,
        };
        Some(CubicBezier::new_unchecked(points.0, points.1, points.2, points.3))
    }

    /// Name of a named curve, as used in configuration files.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "ease-in-quad",
            Self::EaseOutQuad => "ease-out-quad",
            Self::EaseInOutQuad => "ease-in-out-quad",
            Self::EaseInCubic => "ease-in-cubic",
            Self::EaseOutCubic => "ease-out-cubic",
            Self::EaseInOutCubic => "ease-in-out-cubic",
            Self::EaseInSine => "ease-in-sine",
            Self::EaseOutSine => "ease-out-sine",
            Self::EaseInOutSine => "ease-in-out-sine",
            Self::CubicBezier(_) | Self::Custom(_) => return None,
        })
    }

    /// Look up a named curve (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::named().iter().find(|c| c.name() == Some(lower.as_str())).copied()
    }

    /// All named curves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn named() -> &'static [Self] {
        &[
            Self::Linear,
            Self::EaseInQuad, Self::EaseOutQuad, Self::EaseInOutQuad,
            Self::EaseInCubic, Self::EaseOutCubic, Self::EaseInOutCubic,
            Self::EaseInSine, Self::EaseOutSine, Self::EaseInOutSine,
        ]
    }
}

/// Sample `curve` at `steps` evenly spaced parameters `t = i / (steps - 1)`.
///
/// # Errors
///
/// [`PaletteError::InvalidArgument`] when `steps < 2`; the spacing is
/// undefined for a single sample.
pub fn sample(curve: Curve, steps: usize) -> Result<Vec<f64>> {
    if steps < 2 {
        return Err(PaletteError::InvalidArgument(format!(
            "curve sampling needs at least 2 steps, got {steps}"
        )));
    }
    let last = (steps - 1) as f64;
    Ok((0..steps).map(|i| curve.evaluate(i as f64 / last)).collect())
}

// ---------------------------------------------------------------------------
// CubicBezier
// ---------------------------------------------------------------------------

const NEWTON_ITERATIONS: usize = 4;
const NEWTON_MIN_SLOPE: f64 = 0.001;
const SUBDIVISION_PRECISION: f64 = 0.000_000_1;
const SUBDIVISION_MAX_ITERATIONS: usize = 10;
const SPLINE_TABLE_SIZE: usize = 11;
const SAMPLE_STEP: f64 = 1.0 / (SPLINE_TABLE_SIZE - 1) as f64;

/// A CSS-style timing curve from (0,0) to (1,1) with control points
/// (x1, y1) and (x2, y2).
///
/// The x coordinates must lie in [0, 1] so the curve is a function of x;
/// the y coordinates are free, which lets a curve overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Create a curve, validating the x control coordinates.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidArgument`] when `x1` or `x2` is outside [0, 1].
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(PaletteError::InvalidArgument(format!(
                "bezier x values must be in [0, 1], got x1 = {x1}, x2 = {x2}"
            )));
        }
        Ok(Self::new_unchecked(x1, y1, x2, y2))
    }

    const fn new_unchecked(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Control points as `[x1, y1, x2, y2]`.
    #[must_use]
    pub const fn points(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Evaluate the curve's y at horizontal position `x`.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn evaluate(self, x: f64) -> f64 {
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return x;
        }
        // Exact endpoints, independent of solver precision.
        if x == 0.0 || x == 1.0 {
            return x;
        }
        calc_bezier(self.t_for_x(x), self.y1, self.y2)
    }

    /// Invert x(t) with a sample table, Newton–Raphson and bisection.
    fn t_for_x(self, x: f64) -> f64 {
        let samples: [f64; SPLINE_TABLE_SIZE] =
            std::array::from_fn(|i| calc_bezier(i as f64 * SAMPLE_STEP, self.x1, self.x2));

        let mut interval_start = 0.0;
        let mut current = 1;
        let last = SPLINE_TABLE_SIZE - 1;
        while current != last && samples[current] <= x {
            interval_start += SAMPLE_STEP;
            current += 1;
        }
        current -= 1;

        let dist = (x - samples[current]) / (samples[current + 1] - samples[current]);
        #[allow(clippy::suboptimal_flops)]
        let guess = interval_start + dist * SAMPLE_STEP;

        let initial_slope = slope(guess, self.x1, self.x2);
        if initial_slope >= NEWTON_MIN_SLOPE {
            self.newton_raphson(x, guess)
        } else if initial_slope == 0.0 {
            guess
        } else {
            self.binary_subdivide(x, interval_start, interval_start + SAMPLE_STEP)
        }
    }

    #[allow(clippy::float_cmp)]
    fn newton_raphson(self, x: f64, mut guess: f64) -> f64 {
        for _ in 0..NEWTON_ITERATIONS {
            let current_slope = slope(guess, self.x1, self.x2);
            if current_slope == 0.0 {
                return guess;
            }
            guess -= (calc_bezier(guess, self.x1, self.x2) - x) / current_slope;
        }
        guess
    }

    fn binary_subdivide(self, x: f64, mut a: f64, mut b: f64) -> f64 {
        let mut t = a;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            t = a + (b - a) / 2.0;
            let error = calc_bezier(t, self.x1, self.x2) - x;
            if error > 0.0 {
                b = t;
            } else {
                a = t;
            }
            if error.abs() <= SUBDIVISION_PRECISION {
                break;
            }
        }
        t
    }
}

impl TryFrom<[f64; 4]> for CubicBezier {
    type Error = PaletteError;

    fn try_from([x1, y1, x2, y2]: [f64; 4]) -> Result<Self> {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<CubicBezier> for [f64; 4] {
    fn from(bezier: CubicBezier) -> Self {
        bezier.points()
    }
}

// Polynomial coefficients for one axis of the curve. Plain arithmetic
// rather than fused multiply-add keeps results bit-compatible with other
// bezier-easing implementations.
#[inline]
#[allow(clippy::suboptimal_flops)]
fn coeff_a(a1: f64, a2: f64) -> f64 {
    1.0 - 3.0 * a2 + 3.0 * a1
}

#[inline]
#[allow(clippy::suboptimal_flops)]
fn coeff_b(a1: f64, a2: f64) -> f64 {
    3.0 * a2 - 6.0 * a1
}

#[inline]
fn coeff_c(a1: f64) -> f64 {
    3.0 * a1
}

/// Position along one axis at parameter `t`.
#[inline]
#[allow(clippy::suboptimal_flops)]
fn calc_bezier(t: f64, a1: f64, a2: f64) -> f64 {
    ((coeff_a(a1, a2) * t + coeff_b(a1, a2)) * t + coeff_c(a1)) * t
}

/// d(axis)/dt at parameter `t`.
#[inline]
#[allow(clippy::suboptimal_flops)]
fn slope(t: f64, a1: f64, a2: f64) -> f64 {
    3.0 * coeff_a(a1, a2) * t * t + 2.0 * coeff_b(a1, a2) * t + coeff_c(a1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
