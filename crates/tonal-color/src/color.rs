// SPDX-License-Identifier: MIT
//
// tonal-color color system — HSV-native values with sRGB at the edges.
//
// Single-character variable names (r, g, b, h, s, v, p, q, t) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   string (#hex / rgb() / hsv()) → sRGB → HSV → sRGB → string
//
// Saturation and value are stored as percents, matching how palette
// endpoints are expressed. Hue is degrees in [0, 360).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure to interpret an input as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not hex, `rgb()` or `hsv()` notation.
    #[error("malformed color `{0}`")]
    Malformed(String),
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque color stored as hue, saturation and value.
///
/// Colors are plain values: every operation returns a new `Color`, nothing
/// is shared. Equality is exact on all three channels, so a color that went
/// through no arithmetic compares equal to the one it was copied from.
///
/// # Examples
///
/// ```
/// use tonal_color::Color;
///
/// let teal = Color::hex("#009688").unwrap();
/// assert_eq!(teal.to_hex(), "#009688");
///
/// let (h, s, v) = teal.to_hsv();
/// assert!((h - 174.4).abs() < 0.1);
/// assert_eq!(s, 100.0);
/// assert!(v > 58.0 && v < 59.0);
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Hue angle in degrees: 0.0 to 360.0 (exclusive).
    pub h: f64,

    /// Saturation in percent: 0.0 (gray) to 100.0 (fully saturated).
    pub s: f64,

    /// Value (brightness) in percent: 0.0 (black) to 100.0.
    pub v: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from HSV components.
    ///
    /// - `h`: hue in degrees, any real (normalized into [0, 360))
    /// - `s`: saturation in percent (clamped to 0.0–100.0)
    /// - `v`: value in percent (clamped to 0.0–100.0)
    #[inline]
    #[must_use]
    pub fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            v: v.clamp(0.0, 100.0),
        }
    }

    /// Create a color from sRGB components (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (h, s, v) = srgb_to_hsv(
            r.clamp(0.0, 1.0),
            g.clamp(0.0, 1.0),
            b.clamp(0.0, 1.0),
        );
        Self { h, s, v }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Malformed`] if the string is not a valid hex color.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::Malformed(s.to_owned()))
    }

    /// Pure black.
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 0.0,
    };

    /// Pure white.
    pub const WHITE: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 100.0,
    };

    // ─── Decomposition ───────────────────────────────────────────────────

    /// Hue, saturation (percent) and value (percent).
    #[inline]
    #[must_use]
    pub const fn to_hsv(self) -> (f64, f64, f64) {
        (self.h, self.s, self.v)
    }

    /// Convert to sRGB components in 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        hsv_to_srgb(self.h, self.s / 100.0, self.v / 100.0)
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Render as `rgb(r, g, b)` with 8-bit channels.
    #[must_use]
    pub fn to_rgb_string(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("rgb({r}, {g}, {b})")
    }

    /// Render as `hsv(h, s%, v%)` with whole-number components.
    #[must_use]
    pub fn to_hsv_string(self) -> String {
        format!(
            "hsv({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.v.round()
        )
    }

    /// Whether this color has no visible saturation.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s.abs() < 1e-9
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::hsv({:.2}, {:.2}, {:.2})", self.h, self.s, self.v)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `hsv(h, s%, v%)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        let parsed = if let Some(args) = functional_args(&input, "rgb") {
            parse_rgb_args(args)
        } else if let Some(args) = functional_args(&input, "hsv") {
            parse_hsv_args(args)
        } else {
            parse_hex(&input)
        };
        parsed.ok_or_else(|| ColorError::Malformed(s.to_owned()))
    }
}

// ─── Color Math ──────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Convert sRGB (0.0–1.0) → HSV (degrees, percent, percent).
fn srgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (normalize_hue(h * 60.0), s * 100.0, max * 100.0)
}

/// Convert HSV (degrees, 0–1, 0–1) → sRGB (0.0–1.0).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsv_to_srgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = normalize_hue(h) / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * f.mul_add(-s, 1.0);
    let t = v * (1.0 - f).mul_add(-s, 1.0);

    // Safe: h is in [0, 6) so the sector index is 0..=5.
    match (i as u8) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Strip `name(` and `)` from functional notation, returning the arguments.
fn functional_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Split exactly three comma-separated numbers, ignoring a trailing `%`.
fn three_numbers(args: &str) -> Option<[f64; 3]> {
    let mut out = [0.0; 3];
    let mut parts = args.split(',');
    for slot in &mut out {
        let part = parts.next()?.trim();
        let part = part.strip_suffix('%').unwrap_or(part);
        *slot = part.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    out.iter().all(|n: &f64| n.is_finite()).then_some(out)
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let [r, g, b] = three_numbers(args)?;
    let in_range = |c: f64| (0.0..=255.0).contains(&c);
    if !(in_range(r) && in_range(g) && in_range(b)) {
        return None;
    }
    Some(Color::srgb(r / 255.0, g / 255.0, b / 255.0))
}

fn parse_hsv_args(args: &str) -> Option<Color> {
    let [h, s, v] = three_numbers(args)?;
    Some(Color::hsv(h, s, v))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
