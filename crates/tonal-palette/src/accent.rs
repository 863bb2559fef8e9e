//! Accent shades: fixed perturbations of specific tonal shades.
//!
//! Each accent nudges the hue forward and multiplies saturation and value,
//! giving a more vivid sibling of the tonal shade it is derived from.

use std::fmt;

use tonal_color::Color;

/// One of the four accent shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Accent {
    A100,
    A200,
    A400,
    A700,
}

impl Accent {
    /// All accents in palette order.
    pub const ALL: [Self; 4] = [Self::A100, Self::A200, Self::A400, Self::A700];

    /// `(hue shift in degrees, saturation percent, value percent)`.
    #[must_use]
    pub const fn adjustment(self) -> (f64, f64, f64) {
        match self {
            Self::A100 => (2.0, 200.0, 105.0),
            Self::A200 => (2.0, 182.0, 108.0),
            Self::A400 => (2.0, 137.0, 113.0),
            Self::A700 => (4.0, 120.0, 123.0),
        }
    }

    /// Index of the tonal shade this accent is derived from
    /// (`A100` ← `100`, `A200` ← `200`, `A400` ← `400`, `A700` ← `700`).
    #[must_use]
    pub const fn source_index(self) -> usize {
        match self {
            Self::A100 => 1,
            Self::A200 => 2,
            Self::A400 => 4,
            Self::A700 => 7,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A100 => "A100",
            Self::A200 => "A200",
            Self::A400 => "A400",
            Self::A700 => "A700",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derive the `accent` shade from its tonal `base`.
///
/// Hue wraps modulo 360; saturation and value are capped at 100.
#[must_use]
pub fn derive_accent(base: Color, accent: Accent) -> Color {
    let (h, s, v) = base.to_hsv();
    let (hue_shift, sat_pct, val_pct) = accent.adjustment();
    Color::hsv(
        (h + hue_shift) % 360.0,
        (s * sat_pct / 100.0).min(100.0),
        (v * val_pct / 100.0).min(100.0),
    )
}
