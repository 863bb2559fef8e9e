// SPDX-License-Identifier: MIT
//
// Output formats — how a finished shade is handed to the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorError};

/// The representation generated colors are rendered into.
///
/// `Structured` keeps the [`Color`] value itself; the other variants
/// serialize to a string in the named notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `#rrggbb`.
    #[default]
    Hex,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `hsv(h, s%, v%)`.
    Hsv,
    /// No serialization; callers work with [`Color`] directly.
    Structured,
}

impl OutputFormat {
    /// Render `color` in this format, or `None` for [`OutputFormat::Structured`].
    #[must_use]
    pub fn render(self, color: Color) -> Option<String> {
        match self {
            Self::Hex => Some(color.to_hex()),
            Self::Rgb => Some(color.to_rgb_string()),
            Self::Hsv => Some(color.to_hsv_string()),
            Self::Structured => None,
        }
    }

    /// Apply this format to `color`, keeping the value itself for
    /// [`OutputFormat::Structured`].
    #[must_use]
    pub fn apply(self, color: Color) -> Rendered {
        self.render(color).map_or(Rendered::Value(color), Rendered::Text)
    }

    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Structured => "structured",
        }
    }

    /// All recognized formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hex, Self::Rgb, Self::Hsv, Self::Structured]
    }
}

/// A color after an [`OutputFormat`] has been applied.
///
/// Serializes as a bare string for the string formats and as an
/// `{ h, s, v }` object for the structured one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    /// Serialized notation (`#009688`, `rgb(...)`, `hsv(...)`).
    Text(String),
    /// The color value, unserialized.
    Value(Color),
}

impl Rendered {
    /// The serialized notation, if this is a string rendering.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Value(_) => None,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Value(color) => write!(f, "{color}"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ColorError;

    /// Parse a format name (case-insensitive). `none` is an alias for
    /// `structured`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "none" {
            return Ok(Self::Structured);
        }
        Self::all()
            .iter()
            .find(|f| f.name() == lower)
            .copied()
            .ok_or_else(|| ColorError::Malformed(format!("unknown output format `{s}`")))
    }
}
