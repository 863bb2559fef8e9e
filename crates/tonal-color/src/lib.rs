// SPDX-License-Identifier: MIT
//
// tonal-color — the color value behind tonal palette generation.
//
// Palette math works on hue, saturation and value, so the color type
// here is HSV-native: every shade is constructed from three numbers and
// decomposed back into the same three numbers without a detour through
// another space. sRGB only appears at the edges, when a seed is parsed
// from a string or a shade is serialized for output, and when contrast
// needs relative luminance.

pub mod color;
pub mod format;

pub use color::{Color, ColorError};
pub use format::{OutputFormat, Rendered};
