//! Errors raised while generating shades and palettes.

use thiserror::Error;
use tonal_color::ColorError;

/// Everything that can go wrong between a seed and a palette.
///
/// All operations are deterministic, so any error is reproducible with the
/// same inputs.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A parameter makes the computation undefined (too few steps, an empty
    /// source range, Bezier control points outside the unit interval).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No directed arc reproduces the shortest distance between two hues.
    /// Only reachable with non-finite input.
    #[error("no directed hue arc between {start} and {end}")]
    UnresolvedHueArc { start: f64, end: f64 },

    /// The color collaborator rejected its input.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// A TOML configuration failed to parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = PaletteError> = std::result::Result<T, E>;
