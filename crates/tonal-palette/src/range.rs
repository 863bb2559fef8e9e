//! Affine remapping between numeric ranges.

use crate::error::{PaletteError, Result};

/// Map `value` from `from` into `to`, clamped to the destination interval.
///
/// `to` may be decreasing (`to.0 > to.1`); the result is clamped to the
/// closed interval spanned by its endpoints in either orientation.
///
/// # Errors
///
/// [`PaletteError::InvalidArgument`] when the source range is empty
/// (`from.0 == from.1`).
#[allow(clippy::float_cmp)]
pub fn distribute(value: f64, from: (f64, f64), to: (f64, f64)) -> Result<f64> {
    let (from_low, from_high) = from;
    let (to_low, to_high) = to;

    if from_low == from_high {
        return Err(PaletteError::InvalidArgument(format!(
            "cannot distribute from the empty range [{from_low}, {from_high}]"
        )));
    }

    let result = to_low + ((value - from_low) / (from_high - from_low)) * (to_high - to_low);

    Ok(if to_low < to_high {
        result.max(to_low).min(to_high)
    } else {
        result.min(to_low).max(to_high)
    })
}

/// Round half up, the way endpoint arithmetic expects (`-4.5` → `-4`).
#[inline]
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
