//! Hue arcs — turning two hues into a direction of travel.
//!
//! Interpolating hue linearly between two wrapped angles goes the wrong way
//! around the wheel half the time (350° → 10° would sweep through 180°).
//! [`calc_hue_distance`] instead returns unwrapped endpoints whose plain
//! difference is the signed shortest arc, so a linear sweep between them
//! never jumps. Callers normalize the interpolated hue afterwards.

use crate::error::{PaletteError, Result};
use crate::range::round_half_up;

/// Undirected shortest angular distance between two hues, in [0, 180].
#[must_use]
pub fn shortest_distance(a: f64, b: f64) -> f64 {
    let difference = (a - b).abs() % 360.0;
    if difference > 180.0 { 360.0 - difference } else { difference }
}

/// Resolve `start` → `end` into a directed pair of unwrapped hues.
///
/// Both inputs are rounded to whole degrees, and `0` is treated as `360`.
/// With `d` the shortest distance, four candidates are tried in order and
/// the first whose moved endpoint lands exactly on the other hue (by
/// truncated remainder) wins:
///
/// 1. `(start, start + d)`
/// 2. `(start, start - d)`
/// 3. `(end + d, end)`
/// 4. `(end - d, end)`
///
/// The order is part of the contract: it decides e.g. that `(10, 0)`
/// resolves to `(370, 360)`. When no candidate matches by truncated
/// remainder (a negative hue against a positive one), the same candidates
/// are retried in the same order comparing positions on the wheel, so
/// `(-90, 270)` resolves to `(-90, -90)`.
///
/// ```
/// use tonal_palette::calc_hue_distance;
///
/// assert_eq!(calc_hue_distance(25.0, 250.0).unwrap(), (385.0, 250.0));
/// assert_eq!(calc_hue_distance(355.0, 0.0).unwrap(), (355.0, 360.0));
/// ```
///
/// # Errors
///
/// [`PaletteError::UnresolvedHueArc`] when no candidate matches, which only
/// happens for non-finite input.
#[allow(clippy::float_cmp)]
pub fn calc_hue_distance(start: f64, end: f64) -> Result<(f64, f64)> {
    let unresolved = PaletteError::UnresolvedHueArc { start, end };
    if !start.is_finite() || !end.is_finite() {
        return Err(unresolved);
    }

    let start = canonical(round_half_up(start));
    let end = canonical(round_half_up(end));
    if start == end {
        return Ok((start, start));
    }

    let distance = shortest_distance(start, end);
    let candidates = [
        ((start, start + distance), start + distance, end),
        ((start, start - distance), start - distance, end),
        ((end + distance, end), end + distance, start),
        ((end - distance, end), end - distance, start),
    ];

    // Whole-degree values, so exact comparison is sound. The truncated
    // remainder is tried first; negative inputs only match on the wheel.
    let find = |matches: fn(f64, f64) -> bool| {
        candidates
            .into_iter()
            .find(|&(_, moved, other)| matches(moved, other))
            .map(|(pair, _, _)| pair)
    };
    find(|moved, other| moved % 360.0 == other)
        .or_else(|| find(|moved, other| moved.rem_euclid(360.0) == other.rem_euclid(360.0)))
        .ok_or(unresolved)
}

/// `0` becomes `360` so a hue at the origin compares above small angles.
#[allow(clippy::float_cmp)]
fn canonical(hue: f64) -> f64 {
    if hue == 0.0 { 360.0 } else { hue }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn regression_set() {
        let cases = [
            ((45.0, 60.0), (45.0, 60.0)),
            ((60.0, 45.0), (60.0, 45.0)),
            ((170.0, 190.0), (170.0, 190.0)),
            ((190.0, 170.0), (190.0, 170.0)),
            ((0.0, 10.0), (360.0, 370.0)),
            ((10.0, 0.0), (370.0, 360.0)),
            ((25.0, 250.0), (385.0, 250.0)),
            ((250.0, 25.0), (250.0, 385.0)),
            ((0.0, 355.0), (360.0, 355.0)),
            ((355.0, 0.0), (355.0, 360.0)),
            ((4.1, 355.0), (364.0, 355.0)),
            ((355.0, 4.1), (355.0, 364.0)),
            ((4.0, 0.0), (364.0, 360.0)),
            ((0.0, 4.0), (360.0, 364.0)),
        ];
        for ((start, end), expected) in cases {
            assert_eq!(calc_hue_distance(start, end).unwrap(), expected, "({start}, {end})");
        }
    }

    #[test]
    fn equal_hues_have_zero_distance() {
        assert_eq!(calc_hue_distance(0.0, 0.0).unwrap(), (360.0, 360.0));
        assert_eq!(calc_hue_distance(0.0, 360.0).unwrap(), (360.0, 360.0));
        assert_eq!(calc_hue_distance(120.2, 119.9).unwrap(), (120.0, 120.0));
    }

    #[test]
    fn seed_style_arc_runs_backwards() {
        // A seed at 174 with end (174 + 354) % 360 sweeps six degrees down.
        assert_eq!(calc_hue_distance(174.4, 168.4).unwrap(), (174.0, 168.0));
        assert_eq!(calc_hue_distance(3.0, 357.0).unwrap(), (363.0, 357.0));
    }

    #[test]
    fn resolved_span_is_the_shortest_distance() {
        for a in (-720..720).step_by(7) {
            for b in (-720..720).step_by(11) {
                let (a, b) = (f64::from(a), f64::from(b));
                let (start, end) = calc_hue_distance(a, b).unwrap();
                let span = (end - start).abs() % 360.0;
                let expected = shortest_distance(a, b);
                assert!(
                    (span - expected).abs() < 1e-9,
                    "({a}, {b}) resolved to ({start}, {end}), span {span} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn negative_and_wrapped_inputs_resolve() {
        assert_eq!(calc_hue_distance(-10.0, 10.0).unwrap(), (-10.0, 10.0));
        assert_eq!(calc_hue_distance(10.0, -10.0).unwrap(), (10.0, -10.0));
        assert_eq!(calc_hue_distance(400.0, 40.0).unwrap(), (400.0, 400.0));
    }

    #[test]
    fn negative_hues_match_on_the_wheel() {
        let cases = [
            ((-90.0, 270.0), (-90.0, -90.0)),
            ((-10.0, 340.0), (-10.0, -20.0)),
            ((-10.0, 350.0), (-10.0, -10.0)),
            ((-360.0, 10.0), (-360.0, -350.0)),
            ((-360.0, 0.0), (-360.0, -360.0)),
        ];
        for ((start, end), expected) in cases {
            assert_eq!(calc_hue_distance(start, end).unwrap(), expected, "({start}, {end})");
        }
    }

    #[test]
    fn non_finite_input_is_unresolved() {
        let cases = [
            (f64::NAN, 10.0),
            (10.0, f64::INFINITY),
            (f64::NEG_INFINITY, f64::INFINITY),
        ];
        for (a, b) in cases {
            let err = calc_hue_distance(a, b).unwrap_err();
            assert!(matches!(err, PaletteError::UnresolvedHueArc { .. }), "{err}");
        }
    }

    #[test]
    fn shortest_distance_is_symmetric_and_bounded() {
        assert_eq!(shortest_distance(10.0, 350.0), 20.0);
        assert_eq!(shortest_distance(350.0, 10.0), 20.0);
        assert_eq!(shortest_distance(0.0, 180.0), 180.0);
        assert_eq!(shortest_distance(25.0, 250.0), 135.0);
    }
}
