//! Piecewise-linear interpolation through ascending control points.

use super::common::linear_weight;

/// Index of the first element of `sorted` that is `>= value`.
pub fn searchsorted_left(sorted: &[f64], value: f64) -> usize {
    sorted.partition_point(|&v| v < value)
}

/// Evaluate the piecewise-linear function through `(xp[i], fp[i])` at `x`.
///
/// `xp` must be ascending and the same length as `fp`. Points left of `xp[0]`
/// take `fp[0]` and points right of the last control point take the last
/// value. Where control points repeat, `x` equal to them takes the value of
/// the last repeated point. NaN passes through unchanged.
///
/// # Panics
///
/// Panics if `xp` is empty or the slices differ in length.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    assert!(!xp.is_empty(), "interp needs at least one control point");
    assert_eq!(xp.len(), fp.len(), "xp and fp must have the same length");

    if x.is_nan() {
        return x;
    }

    let last = xp.len() - 1;
    if x < xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    // xp[j] <= x < xp[j + 1]
    let j = xp.partition_point(|&v| v <= x) - 1;
    let (w0, w1) = linear_weight((x - xp[j]) / (xp[j + 1] - xp[j]));
    w0 * fp[j] + w1 * fp[j + 1]
}
