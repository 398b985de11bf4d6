//! Assertion utilities for testing.
//!
//! Floating-point and colour comparisons with a tolerance.

#![allow(dead_code)]

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two RGBA colours are approximately equal channel by channel.
pub fn assert_colour_approx_eq(actual: [f64; 4], expected: [f64; 4], epsilon: Option<f64>) {
    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() <= eps,
            "Colours differ in channel {}: actual = {:?}, expected = {:?}, epsilon = {}",
            i,
            actual,
            expected,
            eps
        );
    }
}

/// Number of runs of equal colours when stepping through `colours` in order.
pub fn count_colour_runs(colours: &[[f64; 4]]) -> usize {
    if colours.is_empty() {
        return 0;
    }
    1 + colours
        .windows(2)
        .filter(|w| (0..4).any(|c| (w[0][c] - w[1][c]).abs() > 1e-6))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_count_colour_runs() {
        let red = [1.0, 0.0, 0.0, 1.0];
        let blue = [0.0, 0.0, 1.0, 1.0];
        assert_eq!(count_colour_runs(&[red, red, blue, blue, red]), 3);
        assert_eq!(count_colour_runs(&[]), 0);
    }
}
