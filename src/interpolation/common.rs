//! Common utilities for interpolation.

use ndarray::Array1;

/// `n` evenly spaced values from `start` to `stop`, both ends included.
///
/// `n == 1` yields `[start]` and `n == 0` an empty array.
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let mut values = Array1::linspace(start, stop, n);
            // Pin the last sample so accumulated rounding never overshoots.
            values[n - 1] = stop;
            values
        }
    }
}

/// Get the weight for linear interpolation
pub fn linear_weight(fraction: f64) -> (f64, f64) {
    (1.0 - fraction, fraction)
}
