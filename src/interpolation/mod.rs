//! One-dimensional interpolation helpers.
//!
//! Colormap resampling and normalization both reduce to evaluating a
//! piecewise-linear function through a handful of control points. This module
//! provides the few primitives they share.

pub mod common;
pub mod piecewise;

pub use common::{linear_weight, linspace};
pub use piecewise::{interp, searchsorted_left};
