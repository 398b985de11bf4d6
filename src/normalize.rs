//! Normalizations mapping data values onto the `[0, 1]` colormap domain.

use crate::interpolation::interp;

/// Maps data values into `[0, 1]` for colour lookup
pub trait Normalize: Send + Sync {
    /// Normalize a single value
    fn normalize(&self, value: f64) -> f64;

    /// Current `(vmin, vmax)`
    fn limits(&self) -> (f64, f64);

    /// Replace `(vmin, vmax)`
    fn set_limits(&mut self, vmin: f64, vmax: f64);
}

/// Finite minimum and maximum of `data`, if there are any finite values
fn finite_range(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Linear mapping of `[vmin, vmax]` onto `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearNorm {
    pub vmin: f64,
    pub vmax: f64,
    /// Clamp results to `[0, 1]`
    pub clip: bool,
}

impl LinearNorm {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self {
            vmin,
            vmax,
            clip: false,
        }
    }

    /// Limits taken from the finite extremes of `data`; `[0, 1]` when there are none
    pub fn from_data(data: &[f64]) -> Self {
        let (vmin, vmax) = finite_range(data).unwrap_or((0.0, 1.0));
        Self::new(vmin, vmax)
    }

    /// Set whether results are clamped to `[0, 1]`
    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    /// Map a normalized position back to data units
    pub fn inverse(&self, t: f64) -> f64 {
        self.vmin + t * (self.vmax - self.vmin)
    }
}

impl Normalize for LinearNorm {
    fn normalize(&self, value: f64) -> f64 {
        if self.vmin == self.vmax {
            return 0.0;
        }
        let t = (value - self.vmin) / (self.vmax - self.vmin);
        if self.clip {
            t.clamp(0.0, 1.0)
        } else {
            t
        }
    }

    fn limits(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }

    fn set_limits(&mut self, vmin: f64, vmax: f64) {
        self.vmin = vmin;
        self.vmax = vmax;
    }
}

/// Piecewise-linear normalization pinned at a midpoint.
///
/// Control points are `(vmin, 0)`, `(midpoint, 0.5)` and `(vmax, 1)`; values
/// outside `[vmin, vmax]` clamp to 0 or 1. `vmin <= midpoint <= vmax` is not
/// checked: violating it gives a non-monotonic mapping. NaN passes through.
///
/// Pair it with a diverging colormap so `midpoint` always lands on the
/// colormap's centre colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidpointNorm {
    pub vmin: f64,
    pub vmax: f64,
    pub midpoint: f64,
    /// Kept for parity with [`LinearNorm`]; results are always within `[0, 1]`
    pub clip: bool,
}

impl MidpointNorm {
    pub fn new(vmin: f64, vmax: f64, midpoint: f64) -> Self {
        Self {
            vmin,
            vmax,
            midpoint,
            clip: false,
        }
    }

    /// Limits taken from the finite extremes of `data`
    pub fn from_data(data: &[f64], midpoint: f64) -> Self {
        let (vmin, vmax) = finite_range(data).unwrap_or((midpoint, midpoint));
        Self::new(vmin, vmax, midpoint)
    }

    /// Set the `clip` flag; it does not change the result
    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }
}

impl Normalize for MidpointNorm {
    fn normalize(&self, value: f64) -> f64 {
        interp(value, &[self.vmin, self.midpoint, self.vmax], &[0.0, 0.5, 1.0])
    }

    fn limits(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }

    fn set_limits(&mut self, vmin: f64, vmax: f64) {
        self.vmin = vmin;
        self.vmax = vmax;
    }
}
