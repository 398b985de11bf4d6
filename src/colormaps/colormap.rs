//! Colormap trait and utilities.
//!
//! This module defines the common interface for all colormaps. A colormap maps
//! a normalized scalar in `[0, 1]` to an RGBA colour whose channels are also
//! in `[0, 1]`.

use ndarray::ArrayView1;
use std::fmt;
use std::sync::Arc;

/// RGBA colour with every channel in `[0, 1]`
pub type Rgba = [f64; 4];

/// Colour returned for NaN inputs
pub const BAD_COLOUR: Rgba = [0.0, 0.0, 0.0, 0.0];

/// Lookup-table size used when a builder is not told otherwise
pub const DEFAULT_RESOLUTION: usize = 256;

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync + fmt::Debug {
    /// Get the name of this colormap
    fn name(&self) -> &str;

    /// Number of entries in the underlying lookup table
    fn resolution(&self) -> usize;

    /// Map a normalized value (0.0 to 1.0) to an RGBA color.
    ///
    /// Values below 0 give the first entry, values above 1 the last entry,
    /// and NaN gives [`BAD_COLOUR`].
    fn map_normalized(&self, t: f64) -> Rgba;

    /// Map a normalized value, replacing the alpha channel when `alpha` is given
    fn colour_at(&self, t: f64, alpha: Option<f64>) -> Rgba {
        let mut rgba = self.map_normalized(t);
        if let Some(alpha) = alpha {
            if !t.is_nan() {
                rgba[3] = alpha.clamp(0.0, 1.0);
            }
        }
        rgba
    }

    /// Map a value to an RGBA color given the data range.
    ///
    /// An empty range maps every value to the low end, as [`LinearNorm`] does.
    ///
    /// [`LinearNorm`]: crate::normalize::LinearNorm
    fn map(&self, value: f64, min: f64, max: f64) -> Rgba {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.map_normalized(normalized)
    }

    /// Evaluate the colormap at every position in `ts`
    fn sample(&self, ts: ArrayView1<'_, f64>) -> Vec<Rgba> {
        ts.iter().map(|&t| self.map_normalized(t)).collect()
    }

    /// Map a normalized value to an 8-bit RGBA color
    fn to_rgba8(&self, t: f64) -> [u8; 4] {
        rgba_to_u8(self.map_normalized(t))
    }
}

/// Where a normalized value falls in a lookup table of `n` entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutIndex {
    /// NaN input
    Bad,
    /// Below 0
    Under,
    /// Above 1
    Over,
    /// Regular table entry
    Entry(usize),
}

/// Locate `t` in a lookup table of `n` entries.
///
/// Entry `i` covers `[i/n, (i+1)/n)`; `t == 1.0` is folded into the last entry.
pub fn lut_index(t: f64, n: usize) -> LutIndex {
    if t.is_nan() {
        return LutIndex::Bad;
    }
    if t < 0.0 {
        return LutIndex::Under;
    }

    let scaled = t * n as f64;
    if scaled == n as f64 {
        return LutIndex::Entry(n - 1);
    }
    let index = scaled as usize;
    if index > n - 1 {
        return LutIndex::Over;
    }
    LutIndex::Entry(index)
}

/// Convert a floating-point colour to 8 bits per channel
pub fn rgba_to_u8(color: Rgba) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Convert an opaque 8-bit RGB triplet to a floating-point colour
pub fn rgb8_to_rgba(color: [u8; 3]) -> Rgba {
    [
        color[0] as f64 / 255.0,
        color[1] as f64 / 255.0,
        color[2] as f64 / 255.0,
        1.0,
    ]
}

/// A colormap evaluated back to front.
#[derive(Debug, Clone)]
pub struct Reversed {
    source: Arc<dyn Colormap>,
    name: String,
}

impl Reversed {
    /// Wrap `source`; the new name toggles a trailing `_r`
    pub fn new(source: Arc<dyn Colormap>) -> Self {
        let name = match source.name().strip_suffix("_r") {
            Some(base) => base.to_string(),
            None => format!("{}_r", source.name()),
        };
        Self { source, name }
    }
}

impl Colormap for Reversed {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolution(&self) -> usize {
        self.source.resolution()
    }

    fn map_normalized(&self, t: f64) -> Rgba {
        self.source.map_normalized(1.0 - t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Ramp;

    impl Colormap for Ramp {
        fn name(&self) -> &str {
            "ramp"
        }

        fn resolution(&self) -> usize {
            DEFAULT_RESOLUTION
        }

        fn map_normalized(&self, t: f64) -> Rgba {
            if t.is_nan() {
                return BAD_COLOUR;
            }
            let v = t.clamp(0.0, 1.0);
            [v, v, v, 1.0]
        }
    }

    #[test]
    fn test_lut_index() {
        assert_eq!(lut_index(f64::NAN, 4), LutIndex::Bad);
        assert_eq!(lut_index(-0.01, 4), LutIndex::Under);
        assert_eq!(lut_index(0.0, 4), LutIndex::Entry(0));
        assert_eq!(lut_index(0.26, 4), LutIndex::Entry(1));
        assert_eq!(lut_index(0.99, 4), LutIndex::Entry(3));
        assert_eq!(lut_index(1.0, 4), LutIndex::Entry(3));
        assert_eq!(lut_index(1.01, 4), LutIndex::Over);
    }

    #[test]
    fn test_alpha_override() {
        assert_eq!(Ramp.colour_at(0.5, Some(0.25)), [0.5, 0.5, 0.5, 0.25]);
        assert_eq!(Ramp.colour_at(0.5, Some(7.0))[3], 1.0);
        assert_eq!(Ramp.colour_at(f64::NAN, Some(1.0)), BAD_COLOUR);
    }

    #[test]
    fn test_map_with_range() {
        assert_eq!(Ramp.map(15.0, 10.0, 20.0), [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(Ramp.map(1.0, 5.0, 5.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_reversed() {
        let reversed = Reversed::new(Arc::new(Ramp));
        assert_eq!(reversed.name(), "ramp_r");
        assert_eq!(reversed.map_normalized(0.25), [0.75, 0.75, 0.75, 1.0]);

        let back = Reversed::new(Arc::new(reversed));
        assert_eq!(back.name(), "ramp");
    }

    #[test]
    fn test_rgba_to_u8() {
        assert_eq!(rgba_to_u8([0.0, 0.5, 1.0, 1.0]), [0, 128, 255, 255]);
        assert_eq!(rgb8_to_rgba([255, 0, 0]), [1.0, 0.0, 0.0, 1.0]);
    }
}
