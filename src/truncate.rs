//! Truncating a colormap to a sub-range of its domain.

use tracing::debug;

use crate::colormaps::{Colormap, LinearSegmentedColormap, DEFAULT_RESOLUTION};
use crate::error::Result;
use crate::interpolation::linspace;
use crate::reference::ColormapRef;

/// Build a colormap covering only `[minval, maxval]` of `cmap`.
///
/// The source is sampled at `n` evenly spaced points across the sub-range
/// (`n` defaults to the source's resolution) and the samples become the
/// control points of a new map spanning `[0, 1]`. Handy when one end of a
/// colormap is too light or too dark to read.
///
/// `0.0 <= minval < maxval <= 1.0` is the caller's responsibility. The result
/// is named `trunc(<source>,<minval>,<maxval>)` with two decimals.
pub fn truncate(
    cmap: impl Into<ColormapRef>,
    minval: f64,
    maxval: f64,
    n: Option<usize>,
) -> Result<LinearSegmentedColormap> {
    let source = cmap.into().resolve()?;
    let n = n.unwrap_or_else(|| source.resolution());

    debug!(
        source = source.name(),
        minval = minval,
        maxval = maxval,
        samples = n,
        "Truncating colormap"
    );

    let colours = source.sample(linspace(minval, maxval, n).view());
    let name = format!("trunc({},{:.2},{:.2})", source.name(), minval, maxval);
    LinearSegmentedColormap::from_list(name, &colours, DEFAULT_RESOLUTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::get_colormap;

    #[test]
    fn test_name_records_bounds() {
        let cmap = truncate("inferno", 0.0, 0.85, None).unwrap();
        assert_eq!(cmap.name(), "trunc(inferno,0.00,0.85)");
        assert_eq!(cmap.resolution(), DEFAULT_RESOLUTION);
    }

    #[test]
    fn test_identity_reproduces_samples() {
        let jet = get_colormap("jet").unwrap();
        let full = truncate(jet.clone(), 0.0, 1.0, None).unwrap();

        for k in [0usize, 1, 17, 100, 128, 200, 254, 255] {
            let t = k as f64 / 255.0;
            let expected = jet.map_normalized(t);
            let actual = full.map_normalized(t);
            for c in 0..4 {
                assert!((expected[c] - actual[c]).abs() < 1e-9, "k = {}", k);
            }
        }
    }

    #[test]
    fn test_sub_range_containment() {
        let jet = get_colormap("jet").unwrap();
        let (a, b) = (0.25, 0.9);
        let part = truncate(jet.clone(), a, b, None).unwrap();

        for t in [0.0, 0.1, 0.33, 0.5, 0.75, 1.0] {
            let expected = jet.map_normalized(a + t * (b - a));
            let actual = part.map_normalized(t);
            for c in 0..4 {
                assert!((expected[c] - actual[c]).abs() < 0.05, "t = {}", t);
            }
        }
    }

    #[test]
    fn test_unknown_source() {
        assert!(truncate("no_such_map", 0.1, 0.9, None).is_err());
    }
}
