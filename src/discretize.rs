//! Discretizing a continuous colormap into `N` flat colour bins.
//!
//! Two constructions are offered. [`discretize_uniform`] resamples the source
//! at `N` points and gives each sample an equal-width bin. [`discretize_breakpoints`]
//! rebuilds the red, green and blue channels as step functions over `N + 1`
//! breakpoints on a finer lookup table.

use tracing::debug;

use crate::colormaps::{Colormap, LinearSegmentedColormap, Rgba, Segment, SegmentData};
use crate::error::{CmapError, Result};
use crate::interpolation::linspace;
use crate::reference::ColormapRef;

/// Lookup-table size of maps built by [`discretize_breakpoints`]
pub const BREAKPOINT_RESOLUTION: usize = 1024;

fn check_bins(n: usize) -> Result<()> {
    if n == 0 {
        return Err(CmapError::InvalidParameter {
            param: "n".to_string(),
            message: "A discrete colormap needs at least one bin".to_string(),
        });
    }
    Ok(())
}

/// `N`-bin colormap built by sampling `cmap` at `N` evenly spaced points.
///
/// Bin `i` covers `[i/N, (i+1)/N)` and holds the source colour at `i/(N-1)`.
/// The result is named after the source with `N` appended, e.g. `jet5`.
pub fn discretize_uniform(cmap: impl Into<ColormapRef>, n: usize) -> Result<LinearSegmentedColormap> {
    let base = cmap.into().resolve()?;
    check_bins(n)?;

    debug!(source = base.name(), bins = n, "Discretizing colormap by resampling");

    let colours = base.sample(linspace(0.0, 1.0, n).view());
    LinearSegmentedColormap::from_list(format!("{}{}", base.name(), n), &colours, n)
}

/// `N`-bin colormap built from step segments over `N + 1` breakpoints.
///
/// The source is sampled at `N` evenly spaced points followed by one
/// wraparound sample taken at `t = 0`. Breakpoint `i` steps from sample `i - 1`
/// to sample `i`, so breakpoint 0 reads its left-hand value from the
/// wraparound sample. Nothing lies left of 0, so that value never shows in
/// lookups; it is kept in [`LinearSegmentedColormap::segment_data`] as
/// produced. Alpha is fully opaque and the name is `<source>_<N>`.
pub fn discretize_breakpoints(
    cmap: impl Into<ColormapRef>,
    n: usize,
) -> Result<LinearSegmentedColormap> {
    let base = cmap.into().resolve()?;
    check_bins(n)?;

    debug!(source = base.name(), bins = n, "Discretizing colormap by breakpoints");

    let mut colours: Vec<Rgba> = base.sample(linspace(0.0, 1.0, n).view());
    colours.push(base.map_normalized(0.0));
    let breakpoints = linspace(0.0, 1.0, n + 1);

    let channel = |c: usize| -> Vec<Segment> {
        breakpoints
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let previous = if i == 0 { n } else { i - 1 };
                Segment::new(x, colours[previous][c], colours[i][c])
            })
            .collect()
    };
    let segments = SegmentData {
        red: channel(0),
        green: channel(1),
        blue: channel(2),
        alpha: None,
    };

    LinearSegmentedColormap::new(
        format!("{}_{}", base.name(), n),
        segments,
        BREAKPOINT_RESOLUTION,
    )
}
