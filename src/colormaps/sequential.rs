//! Sequential colormaps (single-hue progression).
//!
//! These colormaps are suitable for data that progresses from low to high.
//! Their colours come from the `colorgrad` presets, sampled once into a
//! lookup table.

use super::colormap::{Rgba, DEFAULT_RESOLUTION};
use super::segmented::LinearSegmentedColormap;
use crate::error::Result;
use crate::interpolation::linspace;

fn from_gradient(name: &str, gradient: colorgrad::Gradient) -> Result<LinearSegmentedColormap> {
    let colours: Vec<Rgba> = linspace(0.0, 1.0, DEFAULT_RESOLUTION)
        .iter()
        .map(|&t| {
            let c = gradient.at(t);
            [c.r, c.g, c.b, c.a]
        })
        .collect();
    LinearSegmentedColormap::from_list(name, &colours, DEFAULT_RESOLUTION)
}

/// Viridis colormap - perceptually uniform, colorblind-friendly
pub fn viridis() -> Result<LinearSegmentedColormap> {
    from_gradient("viridis", colorgrad::viridis())
}

/// Plasma colormap
pub fn plasma() -> Result<LinearSegmentedColormap> {
    from_gradient("plasma", colorgrad::plasma())
}

/// Inferno colormap
pub fn inferno() -> Result<LinearSegmentedColormap> {
    from_gradient("inferno", colorgrad::inferno())
}

/// Magma colormap
pub fn magma() -> Result<LinearSegmentedColormap> {
    from_gradient("magma", colorgrad::magma())
}

/// Cividis colormap - colorblind-friendly alternative to viridis
pub fn cividis() -> Result<LinearSegmentedColormap> {
    from_gradient("cividis", colorgrad::cividis())
}

/// Turbo colormap - improved rainbow
pub fn turbo() -> Result<LinearSegmentedColormap> {
    from_gradient("turbo", colorgrad::turbo())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::Colormap;

    #[test]
    fn test_colormap_names() {
        assert_eq!(viridis().unwrap().name(), "viridis");
        assert_eq!(plasma().unwrap().name(), "plasma");
        assert_eq!(inferno().unwrap().name(), "inferno");
        assert_eq!(magma().unwrap().name(), "magma");
        assert_eq!(cividis().unwrap().name(), "cividis");
        assert_eq!(turbo().unwrap().name(), "turbo");
    }

    #[test]
    fn test_viridis_gets_lighter() {
        let cmap = viridis().unwrap();
        let luminance = |c: [u8; 4]| c[0] as u32 + c[1] as u32 + c[2] as u32;
        assert!(luminance(cmap.to_rgba8(0.0)) < luminance(cmap.to_rgba8(1.0)));
        assert_eq!(cmap.resolution(), DEFAULT_RESOLUTION);
    }
}
