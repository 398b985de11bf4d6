//! Colour bars bound to explicit data thresholds.
//!
//! A [`Colorbar`] pairs a [`ScalarMappable`] (colormap plus data limits) with
//! tick positions in data units. Rendering is left to a [`RenderSurface`];
//! [`ImageFigure`](crate::figure::ImageFigure) is the in-crate implementation.

use std::sync::Arc;
use tracing::debug;

use crate::colormaps::{Colormap, Rgba};
use crate::discretize::discretize_uniform;
use crate::error::{CmapError, Result};
use crate::interpolation::linspace;
use crate::normalize::{LinearNorm, Normalize};
use crate::reference::ColormapRef;

/// Identifies an axes area on a [`RenderSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesId(pub usize);

/// Identifies a colour bar attached to a [`RenderSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorbarId(pub usize);

/// A colormap with data limits
#[derive(Debug, Clone)]
pub struct ScalarMappable {
    cmap: Arc<dyn Colormap>,
    norm: LinearNorm,
}

impl ScalarMappable {
    /// Mappable with limits `[0, 1]`
    pub fn new(cmap: Arc<dyn Colormap>) -> Self {
        Self {
            cmap,
            norm: LinearNorm::new(0.0, 1.0),
        }
    }

    /// Set the data values mapped to the two ends of the colormap
    pub fn set_clim(&mut self, vmin: f64, vmax: f64) {
        self.norm.set_limits(vmin, vmax);
    }

    pub fn clim(&self) -> (f64, f64) {
        self.norm.limits()
    }

    pub fn cmap(&self) -> &Arc<dyn Colormap> {
        &self.cmap
    }

    pub fn norm(&self) -> &LinearNorm {
        &self.norm
    }

    /// Colour for a data value
    pub fn to_rgba(&self, value: f64) -> Rgba {
        self.cmap.map_normalized(self.norm.normalize(value))
    }
}

/// A colour bar attached to an axes
#[derive(Debug, Clone)]
pub struct Colorbar {
    mappable: ScalarMappable,
    axes: AxesId,
    ticks: Vec<f64>,
    tick_labels: Vec<String>,
}

impl Colorbar {
    pub fn new(mappable: ScalarMappable, axes: AxesId) -> Self {
        Self {
            mappable,
            axes,
            ticks: Vec::new(),
            tick_labels: Vec::new(),
        }
    }

    /// Replace the tick positions; labels reset to the formatted values
    pub fn set_ticks(&mut self, ticks: &[f64]) {
        self.ticks = ticks.to_vec();
        self.tick_labels = ticks.iter().map(|t| t.to_string()).collect();
    }

    /// Replace the tick labels, one per tick
    pub fn set_ticklabels(&mut self, labels: Vec<String>) -> Result<()> {
        if labels.len() != self.ticks.len() {
            return Err(CmapError::InvalidParameter {
                param: "labels".to_string(),
                message: format!(
                    "Got {} labels for {} ticks",
                    labels.len(),
                    self.ticks.len()
                ),
            });
        }
        self.tick_labels = labels;
        Ok(())
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    pub fn tick_labels(&self) -> &[String] {
        &self.tick_labels
    }

    pub fn mappable(&self) -> &ScalarMappable {
        &self.mappable
    }

    pub fn colormap(&self) -> &Arc<dyn Colormap> {
        self.mappable.cmap()
    }

    pub fn axes(&self) -> AxesId {
        self.axes
    }
}

/// Something colour bars can be drawn on
pub trait RenderSurface {
    /// Attach a colour bar for `mappable` to the axes `cax`
    fn colorbar(&mut self, mappable: ScalarMappable, cax: AxesId) -> Result<ColorbarId>;

    /// Set tick positions, in data units, on an attached colour bar
    fn set_colorbar_ticks(&mut self, id: ColorbarId, ticks: &[f64]) -> Result<()>;

    fn colorbar_ref(&self, id: ColorbarId) -> Option<&Colorbar>;

    fn colorbar_mut(&mut self, id: ColorbarId) -> Option<&mut Colorbar>;
}

/// Draw an `ncolors`-bin colour bar spanning `[drape_min_threshold, drape_max]`.
///
/// The colormap is discretized with [`discretize_uniform`], its limits are set
/// to the thresholds (so ticks read in data units rather than bin indices) and
/// `ncolors + 1` evenly spaced ticks are placed across the range. The
/// thresholds should match whatever mask was applied to the drape raster.
/// `drape_min_threshold < drape_max` is not checked here.
pub fn build_colour_bar<S: RenderSurface + ?Sized>(
    figure: &mut S,
    cax: AxesId,
    ncolors: usize,
    cmap: impl Into<ColormapRef>,
    drape_min_threshold: f64,
    drape_max: f64,
) -> Result<ColorbarId> {
    let discrete = discretize_uniform(cmap, ncolors)?;
    debug!(
        colormap = discrete.name(),
        ncolors = ncolors,
        min = drape_min_threshold,
        max = drape_max,
        "Building threshold colour bar"
    );

    let mut mappable = ScalarMappable::new(Arc::new(discrete));
    mappable.set_clim(drape_min_threshold, drape_max);

    let id = figure.colorbar(mappable, cax)?;
    let ticks = linspace(drape_min_threshold, drape_max, ncolors + 1);
    figure.set_colorbar_ticks(id, &ticks.to_vec())?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::get_colormap;

    /// Records attachments without drawing anything
    #[derive(Default)]
    struct Recorder {
        colorbars: Vec<Colorbar>,
    }

    impl RenderSurface for Recorder {
        fn colorbar(&mut self, mappable: ScalarMappable, cax: AxesId) -> Result<ColorbarId> {
            self.colorbars.push(Colorbar::new(mappable, cax));
            Ok(ColorbarId(self.colorbars.len() - 1))
        }

        fn set_colorbar_ticks(&mut self, id: ColorbarId, ticks: &[f64]) -> Result<()> {
            self.colorbars[id.0].set_ticks(ticks);
            Ok(())
        }

        fn colorbar_ref(&self, id: ColorbarId) -> Option<&Colorbar> {
            self.colorbars.get(id.0)
        }

        fn colorbar_mut(&mut self, id: ColorbarId) -> Option<&mut Colorbar> {
            self.colorbars.get_mut(id.0)
        }
    }

    #[test]
    fn test_scalar_mappable_limits() {
        let mut mappable = ScalarMappable::new(get_colormap("jet").unwrap());
        mappable.set_clim(10.0, 60.0);
        assert_eq!(mappable.clim(), (10.0, 60.0));
        assert_eq!(mappable.to_rgba(10.0), mappable.cmap().map_normalized(0.0));
        assert_eq!(mappable.to_rgba(60.0), mappable.cmap().map_normalized(1.0));
    }

    #[test]
    fn test_build_colour_bar_ticks() {
        let mut surface = Recorder::default();
        let id = build_colour_bar(&mut surface, AxesId(0), 5, "jet", 10.0, 60.0).unwrap();

        let colorbar = surface.colorbar_ref(id).unwrap();
        assert_eq!(colorbar.ticks(), &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        assert_eq!(colorbar.tick_labels()[0], "10");
        assert_eq!(colorbar.colormap().name(), "jet5");
        assert_eq!(colorbar.colormap().resolution(), 5);
        assert_eq!(colorbar.mappable().clim(), (10.0, 60.0));
        assert_eq!(colorbar.axes(), AxesId(0));
    }

    #[test]
    fn test_tick_labels() {
        let mut surface = Recorder::default();
        let id = build_colour_bar(&mut surface, AxesId(0), 2, "viridis", 0.0, 1.0).unwrap();

        let colorbar = surface.colorbar_mut(id).unwrap();
        assert!(colorbar.set_ticklabels(vec!["low".into()]).is_err());
        colorbar
            .set_ticklabels(vec!["low".into(), "mid".into(), "high".into()])
            .unwrap();
        assert_eq!(colorbar.tick_labels(), &["low", "mid", "high"]);
    }

    #[test]
    fn test_invalid_colormap_propagates() {
        let mut surface = Recorder::default();
        let err = build_colour_bar(&mut surface, AxesId(0), 5, "nope", 0.0, 1.0).unwrap_err();
        assert!(matches!(err, CmapError::InvalidColormapReference { .. }));
        assert!(surface.colorbars.is_empty());
    }
}
