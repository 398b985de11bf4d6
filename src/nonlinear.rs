//! Colormap that spreads unevenly spaced data levels evenly across colours.
//!
//! Given levels such as `[0, 1, 2, 3, 10]`, equal colour steps are assigned to
//! each consecutive pair of levels rather than to equal data increments. The
//! adapter wraps a source colormap instead of copying it.

use std::sync::Arc;
use tracing::debug;

use crate::colormaps::{Colormap, Rgba};
use crate::error::{CmapError, Result};
use crate::interpolation::{interp, linspace};
use crate::reference::ColormapRef;

/// How the evenly spaced level value is turned into a source-map position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelScaling {
    /// `y / (levmax - levmin) + 0.5`; maps a level range centred on zero onto `[0, 1]`
    #[default]
    Centred,
    /// `y / levmax`; maps a level range starting at zero onto `[0, 1]`
    Max,
}

/// Colormap evaluating a source map at positions remapped through `levels`
#[derive(Debug, Clone)]
pub struct NonlinearColormap {
    source: Arc<dyn Colormap>,
    levels: Vec<f64>,
    transformed_levels: Vec<f64>,
    levmin: f64,
    levmax: f64,
    scaling: LevelScaling,
}

impl NonlinearColormap {
    /// Wrap `cmap` with ascending `levels`.
    ///
    /// The levels must be finite and contain at least two distinct values.
    /// They are expected in ascending order; they are neither sorted nor
    /// checked for order.
    pub fn new(cmap: impl Into<ColormapRef>, levels: &[f64]) -> Result<Self> {
        if levels.iter().any(|l| !l.is_finite()) {
            return Err(CmapError::InvalidLevelSet {
                message: "Levels must be finite".to_string(),
            });
        }

        let levmin = levels.iter().copied().fold(f64::INFINITY, f64::min);
        let levmax = levels.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if levels.len() < 2 || levmin == levmax {
            return Err(CmapError::InvalidLevelSet {
                message: format!(
                    "At least two distinct levels are required, got {:?}",
                    levels
                ),
            });
        }

        let source = cmap.into().resolve()?;
        debug!(
            source = source.name(),
            levels = levels.len(),
            levmin = levmin,
            levmax = levmax,
            "Building non-linear colormap"
        );

        Ok(Self {
            source,
            levels: levels.to_vec(),
            transformed_levels: linspace(levmin, levmax, levels.len()).to_vec(),
            levmin,
            levmax,
            scaling: LevelScaling::default(),
        })
    }

    /// Use `scaling` to turn level values into source positions
    pub fn with_scaling(mut self, scaling: LevelScaling) -> Self {
        self.scaling = scaling;
        self
    }

    /// Data levels as given
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Evenly spaced values spanning the level range, one per level
    pub fn transformed_levels(&self) -> &[f64] {
        &self.transformed_levels
    }

    /// Wrapped source colormap
    pub fn source(&self) -> &Arc<dyn Colormap> {
        &self.source
    }

    /// Current level scaling
    pub fn scaling(&self) -> LevelScaling {
        self.scaling
    }

    /// Position in the source colormap used for data value `x`.
    ///
    /// Values outside the level range take the position of the nearest level.
    pub fn position(&self, x: f64) -> f64 {
        let y = interp(x, &self.levels, &self.transformed_levels);
        match self.scaling {
            LevelScaling::Centred => y / (self.levmax - self.levmin) + 0.5,
            LevelScaling::Max => y / self.levmax,
        }
    }

    /// Colour for data value `x` with the given alpha, opaque when `None`
    pub fn evaluate(&self, x: f64, alpha: Option<f64>) -> Rgba {
        self.colour_at(x, Some(alpha.unwrap_or(1.0)))
    }
}

impl Colormap for NonlinearColormap {
    fn name(&self) -> &str {
        "nlcmap"
    }

    fn resolution(&self) -> usize {
        self.source.resolution()
    }

    fn map_normalized(&self, x: f64) -> Rgba {
        self.source.colour_at(self.position(x), Some(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::{get_colormap, LinearSegmentedColormap, BAD_COLOUR};

    #[test]
    fn test_transformed_levels() {
        let cmap = NonlinearColormap::new("jet", &[0.0, 1.0, 2.0, 3.0, 10.0]).unwrap();
        assert_eq!(cmap.transformed_levels(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(cmap.name(), "nlcmap");
        assert_eq!(cmap.resolution(), 256);
    }

    #[test]
    fn test_centred_midpoint() {
        let jet = get_colormap("jet").unwrap();
        let cmap = NonlinearColormap::new(jet.clone(), &[-10.0, -3.0, 0.0, 3.0, 10.0]).unwrap();
        assert_eq!(cmap.position(0.0), 0.5);
        assert_eq!(cmap.evaluate(0.0, None), jet.map_normalized(0.5));
    }

    #[test]
    fn test_centred_offsets_positive_levels() {
        let jet = get_colormap("jet").unwrap();
        let cmap = NonlinearColormap::new(jet.clone(), &[0.0, 1.0, 2.0, 3.0, 10.0]).unwrap();
        // Level 2 sits halfway along the transformed range, which the centred
        // scaling shifts to the top of the source map.
        assert_eq!(cmap.position(2.0), 1.0);
        assert_eq!(cmap.evaluate(2.0, None), jet.map_normalized(1.0));
    }

    #[test]
    fn test_max_scaling_midpoint() {
        let jet = get_colormap("jet").unwrap();
        let cmap = NonlinearColormap::new(jet.clone(), &[0.0, 1.0, 2.0, 3.0, 10.0])
            .unwrap()
            .with_scaling(LevelScaling::Max);
        assert_eq!(cmap.position(2.0), 0.5);
        assert_eq!(cmap.evaluate(2.0, None), jet.map_normalized(0.5));
        assert_eq!(cmap.position(0.5), 0.125);
    }

    #[test]
    fn test_extrapolation_clamps() {
        let cmap = NonlinearColormap::new("viridis", &[0.0, 1.0, 2.0, 3.0, 10.0]).unwrap();
        assert_eq!(cmap.evaluate(-100.0, None), cmap.evaluate(0.0, None));
        assert_eq!(cmap.evaluate(110.0, None), cmap.evaluate(10.0, None));
    }

    #[test]
    fn test_alpha() {
        let cmap = NonlinearColormap::new("viridis", &[-1.0, 1.0]).unwrap();
        assert_eq!(cmap.evaluate(0.0, Some(0.3))[3], 0.3);
    }

    #[test]
    fn test_repeated_first_level() {
        let cmap = NonlinearColormap::new("jet", &[0.0, 0.0, 1.0, 2.0]).unwrap();
        assert!((cmap.position(0.0) - 5.0 / 6.0).abs() < 1e-12);
        assert!((cmap.position(-3.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_opaque_by_default() {
        let source = LinearSegmentedColormap::from_list(
            "translucent",
            &[[0.0, 0.0, 1.0, 0.5], [1.0, 0.0, 0.0, 0.5]],
            256,
        )
        .unwrap();
        let source: Arc<dyn Colormap> = Arc::new(source);
        let cmap = NonlinearColormap::new(source, &[-1.0, 0.0, 1.0]).unwrap();

        assert_eq!(cmap.evaluate(0.0, None)[3], 1.0);
        assert_eq!(cmap.map_normalized(0.5)[3], 1.0);
        assert_eq!(cmap.evaluate(0.0, Some(0.2))[3], 0.2);
        assert_eq!(cmap.evaluate(f64::NAN, None), BAD_COLOUR);
    }

    #[test]
    fn test_invalid_levels() {
        for levels in [vec![], vec![1.0], vec![2.0, 2.0, 2.0], vec![0.0, f64::NAN]] {
            let err = NonlinearColormap::new("jet", &levels).unwrap_err();
            assert!(matches!(err, CmapError::InvalidLevelSet { .. }));
        }
    }
}
