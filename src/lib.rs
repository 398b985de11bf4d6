//! # cmapkit
//!
//! Helpers layered on lookup-table colormaps: truncating a colormap to a
//! sub-range, discretizing it into `N` flat bins, drawing colour bars tied to
//! data thresholds, and colour scaling for unevenly spaced levels or around a
//! chosen midpoint.
//!
//! ## Key Features
//!
//! - **Truncation**: keep only part of a colormap whose ends are hard to read
//! - **Discretization**: uniform resampling or breakpoint steps
//! - **Threshold colour bars**: ticks in data units on any [`RenderSurface`]
//! - **Non-linear levels**: equal colour steps per level, not per data unit
//! - **Midpoint normalization**: pin a data value to the colormap centre
//!
//! Every colormap built here is an immutable value and can be shared across
//! threads freely.
//!
//! ```no_run
//! use cmapkit::{build_colour_bar, ImageFigure};
//!
//! let mut figure = ImageFigure::new(60, 400)?;
//! let cax = figure.full_axes()?;
//! build_colour_bar(&mut figure, cax, 5, "jet", 10.0, 60.0)?;
//! figure.save(std::path::Path::new("colorbar.png"))?;
//! # Ok::<(), cmapkit::CmapError>(())
//! ```

pub mod colorbar;
pub mod colormaps;
pub mod config;
pub mod discretize;
pub mod error;
pub mod figure;
pub mod interpolation;
pub mod logging;
pub mod nonlinear;
pub mod normalize;
pub mod reference;
pub mod render;
pub mod truncate;
pub mod useful;

pub use colorbar::{build_colour_bar, AxesId, Colorbar, ColorbarId, RenderSurface, ScalarMappable};
pub use colormaps::{get_colormap, Colormap, LinearSegmentedColormap, Rgba};
pub use config::Config;
pub use discretize::{discretize_breakpoints, discretize_uniform};
pub use error::{CmapError, Result};
pub use figure::{AxesRect, ImageFigure};
pub use logging::{init_tracing, log_error, log_operation_end, log_operation_start, log_timed_operation};
pub use nonlinear::{LevelScaling, NonlinearColormap};
pub use normalize::{LinearNorm, MidpointNorm, Normalize};
pub use reference::ColormapRef;
pub use render::render_colour_bar;
pub use truncate::truncate;
pub use useful::{dark_earth, nice_terrain};
