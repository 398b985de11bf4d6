//! Colormap implementations.
//!
//! This module provides the colormap interface, the lookup-table colormap used
//! by every builder in the crate, and a registry of named built-in maps.

pub mod classic;
pub mod colormap;
pub mod diverging;
pub mod registry;
pub mod segmented;
pub mod sequential;

pub use colormap::{
    lut_index, rgb8_to_rgba, rgba_to_u8, Colormap, LutIndex, Reversed, Rgba,
    BAD_COLOUR, DEFAULT_RESOLUTION,
};
pub use registry::{available_colormaps, get_colormap};
pub use segmented::{LinearSegmentedColormap, Segment, SegmentData};
