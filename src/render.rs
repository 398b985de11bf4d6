//! Rendering a configured colour bar onto a fresh figure.

use std::sync::Arc;
use std::time::Instant;

use crate::colorbar::{build_colour_bar, ColorbarId};
use crate::colormaps::Colormap;
use crate::config::Config;
use crate::error::Result;
use crate::figure::ImageFigure;
use crate::logging::{log_operation_end, log_operation_start};
use crate::reference::ColormapRef;
use crate::truncate::truncate;

/// Draw the colour bar described by `config` on a figure of the configured size
pub fn render_colour_bar(config: &Config) -> Result<(ImageFigure, ColorbarId)> {
    let start = Instant::now();
    let bar = &config.colorbar;
    let details = format!(
        "colormap={} ncolors={} range=[{}, {}]",
        bar.colormap, bar.ncolors, bar.min_threshold, bar.max_threshold
    );
    log_operation_start("render_colour_bar", Some(&details));

    let mut cmap = config.colormap_ref()?;
    if let Some(limits) = bar.truncate {
        let truncated: Arc<dyn Colormap> =
            Arc::new(truncate(cmap, limits.minval, limits.maxval, None)?);
        cmap = ColormapRef::Map(truncated);
    }

    let mut figure = ImageFigure::new(config.output.width, config.output.height)?;
    let cax = figure.full_axes()?;
    let id = build_colour_bar(
        &mut figure,
        cax,
        bar.ncolors,
        cmap,
        bar.min_threshold,
        bar.max_threshold,
    )?;

    log_operation_end("render_colour_bar", start, true);
    Ok((figure, id))
}
