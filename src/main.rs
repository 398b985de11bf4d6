//! cmapkit - render a discrete, threshold-labelled colour bar to PNG
//!
//! This is the main entry point for the cmapkit binary.

use tracing::{error, info};

use cmapkit::{init_tracing, log_error, log_timed_operation, render_colour_bar, Config, Result};

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    init_tracing(&config.log_level);
    info!("Starting cmapkit v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let (figure, _) = render_colour_bar(&config).map_err(|e| {
        log_error(&e, "rendering colour bar");
        e
    })?;

    log_timed_operation("save_png", || figure.save(&config.output.path)).map_err(|e| {
        log_error(&e, "writing output");
        e
    })?;

    info!(
        path = %config.output.path.display(),
        width = config.output.width,
        height = config.output.height,
        "Colour bar written"
    );
    Ok(())
}
