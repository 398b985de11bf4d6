//! Raster figure that colour bars can be painted onto.
//!
//! The figure is an RGBA canvas with rectangular axes areas given in pixels.
//! A colour bar fills its axes: vertically (low values at the bottom) when
//! the axes is at least as tall as it is wide, horizontally (low values on
//! the left) otherwise. Ticks are drawn as black marks along the trailing
//! edge.

use image::{ImageBuffer, Rgba as Pixel, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use crate::colorbar::{AxesId, Colorbar, ColorbarId, RenderSurface, ScalarMappable};
use crate::colormaps::rgba_to_u8;
use crate::error::{CmapError, Result};
use crate::normalize::Normalize;

const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
const TICK_COLOUR: [u8; 4] = [0, 0, 0, 255];

/// Pixel rectangle of an axes area; `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxesRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl AxesRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.height >= self.width
    }
}

/// In-memory raster figure
#[derive(Debug, Clone)]
pub struct ImageFigure {
    canvas: RgbaImage,
    axes: Vec<AxesRect>,
    colorbars: Vec<Colorbar>,
}

impl ImageFigure {
    /// Blank white figure
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CmapError::InvalidParameter {
                param: "size".to_string(),
                message: format!("Figure size must be non-zero, got {}x{}", width, height),
            });
        }
        Ok(Self {
            canvas: ImageBuffer::from_pixel(width, height, Pixel(BACKGROUND)),
            axes: Vec::new(),
            colorbars: Vec::new(),
        })
    }

    /// Register an axes area; it must be non-empty and lie inside the canvas
    pub fn add_axes(&mut self, rect: AxesRect) -> Result<AxesId> {
        let fits = rect.width > 0
            && rect.height > 0
            && rect.x.checked_add(rect.width).map_or(false, |r| r <= self.canvas.width())
            && rect.y.checked_add(rect.height).map_or(false, |b| b <= self.canvas.height());
        if !fits {
            return Err(CmapError::InvalidParameter {
                param: "axes".to_string(),
                message: format!(
                    "Axes {:?} does not fit a {}x{} figure",
                    rect,
                    self.canvas.width(),
                    self.canvas.height()
                ),
            });
        }
        self.axes.push(rect);
        Ok(AxesId(self.axes.len() - 1))
    }

    /// Axes area covering the whole canvas
    pub fn full_axes(&mut self) -> Result<AxesId> {
        let (width, height) = self.canvas.dimensions();
        self.add_axes(AxesRect::new(0, 0, width, height))
    }

    pub fn axes_rect(&self, id: AxesId) -> Option<AxesRect> {
        self.axes.get(id.0).copied()
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Write the canvas as a PNG file
    pub fn save(&self, path: &Path) -> Result<()> {
        self.canvas
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| CmapError::ImageGeneration {
                message: format!("Failed to save {}: {}", path.display(), e),
            })
    }

    /// Encode the canvas as PNG
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.canvas
            .write_to(&mut buffer, image::ImageFormat::Png)
            .map_err(|e| CmapError::ImageGeneration {
                message: format!("Failed to encode PNG: {}", e),
            })?;
        Ok(buffer.into_inner())
    }

    fn paint(&mut self, id: ColorbarId) {
        let start = Instant::now();
        let colorbar = &self.colorbars[id.0];
        let rect = self.axes[colorbar.axes().0];
        let mappable = colorbar.mappable();
        let norm = mappable.norm();

        if rect.is_vertical() {
            for row in 0..rect.height {
                let fraction = 1.0 - (row as f64 + 0.5) / rect.height as f64;
                let colour = rgba_to_u8(mappable.to_rgba(norm.inverse(fraction)));
                for col in 0..rect.width {
                    self.canvas.put_pixel(rect.x + col, rect.y + row, Pixel(colour));
                }
            }
        } else {
            for col in 0..rect.width {
                let fraction = (col as f64 + 0.5) / rect.width as f64;
                let colour = rgba_to_u8(mappable.to_rgba(norm.inverse(fraction)));
                for row in 0..rect.height {
                    self.canvas.put_pixel(rect.x + col, rect.y + row, Pixel(colour));
                }
            }
        }

        for &tick in colorbar.ticks() {
            let fraction = norm.normalize(tick);
            if !(-1e-9..=1.0 + 1e-9).contains(&fraction) {
                continue;
            }
            let fraction = fraction.clamp(0.0, 1.0);
            if rect.is_vertical() {
                let row = ((1.0 - fraction) * (rect.height - 1) as f64).round() as u32;
                let length = (rect.width / 4).max(1);
                for col in rect.width - length..rect.width {
                    self.canvas.put_pixel(rect.x + col, rect.y + row, Pixel(TICK_COLOUR));
                }
            } else {
                let col = (fraction * (rect.width - 1) as f64).round() as u32;
                let length = (rect.height / 4).max(1);
                for row in rect.height - length..rect.height {
                    self.canvas.put_pixel(rect.x + col, rect.y + row, Pixel(TICK_COLOUR));
                }
            }
        }

        debug!(
            colormap = colorbar.colormap().name(),
            ticks = colorbar.ticks().len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Painted colour bar"
        );
    }
}

impl RenderSurface for ImageFigure {
    fn colorbar(&mut self, mappable: ScalarMappable, cax: AxesId) -> Result<ColorbarId> {
        if self.axes.get(cax.0).is_none() {
            return Err(CmapError::InvalidParameter {
                param: "cax".to_string(),
                message: format!("No axes with id {}", cax.0),
            });
        }
        self.colorbars.push(Colorbar::new(mappable, cax));
        let id = ColorbarId(self.colorbars.len() - 1);
        self.paint(id);
        Ok(id)
    }

    fn set_colorbar_ticks(&mut self, id: ColorbarId, ticks: &[f64]) -> Result<()> {
        let colorbar = self
            .colorbars
            .get_mut(id.0)
            .ok_or_else(|| CmapError::InvalidParameter {
                param: "colorbar".to_string(),
                message: format!("No colour bar with id {}", id.0),
            })?;
        colorbar.set_ticks(ticks);
        self.paint(id);
        Ok(())
    }

    fn colorbar_ref(&self, id: ColorbarId) -> Option<&Colorbar> {
        self.colorbars.get(id.0)
    }

    fn colorbar_mut(&mut self, id: ColorbarId) -> Option<&mut Colorbar> {
        self.colorbars.get_mut(id.0)
    }
}
