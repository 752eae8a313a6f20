//! PNG rendering of laid-out tiles

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    BACKGROUND_COLOR, DEFAULT_CORNER_RADIUS, DEFAULT_TILE_GAP, MAX_IMAGE_DIMENSION,
};
use crate::io::error::{Result, TreemapError, invalid_parameter};
use crate::io::items::Tile;
use crate::io::palette::{max_magnitude, tile_color};

/// Appearance of a rendered treemap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels trimmed from every tile edge, leaving background between tiles
    pub gap: u32,
    /// Radius of the rounded tile corners in pixels
    pub corner_radius: u32,
    /// Colour behind the tiles
    pub background: [u8; 4],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gap: DEFAULT_TILE_GAP,
            corner_radius: DEFAULT_CORNER_RADIUS,
            background: BACKGROUND_COLOR,
        }
    }
}

// Pixel-space tile after the gap is applied
#[derive(Debug, Clone, Copy)]
struct PixelBox {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    radius: f64,
}

impl PixelBox {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64, options: &RenderOptions) -> Option<Self> {
        let inset = f64::from(options.gap) / 2.0;
        let left = x1 + inset;
        let top = y1 + inset;
        let right = x2 - inset;
        let bottom = y2 - inset;
        if right <= left || bottom <= top {
            return None;
        }
        let radius = f64::from(options.corner_radius)
            .min((right - left) / 2.0)
            .min((bottom - top) / 2.0);
        Some(Self {
            left,
            top,
            right,
            bottom,
            radius,
        })
    }

    // Sampled at the pixel centre
    fn covers(&self, px: u32, py: u32) -> bool {
        let x = f64::from(px) + 0.5;
        let y = f64::from(py) + 0.5;
        if x < self.left || x >= self.right || y < self.top || y >= self.bottom {
            return false;
        }
        if self.radius <= 0.0 {
            return true;
        }

        let cx = x.clamp(self.left + self.radius, self.right - self.radius);
        let cy = y.clamp(self.top + self.radius, self.bottom - self.radius);
        let dx = x - cx;
        let dy = y - cy;
        dx.mul_add(dx, dy * dy) <= self.radius * self.radius
    }
}

/// Render tiles onto a canvas of the given pixel size
///
/// Tiles with non-finite geometry are skipped. Tile coordinates outside the
/// canvas are clipped.
///
/// # Errors
///
/// Returns an error if a canvas dimension is zero or exceeds
/// [`MAX_IMAGE_DIMENSION`]
pub fn render_tiles(
    tiles: &[Tile<'_>],
    canvas_width: u32,
    canvas_height: u32,
    options: &RenderOptions,
) -> Result<RgbaImage> {
    for (parameter, value) in [("canvas_width", canvas_width), ("canvas_height", canvas_height)]
    {
        if value == 0 || value > MAX_IMAGE_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must be between 1 and {MAX_IMAGE_DIMENSION}"),
            ));
        }
    }

    let mut img = RgbaImage::from_pixel(canvas_width, canvas_height, Rgba(options.background));
    let magnitude = max_magnitude(tiles.iter().map(|tile| tile.item.intensity));

    for tile in tiles {
        if !tile.rect.is_finite() {
            tracing::warn!(index = tile.index, "skipping tile with non-finite geometry");
            continue;
        }
        let Some(pixel_box) = PixelBox::new(
            tile.rect.x1,
            tile.rect.y1,
            tile.rect.x2,
            tile.rect.y2,
            options,
        ) else {
            continue;
        };

        let color = Rgba(tile_color(tile.item.intensity, magnitude));
        let x_start = pixel_box.left.floor().max(0.0) as u32;
        let y_start = pixel_box.top.floor().max(0.0) as u32;
        let x_end = (pixel_box.right.ceil().max(0.0) as u32).min(canvas_width);
        let y_end = (pixel_box.bottom.ceil().max(0.0) as u32).min(canvas_height);

        for py in y_start..y_end {
            for px in x_start..x_end {
                if pixel_box.covers(px, py) {
                    img.put_pixel(px, py, color);
                }
            }
        }
    }

    Ok(img)
}

/// Render tiles and save them as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The canvas size is invalid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tiles_as_png(
    tiles: &[Tile<'_>],
    canvas_width: u32,
    canvas_height: u32,
    options: &RenderOptions,
    output_path: &Path,
) -> Result<()> {
    let img = render_tiles(tiles, canvas_width, canvas_height, options)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TreemapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TreemapError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
