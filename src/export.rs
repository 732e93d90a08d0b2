//! PNG export of the drawing, cropped to the painted area.

use chrono::{DateTime, Utc};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

use crate::color::is_background;
use crate::config::MAX_CELL_SIZE;
use crate::error::ExportResult;
use crate::grid::Grid;
use crate::resolution::Resolution;

/// Inclusive cell bounds of the exported region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl CropRect {
    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }

    /// Shrink the rect so it lies entirely within `grid`.
    pub fn clamped_to(&self, grid: &Grid) -> CropRect {
        let max_x = self.max_x.min(grid.width().saturating_sub(1));
        let max_y = self.max_y.min(grid.height().saturating_sub(1));
        CropRect {
            min_x: self.min_x.min(max_x),
            min_y: self.min_y.min(max_y),
            max_x,
            max_y,
        }
    }
}

/// An encoded image ready to be handed to the user
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub crop: CropRect,
    pub width: u32,
    pub height: u32,
}

/// Tight bounds of all non-background cells, or the whole grid when nothing
/// has been painted.
pub fn bounding_box(grid: &Grid) -> CropRect {
    let mut bounds: Option<CropRect> = None;

    for (x, y, color) in grid.iter_cells() {
        if is_background(color) {
            continue;
        }
        let rect = bounds.get_or_insert(CropRect {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        });
        rect.min_x = rect.min_x.min(x);
        rect.min_y = rect.min_y.min(y);
        rect.max_x = rect.max_x.max(x);
        rect.max_y = rect.max_y.max(y);
    }

    bounds.unwrap_or(CropRect {
        min_x: 0,
        min_y: 0,
        max_x: grid.width().saturating_sub(1),
        max_y: grid.height().saturating_sub(1),
    })
}

/// Draw the cropped region at `cell_size` pixels per cell.
///
/// Background cells stay fully transparent; painted cells are opaque. The crop
/// is clamped to the grid and `cell_size` to `1..=MAX_CELL_SIZE`.
pub fn render_image(grid: &Grid, crop: CropRect, cell_size: u32) -> RgbaImage {
    let crop = crop.clamped_to(grid);
    let cell_size = cell_size.clamp(1, MAX_CELL_SIZE);
    let width = crop.width() as u32 * cell_size;
    let height = crop.height() as u32 * cell_size;
    let mut image = RgbaImage::new(width, height);

    for y in crop.min_y..=crop.max_y {
        for x in crop.min_x..=crop.max_x {
            let Some(color) = grid.get_xy(x as i64, y as i64) else {
                continue;
            };
            if is_background(color) {
                continue;
            }
            let pixel = Rgba([color.r(), color.g(), color.b(), 255]);
            let left = (x - crop.min_x) as u32 * cell_size;
            let top = (y - crop.min_y) as u32 * cell_size;
            for py in top..top + cell_size {
                for px in left..left + cell_size {
                    image.put_pixel(px, py, pixel);
                }
            }
        }
    }

    image
}

/// Crop, render, and PNG-encode the grid.
pub fn render_png(grid: &Grid, cell_size: u32) -> ExportResult<(CropRect, RgbaImage, Vec<u8>)> {
    let crop = bounding_box(grid);
    let image = render_image(grid, crop, cell_size);
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok((crop, image, bytes))
}

/// `pixel-art-32x32-2024-05-01T12-30-45-123Z.png`
pub fn export_file_name(resolution: Resolution, timestamp: DateTime<Utc>) -> String {
    format!(
        "pixel-art-{}x{}-{}.png",
        resolution.width(),
        resolution.height(),
        timestamp.format("%Y-%m-%dT%H-%M-%S-%3fZ")
    )
}

/// Produce the complete export for the current drawing.
pub fn export(
    grid: &Grid,
    resolution: Resolution,
    cell_size: u32,
    timestamp: DateTime<Utc>,
) -> ExportResult<ExportedImage> {
    let (crop, image, bytes) = render_png(grid, cell_size)?;
    let exported = ExportedImage {
        file_name: export_file_name(resolution, timestamp),
        bytes,
        crop,
        width: image.width(),
        height: image.height(),
    };
    log::debug!(
        "Encoded {} ({}x{} px, {} bytes)",
        exported.file_name,
        exported.width,
        exported.height,
        exported.bytes.len()
    );
    Ok(exported)
}
