// src/renderer.rs
use eframe::egui::{self, Pos2, Rect, Stroke, Vec2};

use crate::color::GRID_LINE;
use crate::grid::Grid;

/// Paints the grid onto an egui canvas and maps screen positions back to cells.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Thin separator stroked around every cell
    grid_line: Stroke,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            grid_line: Stroke::new(1.0, GRID_LINE),
        }
    }

    /// Screen size of the whole canvas
    ///
    /// Args:
    ///     grid (Grid): The grid being displayed
    ///     cell_size (u32): Pixels per cell
    pub fn canvas_size(grid: &Grid, cell_size: u32) -> Vec2 {
        let cell = cell_size as f32;
        egui::vec2(grid.width() as f32 * cell, grid.height() as f32 * cell)
    }

    /// Screen rectangle covered by cell `(x, y)`
    pub fn cell_rect(origin: Pos2, x: usize, y: usize, cell_size: u32) -> Rect {
        let cell = cell_size as f32;
        Rect::from_min_size(
            origin + egui::vec2(x as f32 * cell, y as f32 * cell),
            egui::vec2(cell, cell),
        )
    }

    /// Map a screen position to a cell coordinate.
    ///
    /// The result is not clamped; positions outside the canvas produce
    /// out-of-range coordinates for the paint engine to reject.
    pub fn cell_at(pos: Pos2, canvas_rect: Rect, cell_size: u32) -> (i64, i64) {
        let cell = cell_size.max(1) as f32;
        let local = pos - canvas_rect.min;
        ((local.x / cell).floor() as i64, (local.y / cell).floor() as i64)
    }

    /// Renders the grid
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     canvas_rect (egui::Rect): Where the canvas sits on screen
    ///     grid (Grid): The cells to draw
    ///     cell_size (u32): Pixels per cell
    pub fn render(&self, painter: &egui::Painter, canvas_rect: Rect, grid: &Grid, cell_size: u32) {
        let clip = painter.clip_rect();
        for (x, y, color) in grid.iter_cells() {
            let rect = Self::cell_rect(canvas_rect.min, x, y, cell_size);
            // Large canvases scroll; skip what can't be seen
            if !clip.intersects(rect) {
                continue;
            }
            painter.rect_filled(rect, 0.0, color);
            painter.rect_stroke(rect, 0.0, self.grid_line);
        }
    }
}
