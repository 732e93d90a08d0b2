//! Cell mutation for the editing tools.
//!
//! Both entry points mutate the grid in place and report how much changed, so
//! callers can decide whether an edit is worth a history entry.

use egui::Color32;

use crate::grid::Grid;
use crate::tools::Tool;

/// Paint a single cell with `tool`.
///
/// Coordinates off the grid are silently ignored. Returns true when the cell
/// actually changed color.
pub fn paint_at(grid: &mut Grid, x: i64, y: i64, tool: Tool, color: Color32) -> bool {
    let Some(index) = grid.index_of(x, y) else {
        return false;
    };
    grid.set(index, tool.cell_color(color))
}

/// Flood fill from the cell under `(x, y)`, replacing its color region.
///
/// Returns the number of cells recolored; off-grid coordinates recolor nothing.
pub fn fill_at(grid: &mut Grid, x: i64, y: i64, replacement: Color32) -> usize {
    let Some(start) = grid.index_of(x, y) else {
        return 0;
    };
    let Some(target) = grid.get(start) else {
        return 0;
    };
    flood_fill(grid, start, target, replacement)
}

/// 4-connected flood fill starting at `start`.
///
/// Every cell reachable from `start` through up/down/left/right neighbors whose
/// color equals `target` becomes `replacement`. Uses an explicit stack so large
/// regions never recurse. Returns the number of cells recolored.
pub fn flood_fill(grid: &mut Grid, start: usize, target: Color32, replacement: Color32) -> usize {
    if target == replacement || start >= grid.len() {
        return 0;
    }

    let width = grid.width();
    let height = grid.height();
    let mut filled = 0;
    let mut stack = vec![start];

    while let Some(index) = stack.pop() {
        // Cells can be pushed more than once before they're recolored
        if grid.get(index) != Some(target) {
            continue;
        }
        grid.set(index, replacement);
        filled += 1;

        let (x, y) = grid.coords_of(index);
        if x > 0 {
            stack.push(index - 1);
        }
        if x + 1 < width {
            stack.push(index + 1);
        }
        if y > 0 {
            stack.push(index - width);
        }
        if y + 1 < height {
            stack.push(index + width);
        }
    }

    log::debug!("Flood fill from cell {start} recolored {filled} cells");
    filled
}
