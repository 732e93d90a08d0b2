use egui::Color32;

use crate::color::BACKGROUND;
use crate::resolution::Resolution;

/// Flat row-major store of cell colors.
///
/// Cell `(x, y)` lives at index `y * width + x`. The length of `cells` always
/// equals `width * height`; nothing here ever grows or shrinks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Color32>,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: Color32) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// An all-background grid sized for `resolution`
    pub fn blank(resolution: Resolution) -> Self {
        Self {
            width: resolution.width(),
            height: resolution.height(),
            cells: vec![BACKGROUND; resolution.cell_count()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Color32] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Color32> {
        self.cells.get(index).copied()
    }

    pub fn get_xy(&self, x: i64, y: i64) -> Option<Color32> {
        self.index_of(x, y).and_then(|index| self.get(index))
    }

    /// Write one cell. Returns true if the stored color changed; indices past
    /// the end are ignored.
    pub fn set(&mut self, index: usize, color: Color32) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if *cell != color => {
                *cell = color;
                true
            }
            _ => false,
        }
    }

    /// Map a coordinate to its index, or `None` when it lies off the grid.
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return None;
        };
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Swap in a whole new cell sequence. A sequence of the wrong length is
    /// rejected and the grid is left untouched.
    pub fn replace(&mut self, cells: Vec<Color32>) -> bool {
        if cells.len() != self.cells.len() {
            log::warn!(
                "Ignoring grid replacement with {} cells, expected {}",
                cells.len(),
                self.cells.len()
            );
            return false;
        }
        self.cells = cells;
        true
    }

    /// True when every cell holds the background color
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == BACKGROUND)
    }

    /// Iterate `(x, y, color)` in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Color32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &color)| (index % self.width, index / self.width, color))
    }
}
