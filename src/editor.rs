use egui::Color32;

use crate::color::{self, BACKGROUND, DEFAULT_PAINT};
use crate::command::Command;
use crate::config::{self, Preferences};
use crate::error::ColorParseError;
use crate::grid::Grid;
use crate::history::History;
use crate::paint;
use crate::resolution::Resolution;
use crate::state::EditorState;
use crate::tools::Tool;

/// One editing session: the canvas, its history, and the active settings.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    resolution: Resolution,
    history: History,
    tool: Tool,
    color: Color32,
    cell_size: u32,
    state: EditorState,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Resolution::default())
    }
}

impl Editor {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            grid: Grid::blank(resolution),
            resolution,
            history: History::new(),
            tool: Tool::default(),
            color: DEFAULT_PAINT,
            cell_size: config::DEFAULT_CELL_SIZE,
            state: EditorState::Idle,
        }
    }

    pub fn from_preferences(prefs: &Preferences) -> Self {
        let history = match prefs.history_limit {
            Some(limit) => History::with_limit(limit),
            None => History::new(),
        };
        Self {
            history,
            tool: prefs.tool,
            color: prefs.paint_color(),
            cell_size: prefs.clamped_cell_size(),
            ..Self::new(prefs.resolution)
        }
    }

    /// Copy the session's settings back into `prefs`.
    pub fn store_preferences(&self, prefs: &mut Preferences) {
        prefs.resolution = self.resolution;
        prefs.tool = self.tool;
        prefs.color = color::to_hex(self.color);
        prefs.cell_size = self.cell_size;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Apply a command. Export is delivered by the app and ignored here.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::PointerDown { x, y } => self.pointer_down(x, y),
            Command::PointerMove { x, y } => self.pointer_move(x, y),
            Command::PointerUp => {
                self.pointer_up();
            }
            Command::PointerLeave => {
                self.pointer_leave();
            }
            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
            Command::SetTool(tool) => self.set_tool(tool),
            Command::SetColor(color) => self.set_color(color),
            Command::SetResolution(resolution) => self.set_resolution(resolution),
            Command::SetCellSize(size) => self.set_cell_size(size),
            Command::Clear => {
                self.clear();
            }
            Command::Export => {}
        }
    }

    /// Start a stroke (brush, eraser) or run a fill at cell `(x, y)`.
    ///
    /// A press while a stroke is already active just keeps painting.
    pub fn pointer_down(&mut self, x: i64, y: i64) {
        if self.state.is_drawing() {
            self.pointer_move(x, y);
            return;
        }

        match self.tool {
            Tool::Fill => {
                self.fill(x, y);
            }
            Tool::Brush | Tool::Eraser => {
                self.state.begin_stroke(&self.grid);
                paint::paint_at(&mut self.grid, x, y, self.tool, self.color);
            }
        }
    }

    pub fn pointer_move(&mut self, x: i64, y: i64) {
        if self.state.is_drawing() && self.tool.paints_on_drag() {
            paint::paint_at(&mut self.grid, x, y, self.tool, self.color);
        }
    }

    /// Finish the active stroke. Returns true if it was committed to history.
    pub fn pointer_up(&mut self) -> bool {
        let Some(before_stroke) = self.state.end_stroke() else {
            return false;
        };
        let committed = self.history.commit_if_changed(before_stroke, &self.grid);
        if committed {
            log::debug!("Committed stroke, undo depth {}", self.history.undo_len());
        }
        committed
    }

    /// Leaving the canvas ends the stroke exactly like releasing the button.
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up()
    }

    /// Flood fill from `(x, y)` with the active color as its own history entry.
    /// Returns the number of cells recolored.
    pub fn fill(&mut self, x: i64, y: i64) -> usize {
        let Some(target) = self.grid.get_xy(x, y) else {
            return 0;
        };
        if target == self.color {
            return 0;
        }

        let before = self.grid.clone();
        let filled = paint::fill_at(&mut self.grid, x, y, self.color);
        if filled > 0 {
            self.history.record(before);
        }
        filled
    }

    pub fn undo(&mut self) -> bool {
        self.pointer_up();
        self.history.undo(&mut self.grid)
    }

    pub fn redo(&mut self) -> bool {
        self.pointer_up();
        self.history.redo(&mut self.grid)
    }

    /// Reallocate the canvas at `resolution`, discarding the drawing and all history.
    pub fn set_resolution(&mut self, resolution: Resolution) {
        log::info!("Resolution set to {resolution}, canvas and history reset");
        self.resolution = resolution;
        self.grid = Grid::blank(resolution);
        self.history.clear();
        self.state = EditorState::Idle;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool selected: {}", tool.name());
        }
        self.pointer_up();
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        // Cells are always opaque
        self.color = Color32::from_rgb(color.r(), color.g(), color.b());
    }

    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        self.set_color(color::parse_hex(hex)?);
        Ok(())
    }

    pub fn set_cell_size(&mut self, size: u32) {
        self.cell_size = size.clamp(config::MIN_CELL_SIZE, config::MAX_CELL_SIZE);
    }

    /// Reset every cell to background as one undoable edit.
    /// Returns false when the canvas was already blank.
    pub fn clear(&mut self) -> bool {
        self.pointer_up();
        if self.grid.is_blank() {
            return false;
        }
        let before = self.grid.clone();
        self.grid.replace(vec![BACKGROUND; self.grid.len()]);
        self.history.record(before);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preferences() {
        let prefs = Preferences {
            resolution: Resolution::R16,
            tool: Tool::Eraser,
            color: "#00ff00".to_owned(),
            cell_size: 1,
            history_limit: Some(3),
            ..Preferences::default()
        };
        let editor = Editor::from_preferences(&prefs);
        assert_eq!(editor.grid().len(), 256);
        assert_eq!(editor.tool(), Tool::Eraser);
        assert_eq!(editor.color(), Color32::from_rgb(0, 255, 0));
        assert_eq!(editor.cell_size(), config::MIN_CELL_SIZE);
        assert_eq!(editor.history().limit(), Some(3));
    }

    #[test]
    fn test_store_preferences() {
        let mut editor = Editor::new(Resolution::R64);
        editor.set_tool(Tool::Fill);
        editor.set_color(Color32::from_rgb(0x12, 0x34, 0x56));
        editor.set_cell_size(12);

        let mut prefs = Preferences::default();
        editor.store_preferences(&mut prefs);
        assert_eq!(prefs.resolution, Resolution::R64);
        assert_eq!(prefs.tool, Tool::Fill);
        assert_eq!(prefs.color, "#123456");
        assert_eq!(prefs.cell_size, 12);
    }

    #[test]
    fn test_fill_does_not_enter_drawing() {
        let mut editor = Editor::new(Resolution::R16);
        editor.set_tool(Tool::Fill);
        editor.pointer_down(0, 0);
        assert!(!editor.is_drawing());
        assert_eq!(editor.history().undo_len(), 1);

        // Dragging with the fill tool never paints, and release adds nothing
        editor.pointer_move(3, 3);
        assert!(!editor.pointer_up());
        assert_eq!(editor.history().undo_len(), 1);
    }

    #[test]
    fn test_set_color_hex() {
        let mut editor = Editor::default();
        assert!(editor.set_color_hex("#abcdef").is_ok());
        assert_eq!(editor.color(), Color32::from_rgb(0xab, 0xcd, 0xef));
        assert!(editor.set_color_hex("abcdef").is_err());
        assert_eq!(editor.color(), Color32::from_rgb(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut editor = Editor::new(Resolution::R16);
        assert!(!editor.clear());
        editor.pointer_down(1, 1);
        editor.pointer_up();
        assert!(editor.clear());
        assert!(editor.grid().is_blank());
        assert!(editor.undo());
        assert_eq!(editor.grid().get_xy(1, 1), Some(DEFAULT_PAINT));
    }

    #[test]
    fn test_undo_mid_stroke_commits_first() {
        let mut editor = Editor::new(Resolution::R16);
        editor.pointer_down(0, 0);
        assert!(editor.undo());
        assert!(!editor.is_drawing());
        assert!(editor.grid().is_blank());
        assert_eq!(editor.history().redo_len(), 1);
    }
}
