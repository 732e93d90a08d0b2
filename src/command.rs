use egui::Color32;

use crate::resolution::Resolution;
use crate::tools::Tool;

/// Actions the UI and input layers ask the editor to perform.
///
/// Pointer coordinates are cell coordinates and may lie outside the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Primary button pressed over the canvas
    PointerDown { x: i64, y: i64 },
    /// Pointer moved to a new cell while held down
    PointerMove { x: i64, y: i64 },
    /// Primary button released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
    Undo,
    Redo,
    SetTool(Tool),
    SetColor(Color32),
    SetResolution(Resolution),
    /// Change the on-screen (and exported) size of one cell, in pixels
    SetCellSize(u32),
    /// Reset the canvas to background as a single undoable edit
    Clear,
    /// Save the drawing as a PNG
    Export,
}

impl Command {
    /// Short label for logging and status display
    pub fn label(&self) -> &'static str {
        match self {
            Command::PointerDown { .. } => "Pointer Down",
            Command::PointerMove { .. } => "Pointer Move",
            Command::PointerUp => "Pointer Up",
            Command::PointerLeave => "Pointer Leave",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::SetTool(_) => "Set Tool",
            Command::SetColor(_) => "Set Color",
            Command::SetResolution(_) => "Set Resolution",
            Command::SetCellSize(_) => "Set Cell Size",
            Command::Clear => "Clear",
            Command::Export => "Export",
        }
    }

    /// Pointer traffic is high-frequency and kept out of the info log
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Command::PointerDown { .. }
                | Command::PointerMove { .. }
                | Command::PointerUp
                | Command::PointerLeave
        )
    }
}
