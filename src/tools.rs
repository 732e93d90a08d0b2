use egui::{Color32, CursorIcon, Key};
use serde::{Deserialize, Serialize};

use crate::color::BACKGROUND;

/// The editing mode applied when the pointer touches the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    Fill,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Brush, Tool::Eraser, Tool::Fill];

    pub fn name(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Fill => "Fill",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Brush => "🖌",
            Self::Eraser => "⌫",
            Self::Fill => "💧",
        }
    }

    /// Single-key shortcut that selects this tool
    pub fn shortcut_key(self) -> Key {
        match self {
            Self::Brush => Key::B,
            Self::Eraser => Key::E,
            Self::Fill => Key::F,
        }
    }

    pub fn cursor(self) -> CursorIcon {
        match self {
            Self::Brush | Self::Fill => CursorIcon::Crosshair,
            Self::Eraser => CursorIcon::Cell,
        }
    }

    /// Fill is a single click; brush and eraser keep painting while dragged.
    pub fn paints_on_drag(self) -> bool {
        !matches!(self, Self::Fill)
    }

    /// Color a single-cell paint writes with this tool
    pub fn cell_color(self, active: Color32) -> Color32 {
        match self {
            Self::Eraser => BACKGROUND,
            Self::Brush | Self::Fill => active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eraser_writes_background() {
        assert_eq!(Tool::Eraser.cell_color(Color32::RED), BACKGROUND);
        assert_eq!(Tool::Brush.cell_color(Color32::RED), Color32::RED);
    }

    #[test]
    fn test_only_fill_ignores_drag() {
        assert!(Tool::Brush.paints_on_drag());
        assert!(Tool::Eraser.paints_on_drag());
        assert!(!Tool::Fill.paints_on_drag());
    }
}
