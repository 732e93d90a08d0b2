use crate::grid::Grid;

/// Pointer interaction state.
///
/// ```text
/// Idle --pointer down--> Drawing --pointer up / leave--> Idle
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    /// A brush or eraser stroke is in progress
    Drawing {
        /// Grid contents when the stroke began, committed to history on release
        /// if anything changed
        before_stroke: Grid,
    },
}

impl EditorState {
    pub fn begin_stroke(&mut self, grid: &Grid) {
        *self = Self::Drawing {
            before_stroke: grid.clone(),
        };
    }

    /// Return to idle, handing back the pre-stroke snapshot if a stroke was active.
    pub fn end_stroke(&mut self) -> Option<Grid> {
        match std::mem::take(self) {
            Self::Drawing { before_stroke } => Some(before_stroke),
            Self::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
