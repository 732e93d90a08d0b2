use crate::grid::Grid;

/// Linear undo/redo history of full grid snapshots.
///
/// The undo stack holds the states that preceded each committed edit, oldest
/// first. Recording a new edit always clears the redo stack.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Snapshots that can be restored by undo
    undo_stack: Vec<Grid>,
    /// Snapshots that can be restored by redo
    redo_stack: Vec<Grid>,
    /// Optional cap on the undo depth; the oldest snapshot is dropped first
    limit: Option<usize>,
}

impl History {
    /// Creates an empty, unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history keeping at most `max` undo snapshots
    pub fn with_limit(max: usize) -> Self {
        Self {
            limit: Some(max.max(1)),
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Push the state preceding an edit and discard anything redoable.
    pub fn record(&mut self, before: Grid) {
        self.undo_stack.push(before);
        self.enforce_limit();
        self.redo_stack.clear();
    }

    /// Record `before` only if it differs from `current`.
    pub fn commit_if_changed(&mut self, before: Grid, current: &Grid) -> bool {
        if before == *current {
            return false;
        }
        self.record(before);
        true
    }

    /// Restore the most recent snapshot into `current`.
    ///
    /// The state being replaced moves onto the redo stack. Returns false, and
    /// leaves everything alone, when there is nothing to undo.
    pub fn undo(&mut self, current: &mut Grid) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let replaced = std::mem::replace(current, previous);
        self.redo_stack.push(replaced);
        true
    }

    /// Reverse the last undo.
    pub fn redo(&mut self, current: &mut Grid) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let replaced = std::mem::replace(current, next);
        self.undo_stack.push(replaced);
        self.enforce_limit();
        true
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop every snapshot
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
            }
        }
    }
}
