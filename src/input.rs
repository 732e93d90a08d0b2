use egui::{Context, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Rect, Response};

use crate::command::Command;
use crate::renderer::Renderer;
use crate::tools::Tool;

/// Primary-button pointer state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Latest pointer position in screen coordinates
    pub position: Option<Pos2>,
    /// Whether the pointer is over the visible canvas
    pub is_in_canvas: bool,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button is held
    pub down: bool,
    /// Primary button went up this frame
    pub released: bool,
}

/// Turns raw egui pointer input over the canvas into editor commands
#[derive(Debug, Default)]
pub struct InputHandler {
    last_cell: Option<(i64, i64)>,
    was_in_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's pointer state for the canvas `response` and
    /// translate it into commands.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        response: &Response,
        cell_size: u32,
    ) -> Vec<Command> {
        let is_in_canvas = response.contains_pointer();
        let sample = ctx.input(|input| PointerSample {
            position: input.pointer.interact_pos(),
            is_in_canvas,
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            down: input.pointer.primary_down(),
            released: input.pointer.button_released(PointerButton::Primary),
        });
        self.process_sample(sample, response.rect, cell_size)
    }

    /// Translate one pointer sample; `canvas_rect` anchors cell (0, 0).
    pub fn process_sample(
        &mut self,
        sample: PointerSample,
        canvas_rect: Rect,
        cell_size: u32,
    ) -> Vec<Command> {
        let mut commands = Vec::new();
        let cell = sample
            .position
            .map(|pos| Renderer::cell_at(pos, canvas_rect, cell_size));

        match cell {
            Some((x, y)) if sample.pressed && sample.is_in_canvas => {
                commands.push(Command::PointerDown { x, y });
                self.last_cell = cell;
            }
            Some((x, y)) if sample.down && sample.is_in_canvas && cell != self.last_cell => {
                commands.push(Command::PointerMove { x, y });
                self.last_cell = cell;
            }
            _ => {}
        }

        if sample.released {
            commands.push(Command::PointerUp);
            self.last_cell = None;
        } else if self.was_in_canvas && !sample.is_in_canvas {
            commands.push(Command::PointerLeave);
            self.last_cell = None;
        }

        self.was_in_canvas = sample.is_in_canvas;
        commands
    }
}

/// Keyboard shortcuts for history, export, and tool selection
pub fn shortcut_commands(ctx: &Context) -> Vec<Command> {
    let mut commands = Vec::new();

    // Shift+Z must be checked before plain Z, which would also match it
    let redo_shift = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
    let redo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
    let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
    let save = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

    ctx.input_mut(|input| {
        if input.consume_shortcut(&redo_shift) || input.consume_shortcut(&redo) {
            commands.push(Command::Redo);
        } else if input.consume_shortcut(&undo) {
            commands.push(Command::Undo);
        }
        if input.consume_shortcut(&save) {
            commands.push(Command::Export);
        }
    });

    if !ctx.wants_keyboard_input() {
        ctx.input(|input| {
            if input.modifiers.is_none() {
                for tool in Tool::ALL {
                    if input.key_pressed(tool.shortcut_key()) {
                        commands.push(Command::SetTool(tool));
                    }
                }
            }
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(160.0, 160.0))
    }

    fn sample(x: f32, y: f32, pressed: bool, down: bool, released: bool) -> PointerSample {
        let position = egui::pos2(x, y);
        PointerSample {
            position: Some(position),
            is_in_canvas: canvas().contains(position),
            pressed,
            down,
            released,
        }
    }

    #[test]
    fn test_press_drag_release() {
        let mut input = InputHandler::new();
        let down = input.process_sample(sample(5.0, 5.0, true, true, false), canvas(), 10);
        assert_eq!(down, vec![Command::PointerDown { x: 0, y: 0 }]);

        // Same cell again: nothing new
        let still = input.process_sample(sample(8.0, 8.0, false, true, false), canvas(), 10);
        assert!(still.is_empty());

        let moved = input.process_sample(sample(25.0, 5.0, false, true, false), canvas(), 10);
        assert_eq!(moved, vec![Command::PointerMove { x: 2, y: 0 }]);

        let up = input.process_sample(sample(25.0, 5.0, false, false, true), canvas(), 10);
        assert_eq!(up, vec![Command::PointerUp]);
    }

    #[test]
    fn test_leaving_canvas_ends_stroke() {
        let mut input = InputHandler::new();
        input.process_sample(sample(5.0, 5.0, true, true, false), canvas(), 10);
        let left = input.process_sample(sample(200.0, 5.0, false, true, false), canvas(), 10);
        assert_eq!(left, vec![Command::PointerLeave]);

        // Still outside: no repeated leave, no painting
        let outside = input.process_sample(sample(210.0, 5.0, false, true, false), canvas(), 10);
        assert!(outside.is_empty());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = InputHandler::new();
        let commands = input.process_sample(sample(300.0, 300.0, true, true, false), canvas(), 10);
        assert!(commands.is_empty());
    }

    fn ctrl(shift: bool) -> Modifiers {
        Modifiers {
            ctrl: true,
            command: true,
            shift,
            ..Modifiers::default()
        }
    }

    // Run one frame with a single key press and collect the shortcut commands
    fn press(key: Key, modifiers: Modifiers) -> Vec<Command> {
        let ctx = Context::default();
        let raw_input = egui::RawInput {
            modifiers,
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..egui::RawInput::default()
        };
        let mut commands = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            commands = shortcut_commands(ctx);
        });
        commands
    }

    #[test]
    fn test_history_shortcuts() {
        assert_eq!(press(Key::Z, ctrl(false)), vec![Command::Undo]);
        assert_eq!(press(Key::Z, ctrl(true)), vec![Command::Redo]);
        assert_eq!(press(Key::Y, ctrl(false)), vec![Command::Redo]);
    }

    #[test]
    fn test_save_shortcut() {
        assert_eq!(press(Key::S, ctrl(false)), vec![Command::Export]);
    }

    #[test]
    fn test_tool_keys_need_no_modifiers() {
        assert_eq!(press(Key::F, Modifiers::NONE), vec![Command::SetTool(Tool::Fill)]);
        assert_eq!(press(Key::B, Modifiers::NONE), vec![Command::SetTool(Tool::Brush)]);
        assert_eq!(press(Key::E, Modifiers::NONE), vec![Command::SetTool(Tool::Eraser)]);
        assert!(press(Key::F, ctrl(false)).is_empty());
    }

    #[test]
    fn test_hover_without_button_does_nothing() {
        let mut input = InputHandler::new();
        let commands = input.process_sample(sample(50.0, 50.0, false, false, false), canvas(), 10);
        assert!(commands.is_empty());
    }
}
