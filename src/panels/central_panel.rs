use crate::command::Command;
use crate::editor::Editor;
use crate::input::InputHandler;
use crate::renderer::Renderer;

/// The drawing canvas. Returns the pointer commands produced this frame.
pub fn central_panel(
    ctx: &egui::Context,
    editor: &Editor,
    renderer: &Renderer,
    input: &mut InputHandler,
) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both()
            .drag_to_scroll(false)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let size = Renderer::canvas_size(editor.grid(), editor.cell_size());
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());

                renderer.render(&painter, response.rect, editor.grid(), editor.cell_size());

                if response.hovered() {
                    ctx.set_cursor_icon(editor.tool().cursor());
                }

                commands = input.process_input(ctx, &response, editor.cell_size());
            });
    });

    commands
}
