use egui::color_picker::{self, Alpha};

use crate::command::Command;
use crate::components::ToolButton;
use crate::config::{MAX_CELL_SIZE, MIN_CELL_SIZE};
use crate::editor::Editor;
use crate::resolution::Resolution;
use crate::tools::Tool;

/// Toolbar across the top of the window. Returns the commands the user asked for.
pub fn tools_panel(ctx: &egui::Context, editor: &Editor, status: Option<&str>) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let mut resolution = editor.resolution();
            egui::ComboBox::from_id_salt("resolution")
                .selected_text(resolution.label())
                .show_ui(ui, |ui| {
                    for option in Resolution::ALL {
                        ui.selectable_value(&mut resolution, option, option.label());
                    }
                })
                .response
                .on_hover_text("Canvas size (clears the drawing)");
            if resolution != editor.resolution() {
                commands.push(Command::SetResolution(resolution));
            }

            let mut color = editor.color();
            if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque)
                .on_hover_text("Color Picker")
                .changed()
            {
                commands.push(Command::SetColor(color));
            }

            ui.separator();

            for tool in Tool::ALL {
                if ToolButton::new(tool, editor.tool() == tool).show(ui).clicked() {
                    commands.push(Command::SetTool(tool));
                }
            }

            ui.separator();

            let mut cell_size = editor.cell_size();
            if ui
                .add(egui::Slider::new(&mut cell_size, MIN_CELL_SIZE..=MAX_CELL_SIZE).text("Cell"))
                .changed()
            {
                commands.push(Command::SetCellSize(cell_size));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("💾 Save").on_hover_text("Save as PNG").clicked() {
                    commands.push(Command::Export);
                }
                let history = editor.history();
                if ui
                    .add_enabled(history.can_redo(), egui::Button::new("⟳ Redo"))
                    .on_hover_text("Redo")
                    .clicked()
                {
                    commands.push(Command::Redo);
                }
                if ui
                    .add_enabled(history.can_undo(), egui::Button::new("⟲ Undo"))
                    .on_hover_text("Undo")
                    .clicked()
                {
                    commands.push(Command::Undo);
                }
                if ui
                    .add_enabled(!editor.grid().is_blank(), egui::Button::new("Clear"))
                    .clicked()
                {
                    commands.push(Command::Clear);
                }
            });
        });

        ui.horizontal(|ui| {
            let history = editor.history();
            ui.weak(format!(
                "{} · {} · undo {} · redo {}",
                editor.resolution(),
                editor.tool().name(),
                history.undo_len(),
                history.redo_len()
            ));
            if let Some(status) = status {
                ui.separator();
                ui.label(status);
            }
        });
        ui.add_space(2.0);
    });

    commands
}
