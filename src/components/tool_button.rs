use eframe::egui;
use crate::tools::Tool;

pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(37, 99, 235) // Blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(75) // Lighter gray on hover
            } else {
                egui::Color32::from_gray(55)
            };

            ui.painter().rect_filled(rect, 6.0, bg_color);

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(18.0),
                egui::Color32::WHITE,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    6.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(96, 165, 250)),
                );
            }
        }

        let shortcut = format!("{:?}", self.tool.shortcut_key());
        response.on_hover_text(format!("{} ({shortcut})", self.tool.name()))
    }
}
