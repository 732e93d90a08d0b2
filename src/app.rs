use crate::command::Command;
use crate::config::Preferences;
use crate::editor::Editor;
use crate::export;
use crate::file_handler::FileHandler;
use crate::input::{self, InputHandler};
use crate::panels;
use crate::renderer::Renderer;

/// We derive Deserialize/Serialize so we can persist preferences on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    preferences: Preferences,
    // The drawing only lives for the session
    #[serde(skip)]
    editor: Editor,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    /// Result of the last export, shown in the toolbar
    #[serde(skip)]
    status: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_preferences(Preferences::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let preferences: Preferences = cc
            .storage
            .and_then(|storage| eframe::get_value::<PaintApp>(storage, eframe::APP_KEY))
            .map(|stored| stored.preferences)
            .unwrap_or_default();
        log::info!("Starting with preferences: {preferences:?}");

        Self::with_preferences(preferences)
    }

    pub fn with_preferences(preferences: Preferences) -> Self {
        Self {
            editor: Editor::from_preferences(&preferences),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            status: None,
            preferences,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn execute_command(&mut self, command: Command) {
        if !command.is_pointer() {
            log::debug!("Executing command: {}", command.label());
        }
        match command {
            Command::Export => self.export(),
            other => self.editor.execute(other),
        }
    }

    /// Encode the drawing and hand it to the platform's file delivery.
    pub fn export(&mut self) {
        let handler = FileHandler::new(self.preferences.export_dir.clone());
        let result = export::export(
            self.editor.grid(),
            self.editor.resolution(),
            self.editor.cell_size(),
            chrono::Utc::now(),
        )
        .and_then(|image| handler.save(&image));

        self.status = Some(match result {
            Ok(location) => format!("Saved {location}"),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.editor.store_preferences(&mut self.preferences);
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = input::shortcut_commands(ctx);
        commands.extend(panels::tools_panel(ctx, &self.editor, self.status.as_deref()));
        commands.extend(panels::central_panel(
            ctx,
            &self.editor,
            &self.renderer,
            &mut self.input,
        ));

        if !commands.is_empty() {
            for command in commands {
                self.execute_command(command);
            }
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::Resolution;
    use crate::tools::Tool;

    #[test]
    fn test_app_starts_from_preferences() {
        let app = PaintApp::with_preferences(Preferences {
            resolution: Resolution::R64,
            tool: Tool::Fill,
            ..Preferences::default()
        });
        assert_eq!(app.editor().resolution(), Resolution::R64);
        assert_eq!(app.editor().tool(), Tool::Fill);
        assert_eq!(app.status(), None);
    }

    #[test]
    fn test_commands_reach_editor() {
        let mut app = PaintApp::default();
        app.execute_command(Command::PointerDown { x: 0, y: 0 });
        app.execute_command(Command::PointerUp);
        assert_eq!(app.editor().history().undo_len(), 1);
        app.execute_command(Command::Undo);
        assert!(app.editor().grid().is_blank());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_export_writes_to_export_dir() {
        let dir = std::env::temp_dir().join(format!("pixel_paint_app_{}", std::process::id()));
        let mut app = PaintApp::with_preferences(Preferences {
            export_dir: dir.clone(),
            ..Preferences::default()
        });
        app.execute_command(Command::PointerDown { x: 3, y: 3 });
        app.execute_command(Command::PointerUp);
        app.execute_command(Command::Export);

        assert!(app.status().is_some_and(|s| s.starts_with("Saved")));
        let saved: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
        assert_eq!(saved.len(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }
}
