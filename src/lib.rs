#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod grid;
pub mod history;
pub mod input;
pub mod paint;
pub mod panels;
pub mod renderer;
pub mod resolution;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use command::Command;
pub use config::Preferences;
pub use editor::Editor;
pub use error::{ColorParseError, ExportError};
pub use grid::Grid;
pub use history::History;
pub use renderer::Renderer;
pub use resolution::Resolution;
pub use state::EditorState;
pub use tools::Tool;
