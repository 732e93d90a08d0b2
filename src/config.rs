use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::{self, DEFAULT_PAINT};
use crate::resolution::Resolution;
use crate::tools::Tool;

pub const MIN_CELL_SIZE: u32 = 2;
pub const MAX_CELL_SIZE: u32 = 32;
pub const DEFAULT_CELL_SIZE: u32 = 10;

/// User preferences restored between runs.
///
/// Only settings live here; the drawing and its history are never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    /// Canvas size a new session starts with
    pub resolution: Resolution,
    /// On-screen pixels per cell, also used when exporting
    pub cell_size: u32,
    /// Active paint color as `#rrggbb`
    pub color: String,
    pub tool: Tool,
    /// Where exported PNGs are written on native platforms
    pub export_dir: PathBuf,
    /// Cap on undo depth, `None` for unbounded
    pub history_limit: Option<usize>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            cell_size: DEFAULT_CELL_SIZE,
            color: color::to_hex(DEFAULT_PAINT),
            tool: Tool::default(),
            export_dir: PathBuf::from("."),
            history_limit: None,
        }
    }
}

impl Preferences {
    /// The stored paint color, falling back to the default if it doesn't parse
    pub fn paint_color(&self) -> Color32 {
        color::parse_hex(&self.color).unwrap_or_else(|err| {
            log::warn!("Ignoring stored paint color: {err}");
            DEFAULT_PAINT
        })
    }

    pub fn clamped_cell_size(&self) -> u32 {
        self.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{ "cell_size": 16 }"#).unwrap();
        assert_eq!(prefs.cell_size, 16);
        assert_eq!(prefs.resolution, Resolution::R32);
        assert_eq!(prefs.paint_color(), DEFAULT_PAINT);
        assert_eq!(prefs.history_limit, None);
    }

    #[test]
    fn test_round_trips_through_json() {
        let prefs = Preferences {
            resolution: Resolution::R64,
            tool: Tool::Fill,
            color: "#ff0000".to_owned(),
            ..Preferences::default()
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let restored: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, prefs);
        assert_eq!(restored.paint_color(), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_bad_values_are_tamed() {
        let prefs = Preferences {
            color: "not a color".to_owned(),
            cell_size: 500,
            ..Preferences::default()
        };
        assert_eq!(prefs.paint_color(), DEFAULT_PAINT);
        assert_eq!(prefs.clamped_cell_size(), MAX_CELL_SIZE);
    }
}
