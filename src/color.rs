use egui::Color32;

use crate::error::ColorParseError;

/// The "empty" cell color. Doubles as the transparency marker on export.
pub const BACKGROUND: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);

/// Separator drawn around every cell on the canvas
pub const GRID_LINE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Paint color a fresh session starts with
pub const DEFAULT_PAINT: Color32 = Color32::WHITE;

/// Parse a `#rrggbb` (or short `#rgb`) string into an opaque color.
pub fn parse_hex(input: &str) -> Result<Color32, ColorParseError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingPrefix(trimmed.to_owned()))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit(trimmed.to_owned()));
    }

    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit(trimmed.to_owned()))
    };

    match digits.len() {
        6 => Ok(Color32::from_rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            // #abc expands to #aabbcc
            let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            Ok(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
        }
        len => Err(ColorParseError::InvalidLength(len)),
    }
}

/// Format a color as lowercase `#rrggbb`, ignoring alpha.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

pub fn is_background(color: Color32) -> bool {
    color == BACKGROUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(parse_hex("#1a1a1a"), Ok(BACKGROUND));
        assert_eq!(parse_hex("#FF8000"), Ok(Color32::from_rgb(255, 128, 0)));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(parse_hex("#fff"), Ok(Color32::WHITE));
        assert_eq!(parse_hex("#f00"), Ok(Color32::from_rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_hex("ffffff"),
            Err(ColorParseError::MissingPrefix("ffffff".to_owned()))
        );
        assert_eq!(parse_hex("#ffff"), Err(ColorParseError::InvalidLength(4)));
        assert_eq!(
            parse_hex("#gg0000"),
            Err(ColorParseError::InvalidDigit("#gg0000".to_owned()))
        );
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(to_hex(BACKGROUND), "#1a1a1a");
        assert_eq!(to_hex(Color32::from_rgb(1, 2, 255)), "#0102ff");
        assert_eq!(parse_hex(&to_hex(GRID_LINE)), Ok(GRID_LINE));
    }
}
