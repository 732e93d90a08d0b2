use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of canvas sizes the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resolution {
    R16,
    #[default]
    R32,
    R64,
    R128,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::R16,
        Resolution::R32,
        Resolution::R64,
        Resolution::R128,
    ];

    pub fn width(self) -> usize {
        match self {
            Self::R16 => 16,
            Self::R32 => 32,
            Self::R64 => 64,
            Self::R128 => 128,
        }
    }

    // All offered resolutions are square
    pub fn height(self) -> usize {
        self.width()
    }

    pub fn cell_count(self) -> usize {
        self.width() * self.height()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::R16 => "16x16",
            Self::R32 => "32x32",
            Self::R64 => "64x64",
            Self::R128 => "128x128",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(Resolution::R16.width(), 16);
        assert_eq!(Resolution::R128.height(), 128);
        assert_eq!(Resolution::R64.cell_count(), 4096);
        assert_eq!(Resolution::default(), Resolution::R32);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Resolution::ALL.iter().map(|res| res.label()).collect();
        assert_eq!(labels, ["16x16", "32x32", "64x64", "128x128"]);
        assert_eq!(Resolution::R128.to_string(), "128x128");
    }
}
