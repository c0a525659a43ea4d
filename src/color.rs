//! Maps liturgical colour names to the colours the application is themed with

use std::fmt::{Display, Formatter};

use csscolorparser::Color;

/// Hex code of the colour used for every unknown colour name
pub const DEFAULT_HEX: &str = "#1E5631";

/// The colours of the liturgical year, as far as theming is concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiturgicalColor {
    /// Ordinary Time
    Green,
    /// Advent and Lent. `purple` and `violet` are both used by calendars
    Violet,
    /// Martyrs, Pentecost, the Passion
    Red,
    /// Feasts, Christmas, Easter. White is displayed as gold, so that it remains visible on a light background
    Gold,
}

impl Default for LiturgicalColor {
    fn default() -> Self {
        LiturgicalColor::Green
    }
}

impl LiturgicalColor {
    /// Resolve a colour name (case-insensitive). Unknown names resolve to [`LiturgicalColor::Green`]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "green" => LiturgicalColor::Green,
            "purple" | "violet" => LiturgicalColor::Violet,
            "red" => LiturgicalColor::Red,
            "white" | "gold" => LiturgicalColor::Gold,
            other => {
                log::debug!("Unknown liturgical colour {:?}, using the default one", other);
                LiturgicalColor::default()
            },
        }
    }

    /// The display colour, as a `#RRGGBB` string
    pub fn hex(&self) -> &'static str {
        match self {
            LiturgicalColor::Green => DEFAULT_HEX,  // forest green
            LiturgicalColor::Violet => "#4B0082",   // indigo
            LiturgicalColor::Red => "#8B0000",      // crimson
            LiturgicalColor::Gold => "#B8860B",
        }
    }

    fn rgb(&self) -> (u8, u8, u8) {
        match self {
            LiturgicalColor::Green => (0x1E, 0x56, 0x31),
            LiturgicalColor::Violet => (0x4B, 0x00, 0x82),
            LiturgicalColor::Red => (0x8B, 0x00, 0x00),
            LiturgicalColor::Gold => (0xB8, 0x86, 0x0B),
        }
    }

    /// The display colour
    pub fn display_color(&self) -> Color {
        let (r, g, b) = self.rgb();
        Color {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LiturgicalColor::Green => "Green",
            LiturgicalColor::Violet => "Violet",
            LiturgicalColor::Red => "Red",
            LiturgicalColor::Gold => "Gold",
        }
    }
}

impl Display for LiturgicalColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolve a colour name (e.g. as returned by the calendar API) into a `#RRGGBB` display colour
pub fn resolve_color(name: &str) -> &'static str {
    LiturgicalColor::from_name(name).hex()
}
