//! Theming of the pages, driven by the liturgical colour of the day

use crossterm::style::{ContentStyle, Stylize};
use csscolorparser::Color;

use crate::color::LiturgicalColor;

/// Page background
pub const BACKGROUND_HEX: &str = "#FDFCF0";

/// The accent colour of the application, and the ways to apply it
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    color: LiturgicalColor,
}

impl Theme {
    pub fn from_color(color: LiturgicalColor) -> Self {
        Self { color }
    }

    pub fn color(&self) -> LiturgicalColor { self.color }
    pub fn accent_hex(&self) -> &'static str { self.color.hex() }
    pub fn accent(&self) -> Color { self.color.display_color() }

    /// The stylesheet that forces the accent colour onto the sidebar and the buttons
    pub fn stylesheet(&self) -> String {
        let accent = self.accent_hex();
        format!(
r#"<style>
.app {{ background-color: {background}; }}
.sidebar {{ background-color: {accent} !important; }}
.sidebar * {{ color: white !important; }}
.button {{ background-color: {accent}; color: white; border-radius: 12px; font-weight: bold; height: 3em; }}
.checkbox {{ padding: 10px; border-radius: 5px; }}
</style>"#,
            background = BACKGROUND_HEX,
            accent = accent,
        )
    }

    /// The accent, as a 24-bit terminal colour
    pub fn accent_color(&self) -> crossterm::style::Color {
        let accent = self.accent();
        let to_u8 = |channel: f64| (channel * 255.0).round() as u8;
        crossterm::style::Color::Rgb { r: to_u8(accent.r), g: to_u8(accent.g), b: to_u8(accent.b) }
    }

    /// A terminal style with the accent as foreground
    pub fn style(&self) -> ContentStyle {
        ContentStyle::new().with(self.accent_color())
    }

    /// Returns `text`, to be displayed with the accent colour
    pub fn paint(&self, text: &str) -> String {
        text.with(self.accent_color()).to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(LiturgicalColor::default())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_uses_the_accent() {
        let theme = Theme::from_color(LiturgicalColor::Red);
        let css = theme.stylesheet();
        assert!(css.contains(".sidebar { background-color: #8B0000 !important; }"));
        assert!(css.contains(".button { background-color: #8B0000;"));
        assert!(css.contains(BACKGROUND_HEX));
    }

    #[test]
    fn accent_color() {
        use crossterm::style::Color::Rgb;
        assert_eq!(Theme::from_color(LiturgicalColor::Green).accent_color(), Rgb { r: 30, g: 86, b: 49 });
        assert_eq!(Theme::from_color(LiturgicalColor::Violet).accent_color(), Rgb { r: 75, g: 0, b: 130 });
        assert_eq!(Theme::from_color(LiturgicalColor::Red).accent_color(), Rgb { r: 139, g: 0, b: 0 });
    }

    #[test]
    fn paint() {
        use crossterm::style::Color::Rgb;
        let theme = Theme::default();
        let painted = theme.paint("Pax");
        assert!(painted.contains("Pax"));
        assert_eq!(painted, "Pax".with(Rgb { r: 30, g: 86, b: 49 }).to_string());
        assert_eq!(theme.style().foreground_color, Some(theme.accent_color()));
    }
}
