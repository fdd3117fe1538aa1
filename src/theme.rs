//! Branding theme derived from bundle configuration.
//!
//! Styling and data are independent concerns: the theme only ever reads the
//! two branding colors, never chart contents.

use crate::config::AppConfig;
use ratatui::prelude::Color;

/// Fallback accents used when a palette entry is missing or malformed.
const FALLBACK_CYCLE: [Color; 5] = [
    Color::Cyan,
    Color::LightBlue,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightMagenta,
];

/// Parse a `#RRGGBB` string into a terminal color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Resolved branding colors for the shell.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
}

impl Theme {
    /// Derive the theme from branding config, falling back to the default
    /// accents on malformed hex values.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            primary: parse_hex_color(&config.primary_color).unwrap_or(Color::Cyan),
            secondary: parse_hex_color(&config.secondary_color).unwrap_or(Color::LightBlue),
        }
    }

    /// Positional palette lookup for chart series and categories.
    ///
    /// Indexes the chart's own palette first, cycling when it is shorter than
    /// the number of slots. Malformed entries fall back to the built-in cycle.
    pub fn chart_color(&self, palette: &[String], index: usize) -> Color {
        if !palette.is_empty() {
            if let Some(color) = parse_hex_color(&palette[index % palette.len()]) {
                return color;
            }
        }
        match index % (FALLBACK_CYCLE.len() + 2) {
            0 => self.primary,
            1 => self.secondary,
            n => FALLBACK_CYCLE[(n - 2) % FALLBACK_CYCLE.len()],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::LightBlue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_hex() {
        assert_eq!(parse_hex_color("#4F46E5"), Some(Color::Rgb(0x4F, 0x46, 0xE5)));
        assert_eq!(parse_hex_color("#818CF8"), Some(Color::Rgb(0x81, 0x8C, 0xF8)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex_color("4F46E5"), None); // missing '#'
        assert_eq!(parse_hex_color("#FFF"), None); // short form unsupported
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    // A palette shorter than the slot count cycles instead of failing.
    fn palette_cycles_positionally() {
        let theme = Theme::default();
        let palette = vec!["#4F46E5".to_string(), "#818CF8".to_string()];
        assert_eq!(theme.chart_color(&palette, 0), Color::Rgb(0x4F, 0x46, 0xE5));
        assert_eq!(theme.chart_color(&palette, 1), Color::Rgb(0x81, 0x8C, 0xF8));
        assert_eq!(theme.chart_color(&palette, 2), Color::Rgb(0x4F, 0x46, 0xE5));
    }

    #[test]
    fn empty_palette_uses_branding_accents() {
        let theme = Theme::default();
        assert_eq!(theme.chart_color(&[], 0), theme.primary);
        assert_eq!(theme.chart_color(&[], 1), theme.secondary);
    }
}
