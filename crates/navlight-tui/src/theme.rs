//! Terminal palettes for the light and dark site themes

use navlight_core::config::{ColorOverrides, PaletteConfig};
use navlight_core::Theme;
use ratatui::style::Color;

/// Colors the preview draws with
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    /// Header, dropdowns and modal
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    /// Active navigation links
    pub active: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0xfa, 0xfa, 0xf7),
            surface: Color::Rgb(0xee, 0xec, 0xe6),
            text: Color::Rgb(0x1f, 0x1f, 0x24),
            muted: Color::Rgb(0x6b, 0x6b, 0x75),
            accent: Color::Rgb(0x2f, 0x5b, 0xd3),
            active: Color::Rgb(0xd3, 0x5b, 0x2f),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x14, 0x15, 0x1a),
            surface: Color::Rgb(0x22, 0x24, 0x2c),
            text: Color::Rgb(0xe8, 0xe6, 0xe1),
            muted: Color::Rgb(0x8c, 0x8f, 0x99),
            accent: Color::Rgb(0x7d, 0xa2, 0xff),
            active: Color::Rgb(0xff, 0x9e, 0x64),
        }
    }

    /// Palette for `theme` with the user's overrides applied
    pub fn for_theme(theme: Theme, config: &PaletteConfig) -> Self {
        match theme {
            Theme::Light => apply_overrides(Self::light(), &config.light),
            Theme::Dark => apply_overrides(Self::dark(), &config.dark),
        }
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn apply_overrides(mut palette: Palette, overrides: &ColorOverrides) -> Palette {
    let slots: [(&Option<String>, &mut Color); 6] = [
        (&overrides.background, &mut palette.background),
        (&overrides.surface, &mut palette.surface),
        (&overrides.text, &mut palette.text),
        (&overrides.muted, &mut palette.muted),
        (&overrides.accent, &mut palette.accent),
        (&overrides.active, &mut palette.active),
    ];
    for (hex, slot) in slots {
        match hex.as_deref().map(|h| (h, parse_hex_color(h))) {
            Some((_, Some(color))) => *slot = color,
            Some((raw, None)) => tracing::warn!("Ignoring invalid color override: {}", raw),
            None => {}
        }
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn test_overrides_only_touch_their_theme() {
        let mut config = PaletteConfig::default();
        config.dark.accent = Some("#010203".to_string());
        config.dark.text = Some("not a color".to_string());

        let dark = Palette::for_theme(Theme::Dark, &config);
        assert_eq!(dark.accent, Color::Rgb(1, 2, 3));
        assert_eq!(dark.text, Palette::dark().text);
        assert_eq!(Palette::for_theme(Theme::Light, &config), Palette::light());
    }
}
