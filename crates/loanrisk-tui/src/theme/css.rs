//! CSS color values mapped to terminal colors
//!
//! The prediction backend tags each assessment with a CSS color such as
//! `"green"`, `"red"` or `"#ffcc00"`.

use std::str::FromStr;

use ratatui::style::Color;

use super::palette;

/// CSS names ratatui does not know, as RGB
const CSS_EXTRA_NAMES: &[(&str, (u8, u8, u8))] = &[
    ("orange", (255, 165, 0)),
    ("gold", (255, 215, 0)),
    ("crimson", (220, 20, 60)),
    ("lime", (0, 255, 0)),
    ("teal", (0, 128, 128)),
    ("purple", (128, 0, 128)),
];

/// Parse a CSS color value.
///
/// Accepts `#rgb`, `#rrggbb`, the basic CSS color names, and anything
/// ratatui's own color parser understands. Returns `None` otherwise.
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = value.to_ascii_lowercase();
    if let Some((_, (r, g, b))) = CSS_EXTRA_NAMES.iter().find(|(name, _)| *name == lower) {
        return Some(Color::Rgb(*r, *g, *b));
    }

    Color::from_str(&lower).ok()
}

/// Color for an assessment, falling back to the accent color
pub fn assessment_color(value: &str) -> Color {
    parse_css_color(value).unwrap_or(palette::ACCENT)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|c| {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v * 16 + v
            });
            Some(Color::Rgb(channels.next()?, channels.next()?, channels.next()?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}
