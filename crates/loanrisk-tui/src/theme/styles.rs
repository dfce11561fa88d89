//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Form inputs ---
pub fn input_value(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::INPUT_FOCUSED_BG)
    } else {
        text_primary()
    }
}

pub fn input_placeholder(focused: bool) -> Style {
    let style = text_muted().add_modifier(Modifier::ITALIC);
    if focused {
        style.bg(palette::INPUT_FOCUSED_BG)
    } else {
        style
    }
}

pub fn field_label(focused: bool) -> Style {
    if focused {
        accent_bold()
    } else {
        text_secondary()
    }
}

// --- Submit button ---
pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::BUTTON_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::BUTTON_DISABLED_BG)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
