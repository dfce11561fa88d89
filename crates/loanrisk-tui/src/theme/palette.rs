//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_RED: Color = Color::Red; // Error banner
pub const STATUS_YELLOW: Color = Color::Yellow; // Advisory notes, key hints

// --- Inputs ---
pub const INPUT_FOCUSED_BG: Color = Color::Rgb(30, 36, 48);

// --- Submit button ---
pub const BUTTON_BG: Color = Color::Blue;
pub const BUTTON_DISABLED_BG: Color = Color::Rgb(50, 50, 60);
pub const CONTRAST_FG: Color = Color::Black;
