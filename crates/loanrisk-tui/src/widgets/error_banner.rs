//! Error banner shown above the form

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Marker in front of every error message
const WARNING_PREFIX: &str = "⚠️ ";

/// Text of the error region for a message
pub fn banner_text(message: &str) -> String {
    format!("{}{}", WARNING_PREFIX, message)
}

/// Error region; render only when an error is set
pub struct ErrorBanner<'a> {
    message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Rows needed to show the whole message at `width`
    pub fn height(&self, width: u16) -> u16 {
        let rows = self.paragraph().line_count(width.max(1));
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(banner_text(self.message))
            .style(styles::status_red().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paragraph().render(area, buf);
    }
}
