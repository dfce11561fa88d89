//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const APP_TITLE: &str = "Loan Risk Predictor";

/// Main header showing the app title and the prediction endpoint
pub struct MainHeader<'a> {
    endpoint: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled("◆ ", styles::accent_bold()),
            Span::styled(APP_TITLE, styles::accent_bold()),
        ]);
        buf.set_line(inner.x + 1, inner.y, &title, inner.width.saturating_sub(1));

        // Endpoint right-aligned, dropped when it would collide with the title
        let endpoint = format!("{} ", self.endpoint);
        let endpoint_width = endpoint.chars().count() as u16;
        let title_width = title.width() as u16 + 2;
        if title_width + endpoint_width < inner.width {
            let x = inner.x + inner.width - endpoint_width;
            buf.set_string(x, inner.y, endpoint, styles::text_muted());
        }
    }
}
