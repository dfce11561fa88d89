//! Key hint footer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use loanrisk_app::ViewState;

use crate::theme::styles;

/// One-line footer listing the keys for the visible view
pub struct KeyHints<'a> {
    view: &'a ViewState,
}

impl<'a> KeyHints<'a> {
    pub fn new(view: &'a ViewState) -> Self {
        Self { view }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.view {
            ViewState::Form => &[
                ("Tab/↓", "next"),
                ("S-Tab/↑", "prev"),
                ("←/→", "option"),
                ("Ctrl+U", "clear"),
                ("Enter", "predict"),
                ("Esc", "quit"),
            ],
            ViewState::Result(_) => &[("Enter/r", "new application"), ("Ctrl+C", "quit")],
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use loanrisk_app::PredictionOutcome;
    use loanrisk_client::test_utils::low_risk_assessment;

    #[test]
    fn test_form_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        let view = ViewState::Form;

        term.render_widget(KeyHints::new(&view), Rect::new(0, 0, 100, 1));

        assert!(term.buffer_contains("Enter predict"));
        assert!(term.buffer_contains("Esc quit"));
    }

    #[test]
    fn test_result_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        let view = ViewState::Result(PredictionOutcome::new(low_risk_assessment(), None));

        term.render_widget(KeyHints::new(&view), Rect::new(0, 0, 100, 1));

        assert!(term.buffer_contains("new application"));
        assert!(!term.buffer_contains("predict"));
    }
}
