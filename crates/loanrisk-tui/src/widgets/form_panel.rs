//! Loan application form with the submit button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use loanrisk_app::{AppState, FieldId, FieldKind};

use crate::theme::styles;

/// Braille spinner shown in the submit button while a request is outstanding
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Widest the label column gets
const LABEL_WIDTH: u16 = 30;

/// Input form: one row per field, a spacer, and the submit button
pub struct FormPanel<'a> {
    state: &'a AppState,
}

impl<'a> FormPanel<'a> {
    /// Rows needed including borders
    pub const HEIGHT: u16 = FieldId::ALL.len() as u16 + 4;

    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn field_line(&self, field: FieldId) -> Line<'static> {
        let form = &self.state.form;
        let focused = form.focused == field;

        if field.kind() == FieldKind::Select {
            let arrow_style = if focused {
                styles::accent_bold()
            } else {
                styles::text_muted()
            };
            return Line::from(vec![
                Span::styled("◀ ", arrow_style),
                Span::styled(
                    form.home_ownership.label().to_string(),
                    styles::input_value(focused),
                ),
                Span::styled(" ▶", arrow_style),
            ]);
        }

        let value = form.value(field).unwrap_or_default();
        let mut spans = if value.is_empty() {
            vec![Span::styled(
                field.placeholder().to_string(),
                styles::input_placeholder(focused),
            )]
        } else {
            vec![Span::styled(value.to_string(), styles::input_value(focused))]
        };

        if focused {
            spans.insert(0, Span::styled("▏", styles::accent_bold()));
        }
        Line::from(spans)
    }

    fn button_text(&self) -> String {
        if self.state.submitting {
            let spinner = SPINNER[self.state.spinner_frame % SPINNER.len()];
            format!("  {} {}  ", spinner, self.state.submit_label())
        } else {
            format!("  {}  ", self.state.submit_label())
        }
    }
}

impl Widget for FormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.state.view.is_form())
            .title(Span::styled(" Applicant ", styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let label_width = LABEL_WIDTH.min(inner.width / 2);
        let value_width = inner.width.saturating_sub(label_width + 1);

        for (row, field) in FieldId::ALL.iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.bottom() {
                return;
            }

            let focused = self.state.form.focused == *field;
            let marker = if focused { "› " } else { "  " };
            let label = Line::from(vec![
                Span::styled(marker, styles::accent_bold()),
                Span::styled(field.label(), styles::field_label(focused)),
            ]);
            buf.set_line(inner.x, y, &label, label_width);

            let value_area = Rect::new(inner.x + label_width + 1, y, value_width, 1);
            if focused {
                buf.set_style(value_area, styles::input_value(true));
            }
            buf.set_line(value_area.x, y, &self.field_line(*field), value_width);
        }

        // Spacer row, then the button
        let button_y = inner.y + FieldId::ALL.len() as u16 + 1;
        if button_y >= inner.bottom() {
            return;
        }
        let text = self.button_text();
        let text_width = (text.chars().count() as u16).min(inner.width);
        let x = inner.x + (inner.width - text_width) / 2;
        buf.set_stringn(
            x,
            button_y,
            &text,
            text_width as usize,
            styles::button(self.state.can_submit()),
        );
    }
}
