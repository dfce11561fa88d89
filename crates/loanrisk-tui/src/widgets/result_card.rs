//! Result card for a received risk assessment

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use loanrisk_app::PredictionOutcome;

use crate::theme::{css, styles};

/// Shows the score, category and message in the backend's color
pub struct ResultCard<'a> {
    outcome: &'a PredictionOutcome,
}

impl<'a> ResultCard<'a> {
    pub fn new(outcome: &'a PredictionOutcome) -> Self {
        Self { outcome }
    }

    /// Rows needed at `width`, borders included, once the text is wrapped
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2).max(1);
        let rows = self.paragraph().line_count(inner);
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }

    fn paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let assessment = &self.outcome.assessment;
        let color = css::assessment_color(&assessment.color);
        let emphasis = Style::default().fg(color).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("Default Probability", styles::text_secondary())),
            Line::from(Span::styled(assessment.score_text(), emphasis)),
            Line::from(""),
            Line::from(Span::styled(assessment.risk_category.clone(), emphasis)),
            Line::from(""),
            Line::from(Span::styled(
                assessment.message.clone(),
                styles::text_primary(),
            )),
        ];

        if let Some(advisory) = &self.outcome.advisory {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                advisory.clone(),
                styles::status_yellow(),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Assessed at {}",
                self.outcome.received_at.format("%H:%M:%S")
            ),
            styles::text_muted(),
        )));
        lines
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Risk Assessment ", styles::text_secondary()));

        self.paragraph().block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use loanrisk_client::test_utils::low_risk_assessment;
    use ratatui::style::Color;

    fn render(outcome: &PredictionOutcome) -> TestTerminal {
        render_at(outcome, 60)
    }

    fn render_at(outcome: &PredictionOutcome, width: u16) -> TestTerminal {
        let card = ResultCard::new(outcome);
        let mut term = TestTerminal::with_size(width, card.height(width));
        let area = term.area();
        term.render_widget(card, area);
        term
    }

    #[test]
    fn test_shows_score_category_and_message() {
        let outcome = PredictionOutcome::new(low_risk_assessment(), None);
        let term = render(&outcome);

        assert!(term.buffer_contains("12.5%"));
        assert!(term.buffer_contains("Low"));
        assert!(term.buffer_contains("Good standing"));
        assert!(term.buffer_contains("Assessed at"));
    }

    #[test]
    fn test_score_drawn_in_backend_color() {
        let mut assessment = low_risk_assessment();
        assessment.color = "#ffcc00".to_string();
        let outcome = PredictionOutcome::new(assessment, None);
        let term = render(&outcome);

        let content = term.content();
        let (row, line) = content
            .lines()
            .enumerate()
            .find(|(_, l)| l.contains("12.5%"))
            .expect("score row");
        let col = line.chars().position(|c| c == '1').expect("score column");
        let cell = &term.buffer()[(col as u16, row as u16)];
        assert_eq!(cell.fg, Color::Rgb(255, 204, 0));
    }

    #[test]
    fn test_advisory_is_shown() {
        let outcome =
            PredictionOutcome::new(low_risk_assessment(), Some("Loan is large".to_string()));
        let term = render(&outcome);

        assert!(term.buffer_contains("Loan is large"));
    }

    #[test]
    fn test_height_counts_wrapped_message() {
        let short = PredictionOutcome::new(low_risk_assessment(), None);
        let mut assessment = low_risk_assessment();
        assessment.message = "Estimated default risk is 99.0%. Alerts: Critical: \
            Debt-to-income ratio exceeds 60%.; Critical: Extremely low disposable income."
            .to_string();
        let long = PredictionOutcome::new(assessment, None);

        let short_height = ResultCard::new(&short).height(60);
        assert_eq!(short_height, 10);
        assert!(ResultCard::new(&long).height(60) > short_height);
        assert!(ResultCard::new(&long).height(30) > ResultCard::new(&long).height(60));
    }

    #[test]
    fn test_narrow_card_keeps_message_and_timestamp() {
        let mut assessment = low_risk_assessment();
        assessment.message = "Estimated default risk is 99.0%. Alerts: Critical: \
            Extremely low disposable income."
            .to_string();
        let outcome = PredictionOutcome::new(assessment, Some("Loan is large".to_string()));

        let term = render_at(&outcome, 24);

        assert!(term.buffer_contains("disposable"));
        assert!(term.buffer_contains("Loan is large"));
        assert!(term.buffer_contains("Assessed at"));
    }
}
