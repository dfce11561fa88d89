//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use loanrisk_app::{AppState, PredictionOutcome, ViewState};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Exactly one of the form and the result card is drawn, chosen by
/// `state.view`.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.show_key_hints);

    frame.render_widget(
        widgets::MainHeader::new(&state.settings.server.base_url),
        areas.header,
    );

    let column = layout::centered_column(areas.body, layout::CONTENT_MAX_WIDTH);
    match &state.view {
        ViewState::Form => render_form(frame, state, column),
        ViewState::Result(outcome) => render_result(frame, outcome, column),
    }

    if let Some(footer) = areas.footer {
        frame.render_widget(widgets::KeyHints::new(&state.view), footer);
    }
}

/// Form panel with the error banner beneath it
fn render_form(frame: &mut Frame, state: &AppState, area: Rect) {
    let banner = state.error.as_deref().map(widgets::ErrorBanner::new);
    let banner_width = area.width.saturating_sub(2);
    let banner_height = banner.as_ref().map_or(0, |b| b.height(banner_width));

    let chunks = Layout::vertical([
        Constraint::Length(widgets::FormPanel::HEIGHT),
        Constraint::Length(banner_height),
        Constraint::Min(0),
    ])
    .split(area);

    frame.render_widget(widgets::FormPanel::new(state), chunks[0]);

    if let Some(banner) = banner {
        let banner_area = Rect {
            x: chunks[1].x + 1,
            width: banner_width,
            ..chunks[1]
        };
        frame.render_widget(banner, banner_area);
    }
}

fn render_result(frame: &mut Frame, outcome: &PredictionOutcome, area: Rect) {
    let card = widgets::ResultCard::new(outcome);
    let height = card.height(area.width);
    let chunks = Layout::vertical([Constraint::Length(height), Constraint::Min(0)])
        .split(area);
    frame.render_widget(card, chunks[0]);
}
