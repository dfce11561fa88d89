//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Widest the form or result card gets on large terminals
pub const CONTENT_MAX_WIDTH: u16 = 72;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and endpoint
    pub header: Rect,

    /// Form or result card
    pub body: Rect,

    /// Key hints, when enabled
    pub footer: Option<Rect>,
}

/// Create the main screen layout
pub fn create(area: Rect, show_key_hints: bool) -> ScreenAreas {
    if show_key_hints {
        let chunks = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

        ScreenAreas {
            header: chunks[0],
            body: chunks[1],
            footer: Some(chunks[2]),
        }
    } else {
        let chunks =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).split(area);

        ScreenAreas {
            header: chunks[0],
            body: chunks[1],
            footer: None,
        }
    }
}

/// Horizontally center a column of at most `max_width` within `area`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = max_width.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, area.height)
}
