//! `TestBackend` terminal for widget and screen assertions

use loanrisk_app::AppState;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

use crate::render;

pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        *self.buffer().area()
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("render widget");
    }

    /// Draw the whole screen for `state`
    pub fn draw_view(&mut self, state: &AppState) {
        self.terminal
            .draw(|frame| render::view(frame, state))
            .expect("draw view");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Rows of the buffer joined with newlines
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|row| self.row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, row: u16, text: &str) -> bool {
        self.row(row).contains(text)
    }

    fn row(&self, row: u16) -> String {
        let buffer = self.buffer();
        if row >= buffer.area.height {
            return String::new();
        }
        (0..buffer.area.width)
            .map(|col| buffer[(col, row)].symbol())
            .collect()
    }
}
