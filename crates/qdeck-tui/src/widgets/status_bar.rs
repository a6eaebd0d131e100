//! Status bar widget
//!
//! One line of key hints matching what the current layout and view state
//! actually respond to, plus the record count on the right.

use qdeck_app::{AppState, LayoutMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        let narrow_detail =
            self.state.layout == LayoutMode::Narrow && self.state.view.detail_visible;
        if narrow_detail {
            "Esc back · ↑/↓ scroll · q quit"
        } else {
            "↑/↓ navigate · Enter select · j/k scroll · q quit"
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = format!("{} questions", self.state.dataset.len());
        let hints = self.hints();

        let pad = (area.width as usize)
            .saturating_sub(hints.chars().count() + count.chars().count() + 2);

        let line = Line::from(vec![
            Span::styled(hints, styles::text_muted()),
            Span::raw(" ".repeat(pad + 1)),
            Span::styled(count, styles::text_muted()),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
