//! Navigation list widget
//!
//! Renders the derived sidebar rows as a scrollable list. The cursor row is
//! highlighted via the list state (which also keeps it in view when moving),
//! the active entry is styled independently so it stays visible even when
//! the cursor is elsewhere.

use qdeck_app::{AppState, SidebarRow};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

pub struct SidebarList<'a> {
    state: &'a AppState,
    focused: bool,
}

impl<'a> SidebarList<'a> {
    pub fn new(state: &'a AppState, focused: bool) -> Self {
        Self { state, focused }
    }

    fn item(&self, row: &SidebarRow, width: u16) -> ListItem<'static> {
        match row {
            SidebarRow::ChapterHeader { number, title } => ListItem::new(Line::from(vec![
                Span::styled(format!("Chapter {number} "), styles::chapter_header()),
                Span::styled(title.clone(), styles::text_secondary()),
            ])),
            SidebarRow::Entry {
                label,
                question,
                active,
                ..
            } => {
                let text_style = if *active {
                    styles::entry_active()
                } else {
                    styles::text_secondary()
                };
                // label + spaces + question must fit the inner width
                let question_width = (width as usize).saturating_sub(label.len() + 4);
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {label} "), styles::text_muted()),
                    Span::styled(truncate_to_width(question, question_width), text_style),
                ]))
            }
        }
    }
}

impl StatefulWidget for SidebarList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, list_state: &mut ListState) {
        let block = styles::pane_block(self.focused).title(" Questions ");
        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .state
            .sidebar
            .iter()
            .map(|row| self.item(row, inner.width))
            .collect();

        list_state.select(Some(self.state.cursor));

        let list = List::new(items).highlight_style(styles::accent_bold());
        StatefulWidget::render(list, inner, buf, list_state);
    }
}

/// Truncate to a display width, appending an ellipsis when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // Reserve one cell for the ellipsis
    let budget = max_width - 1;
    let mut width = 0usize;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
