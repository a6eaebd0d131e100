//! Detail pane widget
//!
//! Shows the selected record: breadcrumb, title, subtitle, answer body, and
//! the optional code block and footer. Also owns the two fallback states of
//! the content region: the empty-state placeholder and the load-failure
//! message.

use qdeck_app::{AppState, DetailView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct DetailPane<'a> {
    state: &'a AppState,
    focused: bool,
}

impl<'a> DetailPane<'a> {
    pub fn new(state: &'a AppState, focused: bool) -> Self {
        Self { state, focused }
    }
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::pane_block(self.focused).title(" Answer ");
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(error) = &self.state.load_error {
            Paragraph::new(Line::styled(error.clone(), styles::error_text()))
                .wrap(Wrap { trim: false })
                .render(inner, buf);
            return;
        }

        let Some(view) = &self.state.detail else {
            Paragraph::new(Line::styled(
                "Select a question from the list to get started.",
                styles::text_muted(),
            ))
            .render(inner, buf);
            return;
        };

        Paragraph::new(detail_lines(view))
            .wrap(Wrap { trim: false })
            .scroll((self.state.detail_scroll, 0))
            .render(inner, buf);
    }
}

/// Build the full detail text, one styled line per row
fn detail_lines(view: &DetailView) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(breadcrumb_line(&view.breadcrumb));
    lines.push(Line::default());
    lines.push(Line::styled(view.title.clone(), styles::title()));
    if !view.subtitle.is_empty() {
        lines.push(Line::styled(view.subtitle.clone(), styles::subtitle()));
    }
    lines.push(Line::default());

    // The answer is trusted pre-formatted markup, shown verbatim
    for row in view.answer.split('\n') {
        lines.push(Line::styled(row.to_string(), styles::text_primary()));
    }

    if let Some(code) = &view.code {
        lines.push(Line::default());
        lines.push(Line::styled("── Example ──", styles::code_rule()));
        for row in code.split('\n') {
            lines.push(Line::styled(format!("  {row}"), styles::code()));
        }
        lines.push(Line::styled("─────────────", styles::code_rule()));
    }

    if let Some(footer) = &view.footer {
        lines.push(Line::default());
        for row in footer.split('\n') {
            lines.push(Line::styled(row.to_string(), styles::text_secondary()));
        }
    }

    lines
}

/// "Chapter 1 / Question 05" with the question segment accented
fn breadcrumb_line(breadcrumb: &str) -> Line<'static> {
    match breadcrumb.split_once(" / ") {
        Some((chapter, question)) => Line::from(vec![
            Span::styled(chapter.to_string(), styles::text_muted()),
            Span::styled(" / ".to_string(), styles::text_muted()),
            Span::styled(question.to_string(), styles::accent()),
        ]),
        None => Line::styled(breadcrumb.to_string(), styles::text_muted()),
    }
}
