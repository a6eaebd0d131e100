//! Screen layout definitions for the TUI
//!
//! Splits the screen into sidebar, detail, and status areas. In narrow
//! layout only one of sidebar/detail is present, per the view state.

use qdeck_app::{AppState, LayoutMode};
use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar column width in wide layout
const SIDEBAR_WIDTH: u16 = 38;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation list pane (absent in narrow layout while detail shows)
    pub sidebar: Option<Rect>,

    /// Detail pane (absent in narrow layout while the list shows)
    pub detail: Option<Rect>,

    /// One-line status bar with key hints
    pub status: Rect,
}

/// Compute the screen areas from the state's layout mode and view state
pub fn create(area: Rect, state: &AppState) -> ScreenAreas {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    let content = chunks[0];
    let status = chunks[1];

    match state.layout {
        LayoutMode::Wide => {
            let panes =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                    .split(content);
            ScreenAreas {
                sidebar: Some(panes[0]),
                detail: Some(panes[1]),
                status,
            }
        }
        LayoutMode::Narrow if state.view.detail_visible => ScreenAreas {
            sidebar: None,
            detail: Some(content),
            status,
        },
        LayoutMode::Narrow => ScreenAreas {
            sidebar: Some(content),
            detail: None,
            status,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdeck_core::chapter::ChapterSet;
    use qdeck_core::dataset::Dataset;
    use qdeck_core::record::Record;

    fn state(layout: LayoutMode) -> AppState {
        AppState::new(
            Dataset::from_records(vec![Record::empty(1)]),
            ChapterSet::default_set(),
            layout,
        )
    }

    #[test]
    fn test_wide_layout_shows_both_panes() {
        let areas = create(Rect::new(0, 0, 120, 40), &state(LayoutMode::Wide));
        let sidebar = areas.sidebar.unwrap();
        let detail = areas.detail.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(sidebar.width + detail.width, 120);
        assert_eq!(areas.status.height, 1);
    }

    #[test]
    fn test_narrow_layout_shows_list_initially() {
        let areas = create(Rect::new(0, 0, 60, 40), &state(LayoutMode::Narrow));
        assert!(areas.sidebar.is_some());
        assert!(areas.detail.is_none());
    }

    #[test]
    fn test_narrow_layout_shows_detail_after_selection() {
        let mut s = state(LayoutMode::Narrow);
        s.select(1);
        let areas = create(Rect::new(0, 0, 60, 40), &s);
        assert!(areas.sidebar.is_none());
        let detail = areas.detail.unwrap();
        assert_eq!(detail.width, 60);
    }

    #[test]
    fn test_content_and_status_fill_the_screen() {
        let full = Rect::new(0, 0, 100, 30);
        let areas = create(full, &state(LayoutMode::Wide));
        let content_height = areas.detail.unwrap().height;
        assert_eq!(content_height + areas.status.height, full.height);
    }
}
