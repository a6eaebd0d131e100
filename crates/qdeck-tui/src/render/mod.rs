//! Main render/view function (View in TEA pattern)

use qdeck_app::{AppState, LayoutMode};
use ratatui::widgets::ListState;
use ratatui::Frame;

use crate::layout;
use crate::widgets::{DetailPane, SidebarList, StatusBar};

/// Render the complete UI.
///
/// Pure rendering from state; the only mutation is the list state that
/// tracks the sidebar scroll offset.
pub fn view(frame: &mut Frame, state: &AppState, list_state: &mut ListState) {
    let areas = layout::create(frame.area(), state);

    // In wide layout the sidebar keeps focus; in narrow layout focus follows
    // whichever pane is visible.
    let detail_focused =
        state.layout == LayoutMode::Narrow && state.view.detail_visible;

    if let Some(area) = areas.sidebar {
        frame.render_stateful_widget(SidebarList::new(state, !detail_focused), area, list_state);
    }

    if let Some(area) = areas.detail {
        frame.render_widget(DetailPane::new(state, detail_focused), area);
    }

    frame.render_widget(StatusBar::new(state), areas.status);
}
