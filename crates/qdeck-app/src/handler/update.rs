//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, LayoutMode};

use super::{keys::handle_key, UpdateResult};

/// Lines scrolled by a detail-pane page jump
const DETAIL_PAGE_LINES: u16 = 10;

/// Process a message and update state.
/// Returns an optional follow-up message for the event loop.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Select(id) => {
            state.select(id);
            UpdateResult::none()
        }

        Message::SelectFocused => {
            if let Some(id) = state.focused_id() {
                UpdateResult::message(Message::Select(id))
            } else {
                UpdateResult::none()
            }
        }

        Message::Back => {
            state.back_to_list();
            UpdateResult::none()
        }

        Message::CursorUp => {
            state.cursor_up();
            UpdateResult::none()
        }

        Message::CursorDown => {
            state.cursor_down();
            UpdateResult::none()
        }

        Message::CursorFirst => {
            state.cursor_first();
            UpdateResult::none()
        }

        Message::CursorLast => {
            state.cursor_last();
            UpdateResult::none()
        }

        Message::ScrollUp => {
            state.detail_scroll = state.detail_scroll.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.detail_scroll = state.detail_scroll.saturating_add(1);
            UpdateResult::none()
        }

        Message::ScrollPageUp => {
            state.detail_scroll = state.detail_scroll.saturating_sub(DETAIL_PAGE_LINES);
            UpdateResult::none()
        }

        Message::ScrollPageDown => {
            state.detail_scroll = state.detail_scroll.saturating_add(DETAIL_PAGE_LINES);
            UpdateResult::none()
        }

        Message::Resized { width } => {
            let mode = LayoutMode::from_width(width);
            if mode != state.layout {
                state.layout = mode;
                // Widening makes both panes visible; the toggle state only
                // matters again once the terminal narrows back down.
                if mode == LayoutMode::Wide {
                    state.view.detail_visible = false;
                }
            }
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),
    }
}
