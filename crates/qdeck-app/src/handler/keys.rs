//! Key-to-message mapping

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, LayoutMode};

/// Map a key press to a message, given the current state.
///
/// Esc/Backspace mean "back to list" only while the narrow-layout detail
/// pane is showing; otherwise they are inert.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    let detail_showing = state.layout == LayoutMode::Narrow && state.view.detail_visible;

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Esc | InputKey::Backspace if detail_showing => Some(Message::Back),
        InputKey::Esc | InputKey::Backspace => None,

        // Narrow detail pane owns the navigation keys for scrolling
        InputKey::Up if detail_showing => Some(Message::ScrollUp),
        InputKey::Down if detail_showing => Some(Message::ScrollDown),

        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::CursorFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::CursorLast),
        InputKey::Enter => Some(Message::SelectFocused),

        InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::ScrollPageUp),
        InputKey::PageDown => Some(Message::ScrollPageDown),

        _ => None,
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
            Dataset::from_records(vec![Record::empty(1), Record::empty(2)]),
            ChapterSet::default_set(),
            layout,
        )
    }

    #[test]
    fn test_quit_keys() {
        let s = state(LayoutMode::Wide);
        assert_eq!(handle_key(&s, InputKey::Char('q')), Some(Message::Quit));
        assert_eq!(handle_key(&s, InputKey::CharCtrl('c')), Some(Message::Quit));
    }

    #[test]
    fn test_arrows_move_cursor_in_wide_layout() {
        let s = state(LayoutMode::Wide);
        assert_eq!(handle_key(&s, InputKey::Up), Some(Message::CursorUp));
        assert_eq!(handle_key(&s, InputKey::Down), Some(Message::CursorDown));
        assert_eq!(handle_key(&s, InputKey::Enter), Some(Message::SelectFocused));
    }

    #[test]
    fn test_esc_is_back_only_in_narrow_detail() {
        let mut s = state(LayoutMode::Narrow);
        assert_eq!(handle_key(&s, InputKey::Esc), None);

        s.select(1);
        assert!(s.view.detail_visible);
        assert_eq!(handle_key(&s, InputKey::Esc), Some(Message::Back));
        assert_eq!(handle_key(&s, InputKey::Backspace), Some(Message::Back));
    }

    #[test]
    fn test_arrows_scroll_detail_in_narrow_detail_view() {
        let mut s = state(LayoutMode::Narrow);
        s.select(1);
        assert_eq!(handle_key(&s, InputKey::Up), Some(Message::ScrollUp));
        assert_eq!(handle_key(&s, InputKey::Down), Some(Message::ScrollDown));
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let s = state(LayoutMode::Wide);
        assert_eq!(handle_key(&s, InputKey::Char('x')), None);
    }
}
