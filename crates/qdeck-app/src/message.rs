//! Message types for the application (TEA pattern)

use qdeck_core::record::RecordId;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Select a record by id (the sole selection state transition)
    Select(RecordId),
    /// Select whichever sidebar entry the cursor is on
    SelectFocused,
    /// Return from detail to list (narrow layout only)
    Back,

    // ─────────────────────────────────────────────────────────
    // Sidebar Cursor Messages
    // ─────────────────────────────────────────────────────────
    /// Move the sidebar cursor to the previous entry
    CursorUp,
    /// Move the sidebar cursor to the next entry
    CursorDown,
    /// Jump to the first entry
    CursorFirst,
    /// Jump to the last entry
    CursorLast,

    // ─────────────────────────────────────────────────────────
    // Detail Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll detail pane up one line
    ScrollUp,
    /// Scroll detail pane down one line
    ScrollDown,
    /// Page up in detail pane
    ScrollPageUp,
    /// Page down in detail pane
    ScrollPageDown,

    // ─────────────────────────────────────────────────────────
    // Environment Messages
    // ─────────────────────────────────────────────────────────
    /// Terminal was resized; width drives the layout mode
    Resized { width: u16 },
}
