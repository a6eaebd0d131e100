//! qdeck-tui - Terminal UI for qdeck
//!
//! The ratatui-based view layer: it consumes the state and view-models from
//! qdeck-app and adds terminal rendering, event polling, and the main loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export the main entry point
pub use runner::run;
