//! # qdeck-app - Application State and Orchestration
//!
//! The TEA-style middle layer of qdeck: the model ([`AppState`]), the
//! messages ([`Message`]), the update function ([`handler::update`]), and
//! the view-model derivation (sidebar rows, detail view, HTML export).
//!
//! This crate is independent of any terminal library; keyboard input
//! arrives as the abstract [`InputKey`] and rendering consumes plain data
//! structures, so the whole selection/render cycle is testable without a
//! display surface.

pub mod detail;
pub mod export;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod sidebar;
pub mod state;

pub use detail::DetailView;
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use sidebar::SidebarRow;
pub use state::{AppPhase, AppState, LayoutMode, ViewState, NARROW_THRESHOLD_COLS};
