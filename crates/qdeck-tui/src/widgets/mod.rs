//! Custom widget components

mod detail;
mod sidebar;
mod status_bar;

pub use detail::DetailPane;
pub use sidebar::SidebarList;
pub use status_bar::StatusBar;
