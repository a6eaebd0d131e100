//! Color palette for the qdeck theme

use ratatui::style::Color;

// --- Accent ---
pub const ACCENT: Color = Color::Blue; // Active entry, breadcrumb question part

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Blue;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_RED: Color = Color::Red; // Load-failure pane

// --- Code block ---
pub const CODE_FG: Color = Color::Gray;
pub const CODE_RULE: Color = Color::DarkGray;
