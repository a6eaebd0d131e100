//! Application state (Model in TEA pattern)

use qdeck_core::chapter::ChapterSet;
use qdeck_core::dataset::Dataset;
use qdeck_core::record::RecordId;

use crate::detail::DetailView;
use crate::sidebar::{self, SidebarRow};

/// Terminal width below which the UI collapses to one pane at a time
pub const NARROW_THRESHOLD_COLS: u16 = 80;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Dataset loaded, browsing normally
    #[default]
    Ready,

    /// Dataset load failed; the detail pane shows a static error message
    LoadFailed,

    /// Shutting down
    Quitting,
}

/// Layout mode, derived from terminal width.
///
/// Held explicitly in state (set at startup and on resize events) instead of
/// being queried inline, so update and rendering are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Both panes visible side by side; the List/Detail toggle is inert
    #[default]
    Wide,

    /// One pane at a time, toggled by selection and Back
    Narrow,
}

impl LayoutMode {
    pub fn from_width(width: u16) -> Self {
        if width < NARROW_THRESHOLD_COLS {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

/// The selection-driven view state.
///
/// Invariant: `active_id`, if set, equals some record id present in the
/// loaded dataset. `detail_visible` only matters in narrow layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Currently selected record id, driving highlight and detail rendering
    pub active_id: Option<RecordId>,

    /// Whether the detail pane is the visible one (narrow layout)
    pub detail_visible: bool,
}

/// Application state (Model in TEA pattern)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The loaded, immutable record collection
    pub dataset: Dataset,

    /// Static chapter definitions used to bucket records for display
    pub chapters: ChapterSet,

    /// Selection-driven view state
    pub view: ViewState,

    /// Current layout mode
    pub layout: LayoutMode,

    /// Lifecycle phase
    pub phase: AppPhase,

    /// Derived sidebar rows; fully rebuilt on every selection change
    pub sidebar: Vec<SidebarRow>,

    /// Sidebar cursor, always resting on an entry row when any exist
    pub cursor: usize,

    /// Rendered detail view-model for the active record.
    /// Stays untouched on a lookup-miss selection.
    pub detail: Option<DetailView>,

    /// Detail pane scroll offset, reset to top on selection in narrow layout
    pub detail_scroll: u16,

    /// Static error text shown in the detail pane after a load failure
    pub load_error: Option<String>,
}

impl AppState {
    /// Create browsing state from a loaded dataset.
    ///
    /// Builds the sidebar and, in wide layout only, selects the first
    /// record in dataset order.
    pub fn new(dataset: Dataset, chapters: ChapterSet, layout: LayoutMode) -> Self {
        let uncovered = chapters.uncovered(dataset.records());
        if uncovered > 0 {
            tracing::warn!(
                "{} record(s) fall outside every chapter range and will not appear in the sidebar",
                uncovered
            );
        }

        let mut state = Self {
            dataset,
            chapters,
            layout,
            ..Self::default()
        };
        state.rebuild_sidebar();

        if state.layout == LayoutMode::Wide {
            if let Some(first) = state.dataset.first() {
                let id = first.id;
                state.select(id);
            }
        }
        state
    }

    /// Create the load-failure state: no sidebar entries, a static error
    /// message in place of the detail pane.
    pub fn load_failed(layout: LayoutMode) -> Self {
        Self {
            layout,
            phase: AppPhase::LoadFailed,
            load_error: Some(
                "Error loading data. Please check the log or try again.".to_string(),
            ),
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// The selection state transition.
    ///
    /// Always records the new active id and re-derives every sidebar entry's
    /// active flag from scratch (idempotent by construction). If the id is
    /// absent from the dataset the previously rendered detail view stays --
    /// a silent no-op beyond the state already set.
    pub fn select(&mut self, id: RecordId) {
        self.view.active_id = Some(id);

        if self.layout == LayoutMode::Narrow {
            self.view.detail_visible = true;
            self.detail_scroll = 0;
        }

        self.rebuild_sidebar();

        match self.dataset.find(id) {
            Some(record) => {
                self.detail = Some(DetailView::build(record, &self.chapters));
                self.detail_scroll = 0;
            }
            None => {
                tracing::debug!("selection miss: no record with id {}", id);
            }
        }
    }

    /// Show the list pane again (narrow layout); inert in wide layout
    pub fn back_to_list(&mut self) {
        self.view.detail_visible = false;
    }

    /// Rebuild the sidebar rows from records + chapters and move the cursor
    /// onto the active entry. Deterministic and idempotent.
    pub fn rebuild_sidebar(&mut self) {
        self.sidebar = sidebar::build_rows(&self.dataset, &self.chapters, self.view.active_id);
        if let Some(active) = self.view.active_id {
            if let Some(idx) = self.sidebar.iter().position(
                |row| matches!(row, SidebarRow::Entry { id, .. } if *id == active),
            ) {
                self.cursor = idx;
            }
        } else if let Some(idx) = self.first_entry_index() {
            self.cursor = idx;
        }
    }

    /// Id of the entry the cursor rests on
    pub fn focused_id(&self) -> Option<RecordId> {
        match self.sidebar.get(self.cursor) {
            Some(SidebarRow::Entry { id, .. }) => Some(*id),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Cursor movement (entry rows only; headers are skipped)
    // ─────────────────────────────────────────────────────────

    pub fn first_entry_index(&self) -> Option<usize> {
        self.sidebar
            .iter()
            .position(|row| matches!(row, SidebarRow::Entry { .. }))
    }

    pub fn last_entry_index(&self) -> Option<usize> {
        self.sidebar
            .iter()
            .rposition(|row| matches!(row, SidebarRow::Entry { .. }))
    }

    pub fn cursor_up(&mut self) {
        if let Some(idx) = self.sidebar[..self.cursor]
            .iter()
            .rposition(|row| matches!(row, SidebarRow::Entry { .. }))
        {
            self.cursor = idx;
        }
    }

    pub fn cursor_down(&mut self) {
        let next = self.cursor + 1;
        if next >= self.sidebar.len() {
            return;
        }
        if let Some(offset) = self.sidebar[next..]
            .iter()
            .position(|row| matches!(row, SidebarRow::Entry { .. }))
        {
            self.cursor = next + offset;
        }
    }

    pub fn cursor_first(&mut self) {
        if let Some(idx) = self.first_entry_index() {
            self.cursor = idx;
        }
    }

    pub fn cursor_last(&mut self) {
        if let Some(idx) = self.last_entry_index() {
            self.cursor = idx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdeck_core::chapter::Chapter;
    use qdeck_core::record::Record;

    fn record(id: RecordId, question: &str) -> Record {
        Record {
            question: question.to_string(),
            ..Record::empty(id)
        }
    }

    fn two_chapter_state(layout: LayoutMode) -> AppState {
        let dataset = Dataset::from_records(vec![
            record(1, "Q1"),
            record(5, "Q2"),
            record(30, "Q3"),
        ]);
        let chapters = ChapterSet::new(vec![
            Chapter::new("Core", 1, 26, "ch1"),
            Chapter::new("More", 27, 51, "ch2"),
        ]);
        AppState::new(dataset, chapters, layout)
    }

    #[test]
    fn test_wide_startup_selects_first_record() {
        let state = two_chapter_state(LayoutMode::Wide);
        assert_eq!(state.view.active_id, Some(1));
        assert!(state.detail.is_some());
        assert_eq!(state.focused_id(), Some(1));
    }

    #[test]
    fn test_narrow_startup_selects_nothing() {
        let state = two_chapter_state(LayoutMode::Narrow);
        assert_eq!(state.view.active_id, None);
        assert!(state.detail.is_none());
        assert!(!state.view.detail_visible);
        // Cursor still rests on the first entry for keyboard navigation
        assert_eq!(state.focused_id(), Some(1));
    }

    #[test]
    fn test_select_sets_active_and_detail() {
        let mut state = two_chapter_state(LayoutMode::Wide);
        state.select(5);
        assert_eq!(state.view.active_id, Some(5));
        assert_eq!(state.detail.as_ref().unwrap().title, "Q2");
        assert_eq!(state.focused_id(), Some(5));
    }

    #[test]
    fn test_select_in_narrow_layout_reveals_detail_and_resets_scroll() {
        let mut state = two_chapter_state(LayoutMode::Narrow);
        state.detail_scroll = 12;
        state.select(5);
        assert!(state.view.detail_visible);
        assert_eq!(state.detail_scroll, 0);
    }

    #[test]
    fn test_select_miss_keeps_previous_detail() {
        let mut state = two_chapter_state(LayoutMode::Wide);
        state.select(5);
        let before = state.detail.clone();

        state.select(999);
        // active_id still updates; the rendered detail does not
        assert_eq!(state.view.active_id, Some(999));
        assert_eq!(state.detail, before);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = two_chapter_state(LayoutMode::Wide);
        once.select(5);
        let mut twice = two_chapter_state(LayoutMode::Wide);
        twice.select(5);
        twice.select(5);

        assert_eq!(once.view, twice.view);
        assert_eq!(once.sidebar, twice.sidebar);
        assert_eq!(once.detail, twice.detail);
    }

    #[test]
    fn test_back_to_list_hides_detail() {
        let mut state = two_chapter_state(LayoutMode::Narrow);
        state.select(5);
        assert!(state.view.detail_visible);
        state.back_to_list();
        assert!(!state.view.detail_visible);
    }

    #[test]
    fn test_cursor_skips_chapter_headers() {
        let mut state = two_chapter_state(LayoutMode::Narrow);
        state.cursor_first();
        assert_eq!(state.focused_id(), Some(1));
        state.cursor_down();
        assert_eq!(state.focused_id(), Some(5));
        // Crossing into the second chapter skips its header row
        state.cursor_down();
        assert_eq!(state.focused_id(), Some(30));
        state.cursor_down();
        assert_eq!(state.focused_id(), Some(30));
        state.cursor_up();
        assert_eq!(state.focused_id(), Some(5));
    }

    #[test]
    fn test_cursor_first_last() {
        let mut state = two_chapter_state(LayoutMode::Narrow);
        state.cursor_last();
        assert_eq!(state.focused_id(), Some(30));
        state.cursor_first();
        assert_eq!(state.focused_id(), Some(1));
    }

    #[test]
    fn test_load_failed_state_has_error_and_no_entries() {
        let state = AppState::load_failed(LayoutMode::Wide);
        assert_eq!(state.phase, AppPhase::LoadFailed);
        assert!(state.load_error.is_some());
        assert!(state.sidebar.is_empty());
        assert!(state.detail.is_none());
    }

    #[test]
    fn test_layout_mode_from_width() {
        assert_eq!(LayoutMode::from_width(79), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(80), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(200), LayoutMode::Wide);
    }
}
