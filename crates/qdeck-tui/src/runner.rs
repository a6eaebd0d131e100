//! Main TUI runner - entry point and event loop

use std::path::Path;

use ratatui::widgets::ListState;

use qdeck_app::{handler, AppState, LayoutMode, Message};
use qdeck_core::chapter::ChapterSet;
use qdeck_core::dataset::Dataset;
use qdeck_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application against a dataset file.
///
/// The dataset read is the only await point; everything after startup is a
/// synchronous draw/poll/update cycle.
pub async fn run(data_path: &Path) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let width = match term.size() {
        Ok(size) => size.width,
        Err(e) => {
            ratatui::restore();
            return Err(Error::TerminalInit(e.to_string()));
        }
    };
    let layout = LayoutMode::from_width(width);

    let mut state = match state_from_load(Dataset::load(data_path).await, layout) {
        Ok(state) => state,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };

    let result = run_loop(&mut term, &mut state);

    ratatui::restore();
    result
}

/// Build the startup state from the load result.
///
/// Load failures are not fatal: the UI comes up with the error pane so the
/// user sees what happened. Fatal errors tear the startup down instead.
fn state_from_load(result: Result<Dataset>, layout: LayoutMode) -> Result<AppState> {
    match result {
        Ok(dataset) => Ok(AppState::new(dataset, ChapterSet::default_set(), layout)),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            error!("failed to load dataset: {e}");
            Ok(AppState::load_failed(layout))
        }
    }
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    // Sidebar scroll offset lives with the terminal, not the model
    let mut list_state = ListState::default();

    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state, &mut list_state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Feed a message and any follow-ups it produces through the update function
fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = handler::update(state, msg).message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdeck_app::InputKey;
    use qdeck_core::record::Record;

    #[test]
    fn test_process_message_follows_up() {
        let mut state = AppState::new(
            Dataset::from_records(vec![Record::empty(1), Record::empty(2)]),
            ChapterSet::default_set(),
            LayoutMode::Wide,
        );

        // Enter expands to SelectFocused then Select(id)
        process_message(&mut state, Message::Key(InputKey::Down));
        process_message(&mut state, Message::Key(InputKey::Enter));
        assert_eq!(state.view.active_id, Some(2));
    }

    #[test]
    fn test_nonfatal_load_error_becomes_error_pane() {
        let result = Err(Error::dataset_load("/missing/deck.json", "bad json"));
        let state = state_from_load(result, LayoutMode::Wide).unwrap();

        assert!(state.load_error.is_some());
        assert!(state.sidebar.is_empty());
    }

    #[test]
    fn test_fatal_error_aborts_startup() {
        let result = Err(Error::TerminalInit("no tty".into()));
        let err = state_from_load(result, LayoutMode::Wide).unwrap_err();
        assert!(err.is_fatal());
    }
}
