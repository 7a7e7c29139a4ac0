//! Event handling layer for the catalog TUI.
//!
//! Key events are split into global shortcuts (exit, pagination, language) and
//! filter-bar input (focus cycling, text editing, sort selection).

use crossterm::event::{Event as CEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::logic::send_query_if_dirty;
use crate::state::{AppState, FetchRequest};

mod filters;
mod global;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Sends a new request when page or filters changed. Returns `true` to signal the
/// application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if let Some(exit) = global::handle_global_key(ke, app) {
        if !exit {
            send_query_if_dirty(app, fetch_tx);
        }
        return exit;
    }
    filters::handle_filter_key(ke, app);
    send_query_if_dirty(app, fetch_tx);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::state::{CharacterPage, FetchResult, Focus, PageInfo, SortKey};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> CEvent {
        CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// State whose last successful page allows moving both ways.
    fn loaded_app(page: u32) -> AppState {
        let mut app = AppState::default();
        app.page = page;
        let id = app.begin_request();
        app.apply_fetch_result(FetchResult {
            id,
            outcome: Ok(CharacterPage {
                info: PageInfo {
                    pages: Some(10),
                    next: Some(page + 1),
                    prev: page.checked_sub(1).filter(|p| *p >= 1),
                },
                results: Vec::new(),
            }),
        });
        app
    }

    #[test]
    /// What: Typing into the status input sends a request with the new filter.
    fn typing_sends_request_per_keystroke() {
        let mut app = AppState::default();
        app.params_dirty = false;
        let (tx, mut rx) = mpsc::unbounded_channel();
        for c in "Alive".chars() {
            assert!(!handle_event(key(KeyCode::Char(c)), &mut app, &tx));
        }
        let mut last = None;
        let mut count = 0;
        while let Ok(req) = rx.try_recv() {
            count += 1;
            last = Some(req);
        }
        assert_eq!(count, 5);
        let last = last.expect("at least one request");
        assert_eq!(last.vars.status, "Alive");
        assert_eq!(last.id, app.latest_request_id);
    }

    #[test]
    /// What: Tab moves focus; sort selector changes order without a request.
    fn sort_selector_does_not_fetch() {
        let mut app = AppState::default();
        app.params_dirty = false;
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_event(key(KeyCode::Tab), &mut app, &tx);
        handle_event(key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.focus, Focus::Sort);
        handle_event(key(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.sort_key, SortKey::Origin);
        handle_event(key(KeyCode::Char('x')), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        handle_event(key(KeyCode::BackTab), &mut app, &tx);
        assert_eq!(app.focus, Focus::Species);
    }

    #[test]
    /// What: Page keys move within the gated range and request the new page.
    fn pagination_keys() {
        let mut app = loaded_app(1);
        let (tx, mut rx) = mpsc::unbounded_channel();

        handle_event(key(KeyCode::PageUp), &mut app, &tx);
        assert_eq!(app.page, 1);
        assert!(rx.try_recv().is_err());

        handle_event(key(KeyCode::PageDown), &mut app, &tx);
        assert_eq!(app.page, 2);
        assert_eq!(rx.try_recv().map(|r| r.vars.page).ok(), Some(2));

        let mut app = loaded_app(4);
        handle_event(ctrl('p'), &mut app, &tx);
        assert_eq!(app.page, 3);
    }

    #[test]
    /// What: Language toggle never issues a request.
    fn language_toggle_key() {
        let mut app = loaded_app(2);
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_event(key(KeyCode::F(2)), &mut app, &tx);
        assert_eq!(app.language, Language::De);
        handle_event(ctrl('l'), &mut app, &tx);
        assert_eq!(app.language, Language::En);
        assert!(rx.try_recv().is_err());
        assert_eq!(app.page, 2);
    }

    #[test]
    fn exit_keys() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(handle_event(key(KeyCode::Esc), &mut app, &tx));
        assert!(handle_event(ctrl('c'), &mut app, &tx));
        assert!(!handle_event(CEvent::FocusGained, &mut app, &tx));
    }
}
