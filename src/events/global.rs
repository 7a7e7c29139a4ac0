use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppState;

/// What: Handle shortcuts that work regardless of focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
///
/// Output:
/// - `Some(true)` to exit, `Some(false)` when the key was consumed, `None` to pass it on.
pub fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<bool> {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Esc => Some(true),
        KeyCode::Char('c') if ctrl => Some(true),
        KeyCode::PageDown => {
            app.next_page();
            Some(false)
        }
        KeyCode::Char('n') if ctrl => {
            app.next_page();
            Some(false)
        }
        KeyCode::PageUp => {
            app.prev_page();
            Some(false)
        }
        KeyCode::Char('p') if ctrl => {
            app.prev_page();
            Some(false)
        }
        KeyCode::Down => {
            app.scroll_grid_down();
            Some(false)
        }
        KeyCode::Up => {
            app.scroll_grid_up();
            Some(false)
        }
        KeyCode::F(2) => {
            app.toggle_language();
            Some(false)
        }
        KeyCode::Char('l') if ctrl => {
            app.toggle_language();
            Some(false)
        }
        _ => None,
    }
}
