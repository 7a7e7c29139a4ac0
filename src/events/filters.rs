use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, Focus};

/// What: Handle keys aimed at the filter bar.
///
/// Details:
/// - `Tab`/`Shift-Tab` cycle focus between status, species and the sort selector
/// - On a text input: printable characters append, `Backspace` deletes, `Ctrl-U` clears
/// - On the sort selector: `Left`, `Right`, `Space` and `Enter` switch the sort key
pub fn handle_filter_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        _ if app.focus == Focus::Sort => handle_sort_key(ke, app),
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_filter();
        }
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.push_filter_char(ch);
        }
        KeyCode::Backspace => {
            app.pop_filter_char();
        }
        _ => {}
    }
}

/// Keys on the sort selector.
fn handle_sort_key(ke: KeyEvent, app: &mut AppState) {
    if matches!(
        ke.code,
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter
    ) {
        app.toggle_sort_key();
    }
}
