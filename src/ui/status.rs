use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::theme;

/// What: Render the one-line request status.
///
/// Details:
/// - Loading text while a request is pending
/// - Generic error text when the latest request failed
/// - Key hints otherwise
pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let span = if app.fetch.is_pending() {
        Span::styled(app.t("messages.loading"), Style::default().fg(th.yellow))
    } else if app.fetch.is_failed() {
        Span::styled(
            app.t("messages.error"),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(app.t("app.hint"), Style::default().fg(th.overlay1))
    };
    f.render_widget(Paragraph::new(Line::from(span)), area);
}
