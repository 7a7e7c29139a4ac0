use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};

use super::helpers::truncate_to_width;

/// What: Bordered block for one filter-bar control, highlighted when focused.
fn control_block(title: String, focused: bool, th: &Theme) -> Block<'static> {
    let (border, title_color) = if focused {
        (th.sapphire, th.mauve)
    } else {
        (th.surface2, th.overlay1)
    };
    Block::default()
        .title(Span::styled(title, Style::default().fg(title_color)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// What: Render a text input with a placeholder when empty.
fn render_input(f: &mut Frame, area: Rect, label: String, value: &str, focused: bool, th: &Theme) {
    let inner_w = usize::from(area.width.saturating_sub(4));
    let line = if value.is_empty() {
        Line::from(Span::styled(
            truncate_to_width(&label, inner_w),
            Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.sapphire)),
            Span::styled(
                truncate_to_width(value, inner_w),
                Style::default().fg(th.text),
            ),
        ])
    };
    let block = control_block(label, focused, th);
    f.render_widget(Paragraph::new(line).block(block), area);
}

/// What: Render the navigation/filter bar.
///
/// Details:
/// - Left to right: logo, status input, species input, sort selector
/// - Inputs show their translated label as placeholder while empty
pub fn render_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let cols = Layout::horizontal([
        Constraint::Length(18),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Min(20),
    ])
    .split(area);

    let logo = Paragraph::new(Line::from(Span::styled(
        app.t("app.logo"),
        Style::default().fg(th.green).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    f.render_widget(logo, cols[0]);

    render_input(
        f,
        cols[1],
        app.t("card.status"),
        &app.status_filter,
        app.focus == Focus::Status,
        &th,
    );
    render_input(
        f,
        cols[2],
        app.t("card.species"),
        &app.species_filter,
        app.focus == Focus::Species,
        &th,
    );

    let sort_focused = app.focus == Focus::Sort;
    let selector = Line::from(vec![
        Span::styled("< ", Style::default().fg(th.overlay1)),
        Span::styled(
            app.t(app.sort_key.translation_key()),
            Style::default().fg(if sort_focused { th.text } else { th.subtext0 }),
        ),
        Span::styled(" >", Style::default().fg(th.overlay1)),
    ]);
    f.render_widget(
        Paragraph::new(selector).block(control_block(app.t("sort.title"), sort_focused, &th)),
        cols[3],
    );
}
