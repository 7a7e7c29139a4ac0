use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::AppState;
use crate::theme::{Theme, theme};

/// What: Style of a footer button.
///
/// Details:
/// - Disabled buttons are dimmed so it is obvious the key does nothing.
fn button_style(enabled: bool, th: &Theme) -> Style {
    if enabled {
        Style::default().fg(th.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.surface2)
    }
}

/// What: One bordered, centered footer cell.
fn cell(text: String, style: Style, border: Color) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        )
}

/// What: Render the pagination footer.
///
/// Details:
/// - Cells: previous, language switch, page indicator, next.
/// - The indicator includes the total page count once a response reported it.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let cols = Layout::horizontal([
        Constraint::Percentage(20),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(20),
    ])
    .split(area);

    let prev_label = format!("← {}", app.t("pagination.previous"));
    let next_label = format!("{} →", app.t("pagination.next"));
    let indicator = match app.last_page_info.as_ref().and_then(|i| i.pages) {
        Some(total) => app
            .translations
            .get_fmt(app.language, "pagination.page_of", &[&app.page, &total]),
        None => app
            .translations
            .get_fmt(app.language, "pagination.page", &[&app.page]),
    };

    f.render_widget(
        cell(prev_label, button_style(app.can_go_prev(), &th), th.surface2),
        cols[0],
    );
    f.render_widget(
        cell(
            app.t("language.switch"),
            Style::default().fg(th.sapphire),
            th.surface2,
        ),
        cols[1],
    );
    f.render_widget(
        cell(indicator, Style::default().fg(th.subtext0), th.surface2),
        cols[2],
    );
    f.render_widget(
        cell(next_label, button_style(app.can_go_next(), &th), th.surface2),
        cols[3],
    );
}
