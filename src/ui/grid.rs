use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Character, CharacterStatus};
use crate::theme::{Theme, theme};

use super::helpers::{labeled_line, truncate_to_width};

/// Narrowest a card may get before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 34;
/// Rows taken by one card including its border.
pub const CARD_HEIGHT: u16 = 8;

/// What: Number of card columns that fit into `width`.
///
/// Output:
/// - At least 1, even when `width` is narrower than one card.
#[must_use]
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_MIN_WIDTH).max(1))
}

/// Column count, visible rows and last scroll offset for a grid area.
struct GridGeometry {
    /// Cards per row.
    cols: usize,
    /// Card rows that fit at once.
    visible_rows: usize,
    /// Largest useful scroll offset.
    max_scroll: usize,
}

impl GridGeometry {
    fn new(area: Rect, records: usize) -> Self {
        let cols = grid_columns(area.width);
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let total_rows = records.div_ceil(cols);
        Self {
            cols,
            visible_rows,
            max_scroll: total_rows.saturating_sub(visible_rows),
        }
    }
}

/// What: Last scroll offset at which the final card row is still on screen.
///
/// Inputs:
/// - `area`: Grid region
/// - `records`: Number of cards on the page
#[must_use]
pub fn max_grid_scroll(area: Rect, records: usize) -> u16 {
    u16::try_from(GridGeometry::new(area, records).max_scroll).unwrap_or(u16::MAX)
}

/// What: Draw one character card into `area`.
fn render_card(f: &mut Frame, app: &AppState, c: &Character, area: Rect, th: &Theme) {
    let inner_w = usize::from(area.width.saturating_sub(2));
    let status_color = match CharacterStatus::from_api(&c.status) {
        CharacterStatus::Alive => th.green,
        CharacterStatus::Dead => th.red,
        CharacterStatus::Unknown => th.overlay1,
    };
    let plain = Style::default().fg(th.text);
    let lines = vec![
        labeled_line(
            &app.t("card.name"),
            &c.name,
            plain.add_modifier(Modifier::BOLD),
            th,
            inner_w,
        ),
        labeled_line(
            &app.t("card.image"),
            &c.image,
            Style::default().fg(th.sapphire),
            th,
            inner_w,
        ),
        labeled_line(
            &app.t("card.status"),
            &app.translations.status_label(app.language, &c.status),
            Style::default().fg(status_color),
            th,
            inner_w,
        ),
        labeled_line(&app.t("card.species"), &c.species, plain, th, inner_w),
        labeled_line(&app.t("card.gender"), &c.gender, plain, th, inner_w),
        labeled_line(&app.t("card.origin"), &c.origin.name, plain, th, inner_w),
    ];
    let title = truncate_to_width(&format!("#{}", c.id), inner_w);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.mauve)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.mantle));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// What: Render the displayed page as a responsive grid of cards.
///
/// Inputs:
/// - `app`: State providing records, sort key and scroll offset
/// - `area`: Region below the status line
///
/// Details:
/// - Records come from `AppState::sorted_records`, so the sort key applies here.
/// - An empty page renders nothing; the status line already explains failures.
/// - The scroll offset is clamped so the last row always stays reachable.
pub fn render_grid(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let records = app.sorted_records();
    if records.is_empty() || area.height == 0 || area.width == 0 {
        return;
    }
    let GridGeometry {
        cols,
        visible_rows,
        max_scroll,
    } = GridGeometry::new(area, records.len());
    let scroll = usize::from(app.grid_scroll).min(max_scroll);

    let col_constraints: Vec<Constraint> = (0..cols)
        .map(|_| Constraint::Ratio(1, u32::try_from(cols).unwrap_or(1)))
        .collect();

    for (row_idx, row) in records
        .chunks(cols)
        .skip(scroll)
        .take(visible_rows)
        .enumerate()
    {
        let offset = u16::try_from(row_idx).unwrap_or(u16::MAX).saturating_mul(CARD_HEIGHT);
        let height = CARD_HEIGHT.min(area.height.saturating_sub(offset));
        if height == 0 {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y: area.y + offset,
            width: area.width,
            height,
        };
        let cells = Layout::horizontal(col_constraints.clone()).split(row_area);
        for (c, cell) in row.iter().zip(cells.iter()) {
            render_card(f, app, c, *cell, &th);
        }
    }

    if max_scroll > 0 {
        let marker = format!("{}/{}", scroll + 1, max_scroll + 1);
        let w = u16::try_from(marker.len()).unwrap_or(0).min(area.width);
        let marker_area = Rect {
            x: area.x + area.width - w,
            y: area.y + area.height - 1,
            width: w,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                marker,
                Style::default().fg(th.overlay1),
            ))),
            marker_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_never_drop_below_one() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(CARD_MIN_WIDTH - 1), 1);
        assert_eq!(grid_columns(CARD_MIN_WIDTH * 3), 3);
        assert_eq!(grid_columns(CARD_MIN_WIDTH * 3 + 5), 3);
    }

    #[test]
    fn max_scroll_counts_hidden_rows() {
        let area = Rect::new(0, 0, CARD_MIN_WIDTH * 2, CARD_HEIGHT * 2);
        assert_eq!(max_grid_scroll(area, 0), 0);
        assert_eq!(max_grid_scroll(area, 4), 0);
        // 20 cards in 2 columns: 10 rows, 2 visible.
        assert_eq!(max_grid_scroll(area, 20), 8);
        assert_eq!(max_grid_scroll(Rect::new(0, 0, 10, 3), 3), 2);
    }
}
