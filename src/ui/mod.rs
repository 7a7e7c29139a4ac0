//! Rendering for the catalog TUI.
//!
//! Screen layout, top to bottom: filter bar, status line (loading / error),
//! card grid, and the pagination footer.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod footer;
mod grid;
pub mod helpers;
mod nav;
mod status;

pub use grid::{CARD_HEIGHT, CARD_MIN_WIDTH, grid_columns, max_grid_scroll};

/// Split the screen into filter bar, status line, grid and footer.
fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .split(area)
}

/// What: Largest grid scroll offset for a screen of size `area` showing `records` cards.
#[must_use]
pub fn screen_max_grid_scroll(area: Rect, records: usize) -> u16 {
    max_grid_scroll(screen_chunks(area)[2], records)
}

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state (read-only)
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = screen_chunks(area);

    nav::render_nav(f, app, chunks[0]);
    status::render_status_line(f, app, chunks[1]);
    grid::render_grid(f, app, chunks[2]);
    footer::render_footer(f, app, chunks[3]);
}

#[cfg(test)]
mod tests;
