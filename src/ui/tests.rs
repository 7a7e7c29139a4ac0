use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use super::ui;
use crate::state::{AppState, Character, CharacterPage, FetchResult, Origin, PageInfo};
use crate::theme::theme;

fn character(id: &str, name: &str, status: &str, origin: &str) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        status: status.to_string(),
        species: "Human".to_string(),
        gender: "Male".to_string(),
        image: format!("https://example.invalid/{id}.jpeg"),
        origin: Origin {
            name: origin.to_string(),
        },
    }
}

fn settle(app: &mut AppState, outcome: Result<CharacterPage, String>) {
    let id = app.begin_request();
    assert!(app.apply_fetch_result(FetchResult { id, outcome }));
}

fn render(app: &AppState) -> Buffer {
    let backend = TestBackend::new(120, 30);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| ui(f, app)).expect("draw frame");
    terminal.backend().buffer().clone()
}

/// Buffer rows joined with newlines.
fn buffer_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

/// Position of the first cell where `needle` starts, matching one char per cell.
fn find_cell(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let chars: Vec<char> = needle.chars().collect();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            let matches = chars.iter().enumerate().all(|(i, ch)| {
                u16::try_from(i)
                    .ok()
                    .and_then(|i| buf.cell((x + i, y)))
                    .is_some_and(|c| c.symbol() == ch.to_string())
            });
            if matches {
                return Some((x, y));
            }
        }
    }
    None
}

fn sample_page() -> CharacterPage {
    CharacterPage {
        info: PageInfo {
            pages: Some(42),
            next: Some(2),
            prev: None,
        },
        results: vec![
            character("1", "Rick Sanchez", "Alive", "Earth (C-137)"),
            character("2", "Morty Smith", "Alive", "unknown"),
            character("3", "Abadango Cluster Princess", "Alive", "Abadango"),
        ],
    }
}

#[test]
/// What: An empty result list renders no cards and no error.
fn empty_results_render_blank_grid() {
    let mut app = AppState::default();
    settle(
        &mut app,
        Ok(CharacterPage {
            info: PageInfo::default(),
            results: Vec::new(),
        }),
    );
    let text = buffer_text(&render(&app));
    assert!(!text.contains("Name:"));
    assert!(!text.contains("An error occurred."));
    assert!(!text.contains("Loading..."));
}

#[test]
/// What: A failed request shows the generic error and no records.
fn failure_shows_error_without_cards() {
    let mut app = AppState::default();
    settle(&mut app, Ok(sample_page()));
    settle(&mut app, Err("connection refused".into()));
    let text = buffer_text(&render(&app));
    assert!(text.contains("An error occurred."));
    assert!(!text.contains("Rick Sanchez"));
    assert!(!text.contains("connection refused"));
}

#[test]
/// What: Pending requests show the loading text in the active language.
fn pending_shows_loading_text() {
    let mut app = AppState::default();
    app.begin_request();
    assert!(buffer_text(&render(&app)).contains("Loading..."));
    app.toggle_language();
    assert!(buffer_text(&render(&app)).contains("Wird geladen..."));
}

#[test]
/// What: Cards follow the sort key and labels follow the language.
fn cards_are_sorted_and_translated() {
    let mut app = AppState::default();
    settle(&mut app, Ok(sample_page()));

    let text = buffer_text(&render(&app));
    let pos = |needle: &str| text.find(needle).expect("name rendered");
    assert!(pos("Abadango Cluster Princess") < pos("Morty Smith"));
    assert!(pos("Morty Smith") < pos("Rick Sanchez"));
    assert!(text.contains("Origin: Earth (C-137)"));
    assert!(text.contains("Page 1 of 42"));

    app.toggle_sort_key();
    let text = buffer_text(&render(&app));
    let pos = |needle: &str| text.find(needle).expect("name rendered");
    assert!(pos("Abadango Cluster Princess") < pos("Rick Sanchez"));
    assert!(pos("Rick Sanchez") < pos("Morty Smith"));

    app.toggle_language();
    let text = buffer_text(&render(&app));
    assert!(text.contains("Herkunft: Earth (C-137)"));
    assert!(text.contains("Lebendig"));
    assert!(text.contains("Seite 1 von 42"));
    assert!(text.contains("Switch to English"));
}

#[test]
/// What: Buttons without a target page are dimmed.
fn unavailable_buttons_are_dimmed() {
    let th = theme();
    let mut app = AppState::default();
    let mut page = sample_page();
    page.info.next = None;
    settle(&mut app, Ok(page));
    let buf = render(&app);

    let (x, y) = find_cell(&buf, "Next").expect("next button rendered");
    assert_eq!(buf.cell((x, y)).map(|c| c.fg), Some(th.surface2));
    let (x, y) = find_cell(&buf, "Previous").expect("previous button rendered");
    assert_eq!(buf.cell((x, y)).map(|c| c.fg), Some(th.surface2));

    let mut app = AppState::default();
    settle(&mut app, Ok(sample_page()));
    let buf = render(&app);
    let (x, y) = find_cell(&buf, "Next").expect("next button rendered");
    assert_eq!(buf.cell((x, y)).map(|c| c.fg), Some(th.text));
}

#[test]
/// What: The scroll limit matches the grid region the frame layout leaves for cards.
fn screen_scroll_limit_follows_layout() {
    use ratatui::layout::Rect;

    let area = Rect::new(0, 0, 120, 30);
    // 23 grid rows hold two card rows; 20 cards in three columns need seven.
    assert_eq!(super::screen_max_grid_scroll(area, 20), 5);
    assert_eq!(super::screen_max_grid_scroll(area, 6), 0);
}
