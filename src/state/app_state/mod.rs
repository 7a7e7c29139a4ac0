//! Central `AppState` container.

use crate::i18n::{Language, Translations};
use crate::state::types::{FetchState, Focus, PageInfo, SortKey};
use crate::theme::Settings;

mod methods;


/// Global application state shared by the event, networking, and UI layers.
///
/// Everything here lives for one session only: restarting the program resets
/// filters, page, sort key and language to their configured defaults.
#[derive(Debug)]
pub struct AppState {
    /// Current page number, never below 1.
    pub page: u32,
    /// Status filter text sent verbatim to the server (empty means no filter).
    pub status_filter: String,
    /// Species filter text sent verbatim to the server (empty means no filter).
    pub species_filter: String,
    /// Client-side ordering of the displayed page.
    pub sort_key: SortKey,
    /// Active UI language.
    pub language: Language,
    /// Control of the filter bar receiving keyboard input.
    pub focus: Focus,
    /// First card row shown in the grid.
    pub grid_scroll: u16,
    /// Last scrollable row of the grid as laid out in the latest frame.
    pub grid_max_scroll: u16,
    /// Lifecycle of the most recent request.
    pub fetch: FetchState,
    /// Pagination metadata of the last successful response.
    pub last_page_info: Option<PageInfo>,
    /// Identifier of the latest request whose result will be displayed.
    pub latest_request_id: u64,
    /// Next request identifier to allocate.
    pub next_request_id: u64,
    /// Set when page/status/species changed since the last request was issued.
    pub params_dirty: bool,
    /// When `true`, editing a filter jumps back to page 1.
    pub reset_page_on_filter: bool,
    /// Both translation tables.
    pub translations: Translations,
}

impl AppState {
    /// What: Build the initial state from resolved settings.
    ///
    /// Inputs:
    /// - `settings`: Settings after merging defaults, config file and CLI flags
    ///
    /// Output:
    /// - Fresh state on page 1 with empty filters and the configured language.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            page: 1,
            status_filter: String::new(),
            species_filter: String::new(),
            sort_key: settings.sort_key,
            language: settings.language,
            focus: Focus::default(),
            grid_scroll: 0,
            grid_max_scroll: 0,
            fetch: FetchState::Idle,
            last_page_info: None,
            latest_request_id: 0,
            next_request_id: 1,
            params_dirty: true,
            reset_page_on_filter: settings.reset_page_on_filter,
            translations: Translations::load(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
