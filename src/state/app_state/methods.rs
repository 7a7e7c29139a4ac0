//! Implementation methods for `AppState`.

use crate::logic::sorted_characters;
use crate::sources::QueryVariables;
use crate::state::app_state::AppState;
use crate::state::types::{Character, FetchResult, FetchState, Focus};

impl AppState {
    /// What: Look up a label in the active language.
    ///
    /// Inputs:
    /// - `key`: Dot-notation translation key (e.g., "card.species")
    ///
    /// Output:
    /// - Translated string, English fallback, or the key itself.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translations.get(self.language, key)
    }

    /// What: Build the request parameters from the current filter state.
    ///
    /// Output:
    /// - `QueryVariables` carrying the page and both filters verbatim.
    #[must_use]
    pub fn query_variables(&self) -> QueryVariables {
        QueryVariables {
            page: self.page,
            status: self.status_filter.clone(),
            species: self.species_filter.clone(),
        }
    }

    /// Characters of the latest settled successful response, in server order.
    ///
    /// Empty while pending, after a failure, or before anything was fetched.
    #[must_use]
    pub fn records(&self) -> &[Character] {
        self.fetch
            .page()
            .map(|p| p.results.as_slice())
            .unwrap_or_default()
    }

    /// Characters of the latest response ordered by the active sort key.
    #[must_use]
    pub fn sorted_records(&self) -> Vec<Character> {
        sorted_characters(self.records(), self.sort_key)
    }

    /// Whether the "next" control is enabled.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.last_page_info
            .and_then(|i| i.next)
            .is_some_and(|n| n.max(1) != self.page)
    }

    /// Whether the "previous" control is enabled.
    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.last_page_info
            .and_then(|i| i.prev)
            .is_some_and(|p| p.max(1) != self.page)
    }

    /// What: Advance to the following page.
    ///
    /// Output:
    /// - `true` when the page changed (and a new request is needed).
    ///
    /// Details:
    /// - Jumps to the `next` page reported by the last successful response, so
    ///   repeated presses while a request is pending never run past the last page.
    pub fn next_page(&mut self) -> bool {
        let Some(target) = self.last_page_info.and_then(|i| i.next) else {
            return false;
        };
        self.go_to_page(target)
    }

    /// What: Go back one page.
    ///
    /// Output:
    /// - `true` when the page changed.
    ///
    /// Details:
    /// - Jumps to the `prev` page of the last successful response, clamped at 1.
    pub fn prev_page(&mut self) -> bool {
        let Some(target) = self.last_page_info.and_then(|i| i.prev) else {
            return false;
        };
        self.go_to_page(target)
    }

    /// Move to `target` (at least 1) and mark the parameters dirty if it differs.
    fn go_to_page(&mut self, target: u32) -> bool {
        let target = target.max(1);
        if target == self.page {
            return false;
        }
        self.page = target;
        self.params_dirty = true;
        true
    }

    /// What: Apply `edit` to a copy of the focused filter and store the result.
    ///
    /// Output:
    /// - `true` when `edit` reported a change; `false` on the sort selector.
    fn edit_focused_filter(&mut self, edit: impl FnOnce(&mut String) -> bool) -> bool {
        let mut text = match self.focus {
            Focus::Status => self.status_filter.clone(),
            Focus::Species => self.species_filter.clone(),
            Focus::Sort => return false,
        };
        if !edit(&mut text) {
            return false;
        }
        match self.focus {
            Focus::Status => self.set_status_filter(text),
            Focus::Species => self.set_species_filter(text),
            Focus::Sort => {}
        }
        true
    }

    /// What: Record that a filter text changed.
    ///
    /// Details:
    /// - Keeps the current page unless `reset_page_on_filter` is enabled.
    fn on_filter_edited(&mut self) {
        if self.reset_page_on_filter {
            self.page = 1;
        }
        self.params_dirty = true;
    }

    /// What: Append a character to the focused filter input.
    ///
    /// Output:
    /// - `true` when a filter changed; `false` when the sort selector has focus.
    pub fn push_filter_char(&mut self, ch: char) -> bool {
        self.edit_focused_filter(|text| {
            text.push(ch);
            true
        })
    }

    /// What: Delete the last character of the focused filter input.
    ///
    /// Output:
    /// - `true` when a character was removed.
    pub fn pop_filter_char(&mut self) -> bool {
        self.edit_focused_filter(|text| text.pop().is_some())
    }

    /// What: Empty the focused filter input.
    ///
    /// Output:
    /// - `true` when the input held text before.
    pub fn clear_filter(&mut self) -> bool {
        self.edit_focused_filter(|text| {
            let had_text = !text.is_empty();
            text.clear();
            had_text
        })
    }

    /// Replace the status filter text.
    pub fn set_status_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.status_filter {
            self.status_filter = text;
            self.on_filter_edited();
        }
    }

    /// Replace the species filter text.
    pub fn set_species_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.species_filter {
            self.species_filter = text;
            self.on_filter_edited();
        }
    }

    /// Scroll the card grid down one row, stopping at the last row.
    pub fn scroll_grid_down(&mut self) {
        self.grid_scroll = self.grid_scroll.saturating_add(1).min(self.grid_max_scroll);
    }

    /// What: Record how far the grid can scroll for the current page and terminal size.
    ///
    /// Details:
    /// - Called after every frame; pulls the offset back when the grid shrank.
    pub fn set_grid_max_scroll(&mut self, max: u16) {
        self.grid_max_scroll = max;
        self.grid_scroll = self.grid_scroll.min(max);
    }

    /// Scroll the card grid up one row.
    pub fn scroll_grid_up(&mut self) {
        self.grid_scroll = self.grid_scroll.saturating_sub(1);
    }

    /// Switch between sorting by name and by origin. Never triggers a request.
    pub fn toggle_sort_key(&mut self) {
        self.sort_key = self.sort_key.toggled();
    }

    /// Switch the UI language. Never triggers a request.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        tracing::debug!(language = self.language.code(), "language switched");
    }

    /// What: Allocate an identifier for a new request and mark it pending.
    ///
    /// Output:
    /// - The identifier that the matching `FetchResult` must echo.
    pub fn begin_request(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request_id = id;
        self.fetch = FetchState::Pending { id };
        self.params_dirty = false;
        id
    }

    /// What: Settle the lifecycle with a worker result.
    ///
    /// Inputs:
    /// - `result`: Outcome echoed by the fetch worker
    ///
    /// Output:
    /// - `true` when applied; `false` when the result belongs to a superseded request.
    ///
    /// Details:
    /// - Successful pages replace the records wholesale and refresh the pagination flags.
    /// - Failures clear the records but keep the last known pagination flags.
    pub fn apply_fetch_result(&mut self, result: FetchResult) -> bool {
        if result.id != self.latest_request_id {
            tracing::debug!(
                id = result.id,
                latest = self.latest_request_id,
                "dropping stale fetch result"
            );
            return false;
        }
        match &result.outcome {
            Ok(page) => {
                tracing::info!(
                    page = self.page,
                    count = page.results.len(),
                    pages = ?page.info.pages,
                    "page loaded"
                );
                self.last_page_info = Some(page.info);
            }
            Err(e) => tracing::warn!(page = self.page, error = %e, "page request failed"),
        }
        self.fetch = FetchState::Settled(result.outcome);
        self.grid_scroll = 0;
        true
    }
}
