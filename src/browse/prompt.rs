//! Prompt for the browse pager

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Shows the station and the page position, e.g. `A001 [2/3]> `
pub struct BrowsePrompt {
    station: String,
    current_page: usize,
    total_pages: usize,
}

impl BrowsePrompt {
    /// Create a new browse prompt
    ///
    /// # Arguments
    /// * `station` - Station label
    /// * `current_page` - 1-based page on screen
    /// * `total_pages` - Page count
    pub fn new(station: impl Into<String>, current_page: usize, total_pages: usize) -> Self {
        Self {
            station: station.into(),
            current_page,
            total_pages,
        }
    }

    /// Update the page position before the next read
    pub fn set_position(&mut self, current_page: usize, total_pages: usize) {
        self.current_page = current_page;
        self.total_pages = total_pages;
    }
}

impl Prompt for BrowsePrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        format!(
            "{} [{}/{}]> ",
            self.station, self.current_page, self.total_pages
        )
        .into()
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}
