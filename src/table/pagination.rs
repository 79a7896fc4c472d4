use std::ops::Range;

/// Page sizes offered by the size changer
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Number of page buttons shown around the current page
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Pagination counter over a record set of known length.
///
/// `current_page` is 1-based and always lies in `1..=total_pages()`.
/// An empty record set still has one page, which shows the empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    /// Create a pagination counter positioned on page 1
    ///
    /// A page size of 0 is treated as 1.
    pub fn new(page_size: usize, total_items: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages, `ceil(total / page_size)`, and at least 1
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Update the record count
    ///
    /// Any change in length moves back to page 1, so a shorter result set
    /// never leaves the view on a page that no longer exists.
    ///
    /// # Returns
    /// * `bool` - True if the count changed and the page was reset
    pub fn set_total_items(&mut self, total_items: usize) -> bool {
        if total_items == self.total_items {
            return false;
        }
        self.total_items = total_items;
        self.current_page = 1;
        true
    }

    /// Change the page size and return to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Move to page `page`, clamped into `1..=total_pages()`
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Advance one page; no-op on the last page
    pub fn next(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    /// Go back one page; no-op on page 1
    pub fn prev(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Offset of the first row of the current page
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    /// Index range of the visible rows, clipped to the record count
    pub fn bounds(&self) -> Range<usize> {
        let start = self.offset().min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Page numbers to offer as direct links.
    ///
    /// The window is centred on the current page where possible and is
    /// shifted to stay `max_visible` wide near either end.
    pub fn page_window(&self, max_visible: usize) -> Vec<usize> {
        let total = self.total_pages();
        let max_visible = max_visible.max(1);

        let mut start = self.current_page.saturating_sub(max_visible / 2).max(1);
        let end = (start + max_visible - 1).min(total);
        if end + 1 - start < max_visible {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }

        (start..=end).collect()
    }
}
