use tracing::debug;

use super::column::{Align, Column};
use super::pagination::{DEFAULT_PAGE_WINDOW, Pagination};

/// Options fixed when a table is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Rows per page
    pub page_size: usize,

    /// Prepend a running index column
    pub show_index: bool,

    /// Title of the index column
    pub index_title: String,

    /// Placeholder shown instead of rows when there are no records
    pub empty_text: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            show_index: false,
            index_title: "STT".to_string(),
            empty_text: "Không có dữ liệu".to_string(),
        }
    }
}

impl From<&crate::config::TableConfig> for TableOptions {
    fn from(config: &crate::config::TableConfig) -> Self {
        Self {
            page_size: config.page_size,
            show_index: config.show_index,
            index_title: config.index_title.clone(),
            empty_text: config.empty_text.clone(),
        }
    }
}

/// Header cell of a rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub title: String,
    pub width: Option<usize>,
    pub align: Align,
}

/// Body of a rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    /// Single placeholder row spanning every column
    Empty(String),

    /// Rendered cells, one inner vector per visible row
    Rows(Vec<Vec<String>>),
}

/// Everything needed to draw one page of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub headers: Vec<HeaderCell>,
    pub body: PageBody,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_window: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
    /// "Hiển thị a-b của n kết quả", absent when there are no records
    pub summary: Option<String>,
}

impl PageView {
    /// Rendered rows, empty for the placeholder body
    pub fn rows(&self) -> &[Vec<String>] {
        match &self.body {
            PageBody::Rows(rows) => rows,
            PageBody::Empty(_) => &[],
        }
    }
}

/// Paginated table over a record set of type `T`.
///
/// The table owns its pagination state. Callers replace the records or the
/// column set wholesale; the table never mutates the records themselves.
pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    records: Vec<T>,
    pagination: Pagination,
    options: TableOptions,
}

impl<T> DataTable<T> {
    /// Create a table positioned on page 1
    pub fn new(columns: Vec<Column<T>>, records: Vec<T>, mut options: TableOptions) -> Self {
        let pagination = Pagination::new(options.page_size, records.len());
        options.page_size = pagination.page_size();
        Self {
            columns,
            records,
            pagination,
            options,
        }
    }

    /// Replace the record set
    ///
    /// A different record count resets the table to page 1.
    pub fn set_records(&mut self, records: Vec<T>) {
        if self.pagination.set_total_items(records.len()) {
            debug!("Record count changed to {}, back to page 1", records.len());
        }
        self.records = records;
    }

    /// Replace the column set, keeping the current page
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_page(&mut self) {
        self.pagination.next();
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    /// Change rows per page; returns to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
        self.options.page_size = self.pagination.page_size();
    }

    /// Records on the current page
    pub fn visible_records(&self) -> &[T] {
        &self.records[self.pagination.bounds()]
    }

    /// Header cells, including the index column when enabled
    pub fn headers(&self) -> Vec<HeaderCell> {
        let mut headers = Vec::with_capacity(self.column_count());
        if self.options.show_index {
            headers.push(HeaderCell {
                title: self.options.index_title.clone(),
                width: Some(5),
                align: Align::Center,
            });
        }
        headers.extend(self.columns.iter().map(|c| HeaderCell {
            title: c.title().to_string(),
            width: c.width(),
            align: c.align(),
        }));
        headers
    }

    /// Number of displayed columns, including the index column
    pub fn column_count(&self) -> usize {
        self.columns.len() + usize::from(self.options.show_index)
    }

    /// Render the visible rows as text cells
    pub fn visible_rows(&self) -> Vec<Vec<String>> {
        let offset = self.pagination.offset();
        self.visible_records()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let mut row = Vec::with_capacity(self.column_count());
                if self.options.show_index {
                    row.push((offset + i + 1).to_string());
                }
                row.extend(self.columns.iter().map(|c| c.cell(record, i)));
                row
            })
            .collect()
    }

    /// "Hiển thị a-b của n kết quả" for the current page
    pub fn range_summary(&self) -> Option<String> {
        if self.records.is_empty() {
            return None;
        }
        let bounds = self.pagination.bounds();
        Some(format!(
            "Hiển thị {}-{} của {} kết quả",
            bounds.start + 1,
            bounds.end,
            self.records.len()
        ))
    }

    /// Render the current page
    pub fn render(&self) -> PageView {
        let body = if self.records.is_empty() {
            PageBody::Empty(self.options.empty_text.clone())
        } else {
            PageBody::Rows(self.visible_rows())
        };

        PageView {
            headers: self.headers(),
            body,
            current_page: self.pagination.current_page(),
            total_pages: self.pagination.total_pages(),
            total_items: self.records.len(),
            page_window: self.pagination.page_window(DEFAULT_PAGE_WINDOW),
            has_previous: self.pagination.has_previous(),
            has_next: self.pagination.has_next(),
            summary: self.range_summary(),
        }
    }
}
