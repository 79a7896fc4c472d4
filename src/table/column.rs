//! Column descriptors typed against the row they display.

use std::fmt;

/// Placeholder for a missing or empty cell value
pub const EMPTY_CELL: &str = "-";

/// Horizontal alignment of a column's header and cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

type Accessor<T> = Box<dyn Fn(&T) -> Option<String> + Send + Sync>;
type Renderer<T> = Box<dyn Fn(&T, usize) -> String + Send + Sync>;

/// Describes how one column is labelled and how its cells are produced.
///
/// The accessor pulls the raw field out of a row. A custom renderer, when
/// set, replaces the accessor's output entirely and also receives the row's
/// position within the current page.
pub struct Column<T> {
    key: String,
    title: String,
    width: Option<usize>,
    align: Align,
    accessor: Accessor<T>,
    render: Option<Renderer<T>>,
}

impl<T> Column<T> {
    /// Create a column with a key, a display title and a field accessor
    ///
    /// # Arguments
    /// * `key` - Stable identifier of the column
    /// * `title` - Header label
    /// * `accessor` - Extracts the raw value; `None` renders as a dash
    pub fn new<F>(key: impl Into<String>, title: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            title: title.into(),
            width: None,
            align: Align::Left,
            accessor: Box::new(accessor),
            render: None,
        }
    }

    /// Set the minimum display width in characters
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the alignment
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set a custom cell renderer `(row, row_index_in_page) -> text`
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&T, usize) -> String + Send + Sync + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// Raw field value, without rendering
    pub fn value(&self, record: &T) -> Option<String> {
        (self.accessor)(record)
    }

    /// Produce the display text for one cell
    ///
    /// # Arguments
    /// * `record` - Row being rendered
    /// * `row_index` - Zero-based position of the row within the page
    pub fn cell(&self, record: &T, row_index: usize) -> String {
        if let Some(render) = &self.render {
            return render(record, row_index);
        }
        match self.value(record) {
            Some(v) if !v.is_empty() => v,
            _ => EMPTY_CELL.to_string(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
