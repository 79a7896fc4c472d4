//! Table rendering for report pages using tabled
//!
//! A [`PageView`] already carries display text, so this module only deals
//! with layout:
//! - Builder pattern over the header and row cells
//! - Per-column alignment and minimum width from the column descriptors
//! - Wrapping of cells wider than the configured maximum
//! - A single spanning row for the empty state

use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Span, Style,
        object::{Columns, Rows},
        width::Width,
    },
};

use crate::config::{DisplayConfig, TableStyleName};
use crate::table::{Align, PageBody, PageView};

use super::footer::pagination_footer;

/// Maximum width for a single column (characters)
const DEFAULT_MAX_COLUMN_WIDTH: usize = 40;

/// Table formatter for paginated views
#[derive(Debug, Clone)]
pub struct TableFormatter {
    /// Maximum column width
    max_column_width: usize,

    /// Border style
    style: TableStyleName,

    /// Enable colored output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter with default settings
    ///
    /// # Returns
    /// * `Self` - New table formatter
    pub fn new() -> Self {
        Self {
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            style: TableStyleName::Modern,
            use_colors: false,
        }
    }

    /// Create a formatter from the display section of the config
    ///
    /// # Arguments
    /// * `display` - Display configuration
    /// * `use_colors` - Effective color setting after CLI overrides
    pub fn from_config(display: &DisplayConfig, use_colors: bool) -> Self {
        Self {
            max_column_width: display.max_column_width.max(1),
            style: display.style,
            use_colors,
        }
    }

    /// Enable or disable colored output
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the table style
    ///
    /// # Arguments
    /// * `style` - Table style to use
    ///
    /// # Returns
    /// * `Self` - Modified formatter
    pub fn with_style(mut self, style: TableStyleName) -> Self {
        self.style = style;
        self
    }

    /// Set maximum column width
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width.max(1);
        self
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Format a page followed by its pagination footer
    ///
    /// The footer is omitted when there are no records.
    pub fn format_page(&self, view: &PageView) -> String {
        let table = self.format_table(view);
        match pagination_footer(view, self.use_colors) {
            Some(footer) => format!("{table}\n{footer}"),
            None => table,
        }
    }

    /// Format only the table part of a page
    pub fn format_table(&self, view: &PageView) -> String {
        let column_count = view.headers.len();
        if column_count == 0 {
            return match &view.body {
                PageBody::Empty(text) => text.clone(),
                PageBody::Rows(_) => String::new(),
            };
        }

        let mut builder = Builder::default();
        builder.push_record(view.headers.iter().map(|h| h.title.clone()));

        match &view.body {
            PageBody::Empty(text) => {
                let mut row = vec![String::new(); column_count];
                row[0] = text.clone();
                builder.push_record(row);
            }
            PageBody::Rows(rows) => {
                for row in rows {
                    builder.push_record(row.clone());
                }
            }
        }

        let mut table = builder.build();
        self.apply_style(&mut table);

        for (i, header) in view.headers.iter().enumerate() {
            table.modify(Columns::new(i..=i), alignment(header.align));
            table.modify(Columns::new(i..=i), Width::wrap(self.max_column_width));
            if let Some(width) = header.width {
                table.modify(Columns::new(i..=i), Width::increase(width));
            }
        }

        if let PageBody::Empty(_) = view.body {
            let span = isize::try_from(column_count).unwrap_or(1);
            table.modify((1, 0), Span::column(span));
            table.modify((1, 0), Alignment::center());
        }

        table.modify(Rows::first(), Alignment::center());

        if self.use_colors {
            table.modify(Rows::first(), Color::FG_CYAN | Color::BOLD);
        }

        table.to_string()
    }

    /// Apply table style
    ///
    /// # Arguments
    /// * `table` - Table to style
    fn apply_style(&self, table: &mut Table) {
        match self.style {
            TableStyleName::Modern => table.with(Style::modern()),
            TableStyleName::Ascii => table.with(Style::ascii()),
            TableStyleName::Rounded => table.with(Style::rounded()),
            TableStyleName::Markdown => table.with(Style::markdown()),
            TableStyleName::Psql => table.with(Style::psql()),
        };
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::left(),
        Align::Center => Alignment::center(),
        Align::Right => Alignment::right(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, DataTable, TableOptions};

    fn months(n: u32) -> Vec<(String, f64)> {
        (1..=n).map(|m| (format!("Tháng {m}"), 7.0 + f64::from(m) / 10.0)).collect()
    }

    fn table(records: Vec<(String, f64)>, show_index: bool) -> DataTable<(String, f64)> {
        let columns = vec![
            Column::new("period", "Thời gian", |r: &(String, f64)| Some(r.0.clone())),
            Column::new("uv", "UV Index", |r: &(String, f64)| Some(format!("{:.1}", r.1)))
                .with_align(Align::Right),
        ];
        DataTable::new(
            columns,
            records,
            TableOptions {
                page_size: 10,
                show_index,
                ..TableOptions::default()
            },
        )
    }

    #[test]
    fn test_formatter_creation() {
        let formatter = TableFormatter::new();
        assert_eq!(formatter.max_column_width, DEFAULT_MAX_COLUMN_WIDTH);
        assert!(!formatter.use_colors());
    }

    #[test]
    fn test_format_first_page() {
        let view = table(months(12), true).render();
        let out = TableFormatter::new().format_table(&view);
        assert!(out.contains("STT"));
        assert!(out.contains("Thời gian"));
        assert!(out.contains("Tháng 10"));
        assert!(!out.contains("Tháng 11"));
        assert!(out.contains("7.1"));
    }

    #[test]
    fn test_format_page_has_footer() {
        let mut t = table(months(12), false);
        t.next_page();
        let out = TableFormatter::new().format_page(&t.render());
        assert!(out.contains("Tháng 12"));
        assert!(out.contains("Hiển thị 11-12 của 12 kết quả"));
    }

    #[test]
    fn test_empty_state_single_row() {
        let t = DataTable::new(
            vec![
                Column::new("a", "A", |_: &u8| None),
                Column::new("b", "B", |_: &u8| None),
            ],
            Vec::new(),
            TableOptions {
                empty_text: "No data".into(),
                ..TableOptions::default()
            },
        );
        let view = t.render();
        let out = TableFormatter::new().with_style(TableStyleName::Ascii).format_page(&view);
        assert_eq!(out.matches("No data").count(), 1);
        assert!(!out.contains("Hiển thị"));
    }

    #[test]
    fn test_ascii_style() {
        let view = table(months(1), false).render();
        let out = TableFormatter::new()
            .with_style(TableStyleName::Ascii)
            .format_table(&view);
        assert!(out.contains('+'));
        assert!(out.contains('|'));
    }

    #[test]
    fn test_long_cells_wrap() {
        let long = "x".repeat(30);
        let view = table(vec![(long.clone(), 1.0)], false).render();
        let out = TableFormatter::new()
            .with_max_column_width(10)
            .format_table(&view);
        assert!(!out.contains(&long));
    }

    #[test]
    fn test_no_columns() {
        let t: DataTable<u8> = DataTable::new(Vec::new(), Vec::new(), TableOptions::default());
        assert_eq!(TableFormatter::new().format_table(&t.render()), "Không có dữ liệu");
    }
}
