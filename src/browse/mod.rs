//! Interactive report pager
//!
//! `aqreport browse` loads a report once and then reads single-line commands
//! with reedline:
//!
//! | input      | effect                              |
//! |------------|-------------------------------------|
//! | `n`        | next page                           |
//! | `p`        | previous page                       |
//! | `g N`      | go to page N (clamped)              |
//! | `size N`   | rows per page, one of 5, 10, 20, 50 |
//! | `export`   | write every record to a workbook    |
//! | `q`        | quit                                |
//!
//! Command handling lives in [`Browser::apply`] and does not touch the
//! terminal, so it can be driven from tests.

pub mod prompt;

use reedline::{FileBackedHistory, Reedline, Signal};
use tracing::{debug, warn};

use crate::error::{AqError, Result};
use crate::export::ExportAdapter;
use crate::formatter::{Colorizer, TableFormatter};
use crate::report::{Indicator, ReportRow, ViewMode};
use crate::state::AppState;
use crate::table::{DataTable, PAGE_SIZE_OPTIONS};

pub use prompt::BrowsePrompt;

/// In-memory history entries kept for the session
const HISTORY_SIZE: usize = 100;

/// A parsed pager command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    First,
    Last,
    Go(usize),
    Size(usize),
    Export,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse one input line
    ///
    /// Blank input parses to `None`.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(AqError::Generic(format!("Too many arguments: {}", input.trim())));
        }

        let command = match (head.to_lowercase().as_str(), arg) {
            ("n" | "next", None) => Self::Next,
            ("p" | "prev", None) => Self::Prev,
            ("first", None) => Self::First,
            ("last", None) => Self::Last,
            ("g" | "go", Some(n)) => Self::Go(parse_number(n)?),
            ("size", Some(n)) => Self::Size(parse_number(n)?),
            ("export" | "x", None) => Self::Export,
            ("h" | "help" | "?", None) => Self::Help,
            ("q" | "quit" | "exit", None) => Self::Quit,
            ("g" | "go" | "size", None) => {
                return Err(AqError::Generic(format!("'{head}' needs a number")));
            }
            _ => return Err(AqError::Generic(format!("Unknown command: {}", input.trim()))),
        };
        Ok(Some(command))
    }
}

fn parse_number(text: &str) -> Result<usize> {
    text.parse::<usize>()
        .map_err(|_| AqError::Generic(format!("Not a number: {text}")))
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The page changed and should be drawn again
    Redraw,
    /// Print a message, keep the page
    Message(String),
    /// Leave the pager
    Quit,
}

/// Pager over a loaded report
pub struct Browser {
    table: DataTable<ReportRow>,
    formatter: TableFormatter,
    colorizer: Colorizer,
    exporter: ExportAdapter,
    state: AppState,
    view: ViewMode,
    indicator: Indicator,
    station_name: String,
}

impl Browser {
    pub fn new(
        table: DataTable<ReportRow>,
        formatter: TableFormatter,
        exporter: ExportAdapter,
        state: AppState,
        view: ViewMode,
        indicator: Indicator,
        station_name: String,
    ) -> Self {
        let colorizer = Colorizer::new(formatter.use_colors());
        Self {
            table,
            formatter,
            colorizer,
            exporter,
            state,
            view,
            indicator,
            station_name,
        }
    }

    pub fn table(&self) -> &DataTable<ReportRow> {
        &self.table
    }

    /// Current page as text, table plus footer
    pub fn render(&self) -> String {
        self.formatter.format_page(&self.table.render())
    }

    /// Apply a command to the table
    pub fn apply(&mut self, command: BrowseCommand) -> Result<Outcome> {
        debug!("Browse command {:?}", command);
        let outcome = match command {
            BrowseCommand::Next => {
                self.table.next_page();
                Outcome::Redraw
            }
            BrowseCommand::Prev => {
                self.table.prev_page();
                Outcome::Redraw
            }
            BrowseCommand::First => {
                self.table.go_to_page(1);
                Outcome::Redraw
            }
            BrowseCommand::Last => {
                self.table.go_to_page(self.table.total_pages());
                Outcome::Redraw
            }
            BrowseCommand::Go(page) => {
                self.table.go_to_page(page);
                Outcome::Redraw
            }
            BrowseCommand::Size(size) => {
                if !PAGE_SIZE_OPTIONS.contains(&size) {
                    let allowed: Vec<String> =
                        PAGE_SIZE_OPTIONS.iter().map(|s| s.to_string()).collect();
                    return Ok(Outcome::Message(self.colorizer.warning(&format!(
                        "Page size must be one of {}",
                        allowed.join(", ")
                    ))));
                }
                self.table.set_page_size(size);
                if let Err(e) = self.state.set_page_size(size) {
                    warn!("Could not save page size: {}", e);
                }
                Outcome::Redraw
            }
            BrowseCommand::Export => Outcome::Message(self.export()?),
            BrowseCommand::Help => Outcome::Message(help_text()),
            BrowseCommand::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    fn export(&self) -> Result<String> {
        if self.table.is_empty() {
            return Ok(self.colorizer.warning("Không có dữ liệu để xuất"));
        }
        let summary = self.exporter.export(
            self.table.records(),
            self.view,
            self.indicator,
            Some(&self.station_name),
        )?;
        Ok(self.colorizer.success(&format!(
            "Đã xuất {} dòng: {}",
            summary.rows,
            summary.path.display()
        )))
    }

    /// Run the pager until `q`, Ctrl-C or Ctrl-D
    pub fn run(&mut self) -> Result<()> {
        let history = FileBackedHistory::new(HISTORY_SIZE)?;
        let mut line_editor = Reedline::create().with_history(Box::new(history));
        let mut prompt = BrowsePrompt::new(
            self.station_name.clone(),
            self.table.current_page(),
            self.table.total_pages(),
        );

        println!("{}", self.render());

        loop {
            prompt.set_position(self.table.current_page(), self.table.total_pages());
            let line = match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => line,
                Ok(_) => break,
                Err(e) => return Err(e.into()),
            };

            let command = match BrowseCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    eprintln!("{}", self.colorizer.error(&e.to_string()));
                    continue;
                }
            };

            match self.apply(command) {
                Ok(Outcome::Redraw) => println!("{}", self.render()),
                Ok(Outcome::Message(msg)) => println!("{msg}"),
                Ok(Outcome::Quit) => break,
                Err(e) => eprintln!("{}", self.colorizer.error(&e.to_string())),
            }
        }

        Ok(())
    }
}

fn help_text() -> String {
    [
        "n, next      next page",
        "p, prev      previous page",
        "first, last  first or last page",
        "g N          go to page N",
        "size N       rows per page (5, 10, 20, 50)",
        "export       write all records to .xlsx",
        "q            quit",
    ]
    .join("\n")
}
