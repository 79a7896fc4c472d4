use nu_ansi_term::{Color, Style};

use crate::table::PageView;

const PREV_MARKER: &str = "‹";
const NEXT_MARKER: &str = "›";

/// Build the line shown under a page: range summary on the left, page
/// buttons on the right.
///
/// Returns `None` for an empty record set, which has no pagination.
pub fn pagination_footer(view: &PageView, use_colors: bool) -> Option<String> {
    let summary = view.summary.as_deref()?;

    let mut buttons = Vec::with_capacity(view.page_window.len() + 2);
    buttons.push(marker(PREV_MARKER, view.has_previous, use_colors));
    for &page in &view.page_window {
        buttons.push(page_button(page, page == view.current_page, use_colors));
    }
    buttons.push(marker(NEXT_MARKER, view.has_next, use_colors));

    Some(format!("{summary}    {}", buttons.join(" ")))
}

fn marker(text: &str, enabled: bool, use_colors: bool) -> String {
    match (enabled, use_colors) {
        (true, _) => text.to_string(),
        (false, true) => Style::new().dimmed().paint(text).to_string(),
        (false, false) => " ".repeat(text.chars().count()),
    }
}

fn page_button(page: usize, current: bool, use_colors: bool) -> String {
    match (current, use_colors) {
        (false, _) => page.to_string(),
        (true, true) => Color::White.on(Color::Blue).bold().paint(format!(" {page} ")).to_string(),
        (true, false) => format!("[{page}]"),
    }
}
