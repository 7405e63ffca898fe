//! Page arithmetic and the scroll windows used by every list view.

use std::ops::Range;

pub const PAGE_SIZE: usize = 20;

/// Lines the table list reserves for its title, prompt and footer.
const TABLE_LIST_RESERVED_LINES: usize = 8;
/// Extra lines taken by the search prompt while it is open.
const SEARCH_PROMPT_LINES: usize = 2;
/// Lines the grid views reserve for title, status, header and footer.
const GRID_RESERVED_LINES: usize = 10;

pub fn total_pages(total_rows: usize) -> usize {
    if total_rows == 0 {
        1
    } else {
        (total_rows - 1) / PAGE_SIZE + 1
    }
}

pub fn max_page(total_rows: usize) -> usize {
    total_pages(total_rows) - 1
}

pub fn page_offset(page: usize) -> usize {
    page * PAGE_SIZE
}

/// Number of table names shown per screen page.
pub fn table_list_visible_count(height: u16, searching: bool) -> usize {
    let mut count = (height as usize).saturating_sub(TABLE_LIST_RESERVED_LINES).max(1);
    if searching {
        count = count.saturating_sub(SEARCH_PROMPT_LINES).max(1);
    }
    count
}

/// Number of grid rows that fit on screen.
pub fn grid_visible_count(height: u16) -> usize {
    (height as usize).saturating_sub(GRID_RESERVED_LINES).max(1)
}

/// Indices to draw so that `selected` stays on screen, scrolling only once
/// the selection passes the bottom of the first window.
pub fn scroll_window(selected: usize, total: usize, window: usize) -> Range<usize> {
    let window = window.max(1);
    let mut start = 0;
    if total > window && selected >= window {
        start = (selected + 1 - window).min(total - window);
    }
    start..(start + window).min(total)
}
