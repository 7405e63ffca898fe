//! Side effects returned by the reducer, executed by the Dispatcher.

use crate::navigation::Navigation;

/// Where the grid selection lands after a page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCursor {
    First,
    Last,
    Keep(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,
    Navigate(Navigation),
    ReloadTableNames,
    LoadPage { page: usize, cursor: PageCursor },
    ExecuteQuery { query: String },
    UpdateCell { row: usize, col: usize, value: String },
}
