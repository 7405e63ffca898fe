/// Screen transitions requested by view controllers. The dispatcher
/// performs any loading they need and installs the new view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Back to the table list. `clear_filter` drops the table-name filter
    /// and reselects the previously browsed table.
    TableList { clear_filter: bool },
    /// Open a table from the list at page 0.
    TableData { table_index: usize },
    /// Leave row detail for the grid without reloading.
    BackToTableData { row: usize },
    RowDetail {
        row: usize,
        col: usize,
        from_query: bool,
    },
    CellEdit {
        row: usize,
        col: usize,
        from_query: bool,
    },
    Query,
    /// Back to SQL mode with the previous text and results.
    ReturnToQuery { row: usize },
}
