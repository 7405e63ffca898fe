/// Text shown for SQL NULL cells.
pub const NULL_DISPLAY: &str = "NULL";

/// Represents the result of a SQL query execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// The SQL query that was executed
    pub query: String,
    /// Column names from the result set
    pub columns: Vec<String>,
    /// Row data as strings (each inner Vec represents a row)
    pub rows: Vec<Vec<String>>,
    /// Total number of rows returned
    pub row_count: usize,
    /// Execution time in milliseconds
    pub execution_time_ms: u64,
}

impl QueryResult {
    pub fn success(
        query: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
        execution_time_ms: u64,
    ) -> Self {
        let row_count = rows.len();
        Self {
            query,
            columns,
            rows,
            row_count,
            execution_time_ms,
        }
    }
}

/// "1 row" or "N rows".
pub fn row_count_display(count: usize) -> String {
    if count == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", count)
    }
}
