use thiserror::Error;

use crate::domain::{QueryResult, TableSchema, WriteExecutionResult};
use crate::write_update::UpdateStatement;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The database cannot be used at all: unopenable, corrupt, not SQLite.
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Query failed: {0}")]
    Query(String),
}

impl StoreError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Synchronous access to one open SQLite database. Every value comes back
/// rendered as display text; NULL becomes `"NULL"`.
#[cfg_attr(test, mockall::automock)]
pub trait Store {
    /// User tables, ordered by name.
    fn table_names(&self) -> Result<Vec<String>, StoreError>;

    fn table_schema(&self, table: &str) -> Result<TableSchema, StoreError>;

    fn row_count(&self, table: &str) -> Result<usize, StoreError>;

    fn fetch_page(
        &self,
        table: &str,
        limit: usize,
        offset: usize,
    ) -> Result<QueryResult, StoreError>;

    fn execute_query(&self, query: &str) -> Result<QueryResult, StoreError>;

    fn execute_update(
        &self,
        statement: &UpdateStatement,
    ) -> Result<WriteExecutionResult, StoreError>;
}
