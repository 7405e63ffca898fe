pub mod column;
pub mod query_result;
pub mod table;
pub mod write_result;

pub use column::Column;
pub use query_result::{NULL_DISPLAY, QueryResult, row_count_display};
pub use table::TableSchema;
pub use write_result::WriteExecutionResult;
