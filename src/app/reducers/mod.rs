mod cell_edit;
mod helpers;
mod query;
mod row_detail;
mod table_data;
mod table_list;

pub use cell_edit::reduce_cell_edit;
pub use query::reduce_query;
pub use row_detail::reduce_row_detail;
pub use table_data::reduce_table_data;
pub use table_list::reduce_table_list;
