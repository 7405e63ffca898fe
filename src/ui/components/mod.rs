pub mod atoms;
pub mod cell_edit;
pub mod data_grid;
pub mod fatal_error;
pub mod footer;
pub mod layout;
pub mod query;
pub mod row_detail;
pub mod status_message;
pub mod table_data;
pub mod table_list;
pub mod text_input;
pub mod text_utils;
