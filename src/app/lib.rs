//! Navigation core: session cache, per-mode view controllers and the
//! dispatcher that turns their requests into store calls.

pub use litetui_domain as domain;

pub mod action;
pub mod cell_edit_state;
pub mod dispatcher;
pub mod effect;
pub mod fuzzy;
pub mod goto_sequence;
pub mod input_mode;
pub mod keybindings;
pub mod message_state;
pub mod mode;
pub mod navigation;
pub mod pagination;
pub mod ports;
pub mod query_rewrite;
pub mod query_state;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod row_detail_state;
pub mod session;
pub mod state;
pub mod table_data_state;
pub mod table_list_state;
pub mod text_input;
pub mod view_state;
pub mod write_update;
