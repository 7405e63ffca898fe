//! litetui: a keyboard-driven terminal browser and editor for SQLite files.

pub use litetui_app as app;
pub use litetui_domain as domain;
pub use litetui_infra as infra;
pub use litetui_ui as ui;

pub mod config;
pub mod error;
pub mod logging;
