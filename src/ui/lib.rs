//! Terminal front end: the crossterm event pump, key mapping and the ratatui
//! components for each screen.

pub(crate) use litetui_app as app;

pub mod adapters;
pub mod components;
pub mod event;
pub mod theme;
pub mod tui;
