pub(crate) use litetui_app as app;
pub(crate) use litetui_domain as domain;

pub mod adapters;
