mod key_text;
mod title_bar;

pub use key_text::key_text;
pub use title_bar::title_bar;
