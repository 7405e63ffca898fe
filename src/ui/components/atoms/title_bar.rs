use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Padded title on the purple bar.
pub fn title_bar(title: &str) -> Line<'static> {
    Line::from(Span::styled(format!(" {} ", title), Theme::title()))
}
