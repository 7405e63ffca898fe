use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::message_state::{MessageLevel, StatusMessage};
use crate::theme::Theme;

pub fn render_line(message: &StatusMessage) -> Line<'static> {
    let (prefix, color) = match message.level {
        MessageLevel::Error => ("✗ ", Theme::STATUS_ERROR),
        MessageLevel::Success => ("✓ ", Theme::STATUS_SUCCESS),
    };

    Line::from(vec![Span::styled(
        format!("{}{}", prefix, message.text),
        Style::default().fg(color),
    )])
}
