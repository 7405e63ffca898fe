use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::theme::Theme;

pub struct FatalError;

impl FatalError {
    pub fn render(frame: &mut Frame, area: Rect, message: &str) {
        let lines = vec![
            Line::styled(
                format!("Error: {}", message),
                Style::default().fg(Theme::STATUS_ERROR),
            ),
            Line::from(""),
            Line::styled("Press 'ctrl+c' to quit", Theme::help()),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}
