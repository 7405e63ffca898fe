use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::atoms::title_bar;
use super::text_utils::{CONTINUATION_INDENT, WRAP_WIDTH, sanitize, wrap_text};
use crate::app::pagination::{grid_visible_count, scroll_window};
use crate::app::row_detail_state::RowDetailState;
use crate::app::session::Session;
use crate::theme::Theme;

pub struct RowDetail;

impl RowDetail {
    pub fn render(frame: &mut Frame, area: Rect, session: &Session, view: &RowDetailState) {
        let mut lines = vec![title_bar("Row Details"), Line::from("")];

        let Some(row) = session.filtered_rows.get(view.row) else {
            lines.push(Line::styled("Row not found", Theme::help()));
            frame.render_widget(Paragraph::new(lines), area);
            return;
        };

        let window = scroll_window(
            view.selected_col,
            session.columns.len(),
            grid_visible_count(session.viewport_height),
        );
        for i in window {
            let value = row.get(i).map_or("", String::as_str);
            let field = field_lines(&session.columns[i], value);
            let style = if i == view.selected_col {
                Theme::selected()
            } else {
                Style::default()
            };
            lines.extend(field.into_iter().map(|text| Line::styled(text, style)));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// `column: value`, with long values wrapped onto indented lines.
pub fn field_lines(column: &str, value: &str) -> Vec<String> {
    let column = sanitize(column);
    if value.chars().count() <= WRAP_WIDTH {
        return vec![format!("{}: {}", column, sanitize(value))];
    }

    let mut wrapped = wrap_text(value, WRAP_WIDTH).into_iter();
    let first = wrapped.next().unwrap_or_default();
    let mut lines = vec![format!("{}: {}", column, first)];
    lines.extend(wrapped.map(|rest| format!("{}{}", CONTINUATION_INDENT, rest)));
    lines
}
