use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::title_bar;
use super::text_input::input_spans;
use super::text_utils::{WRAP_WIDTH, sanitize, truncate_cell};
use crate::app::cell_edit_state::CellEditState;
use crate::app::session::Session;
use crate::theme::Theme;

pub struct CellEdit;

impl CellEdit {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        session: &Session,
        view: &CellEditState,
        cursor_visible: bool,
    ) {
        let column = session.columns.get(view.col).map_or("", String::as_str);
        let mut lines = vec![
            title_bar(&format!("Edit Cell: {}", sanitize(column))),
            Line::from(""),
        ];

        let mut value = vec![Span::raw("Value: ")];
        value.extend(input_spans(&view.input, cursor_visible));
        lines.push(Line::from(value));
        lines.push(Line::from(""));

        if let Some(col) = session
            .schema
            .as_ref()
            .and_then(|schema| schema.columns.iter().find(|c| c.name == column))
        {
            lines.push(Line::styled(format!("Type: {}", col.type_display()), Theme::help()));
        }
        if view.is_dirty() {
            lines.push(Line::styled(
                format!("Was: {}", truncate_cell(&view.original_value, WRAP_WIDTH)),
                Theme::help(),
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
