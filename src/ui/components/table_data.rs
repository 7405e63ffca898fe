use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::title_bar;
use super::data_grid::grid_lines;
use super::text_input::input_spans;
use super::text_utils::sanitize;
use crate::app::session::Session;
use crate::app::table_data_state::TableDataState;
use crate::theme::Theme;

pub struct TableData;

impl TableData {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        session: &Session,
        view: &TableDataState,
        cursor_visible: bool,
    ) {
        let name = session.active_table().unwrap_or_default();
        let mut lines = vec![title_bar(&format!("Table: {}", sanitize(name)))];

        if view.searching {
            let mut spans = vec![Span::raw("Search: ")];
            spans.extend(input_spans(&view.search, cursor_visible));
            lines.push(Line::from(spans));
        } else if !session.row_filter.is_empty() {
            lines.push(Line::from(format!(
                "Filtered by: {} ({}/{} rows)",
                sanitize(&session.row_filter),
                session.filtered_rows.len(),
                session.raw_rows.len()
            )));
        } else {
            lines.push(Line::from(""));
        }

        lines.push(Line::styled(
            format!(
                "Page {}/{} ({} total rows)",
                session.current_page + 1,
                session.total_pages(),
                session.total_row_count
            ),
            Theme::help(),
        ));
        lines.push(Line::from(""));

        if session.filtered_rows.is_empty() {
            let empty = if session.row_filter.is_empty() {
                "No data found"
            } else {
                "No rows match your search"
            };
            lines.push(Line::styled(empty, Theme::help()));
        } else {
            lines.extend(grid_lines(
                session,
                view.visible_range(session),
                Some(view.selected_row),
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
