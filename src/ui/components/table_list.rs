use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::title_bar;
use super::text_input::input_spans;
use super::text_utils::sanitize;
use crate::app::session::Session;
use crate::app::table_list_state::TableListState;
use crate::theme::Theme;

pub struct TableList;

impl TableList {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        session: &Session,
        view: &TableListState,
        cursor_visible: bool,
    ) {
        let mut lines = vec![title_bar("SQLite TUI - Tables"), Line::from("")];

        if view.searching {
            let mut spans = vec![Span::raw("Search: ")];
            spans.extend(input_spans(&view.search, cursor_visible));
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        } else if !session.table_filter.is_empty() {
            lines.push(Line::from(format!(
                "Filtered by: {} ({}/{} tables)",
                sanitize(&session.table_filter),
                session.filtered_table_names.len(),
                session.table_names.len()
            )));
            lines.push(Line::from(""));
        }

        if session.filtered_table_names.is_empty() {
            let empty = if session.table_filter.is_empty() {
                "No tables found in database"
            } else {
                "No tables match your search"
            };
            lines.push(Line::styled(empty, Theme::help()));
        } else {
            for i in view.visible_range(session) {
                let name = sanitize(&session.filtered_table_names[i]);
                if i == view.selected {
                    lines.push(Line::styled(format!("> {}", name), Theme::selected()));
                } else {
                    lines.push(Line::from(format!("  {}", name)));
                }
            }
        }

        let pages = view.page_count(session);
        if pages > 1 {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                format!("Page {}/{}", view.page + 1, pages),
                Theme::help(),
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
