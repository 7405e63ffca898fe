use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::title_bar;
use super::data_grid::grid_lines;
use super::text_input::input_spans;
use crate::app::domain::row_count_display;
use crate::app::query_state::{QueryFocus, QueryState};
use crate::app::session::Session;
use crate::theme::Theme;

pub struct Query;

impl Query {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        session: &Session,
        view: &QueryState,
        cursor_visible: bool,
    ) {
        let input_focused = view.focus == QueryFocus::Input;
        let mut lines = vec![title_bar("SQL Query"), Line::from("")];

        let mut query = vec![Span::raw("Query: ")];
        query.extend(input_spans(&view.input, input_focused && cursor_visible));
        lines.push(Line::from(query));

        if let Some(error) = &view.error {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                format!("Error: {}", error),
                Style::default().fg(Theme::STATUS_ERROR),
            ));
        }

        if view.show_results {
            lines.push(Line::from(""));
            lines.push(Line::styled(results_summary(session), Theme::help()));
            if session.filtered_rows.is_empty() {
                lines.push(Line::styled("No data found", Theme::help()));
            } else {
                let selected = (!input_focused).then_some(view.selected_row);
                lines.extend(grid_lines(session, view.visible_range(session), selected));
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn results_summary(session: &Session) -> String {
    let rows = row_count_display(session.filtered_rows.len());
    match &session.last_query {
        Some(q) => format!("{} returned ({} ms)", rows, q.execution_time_ms),
        None => format!("{} returned", rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::QueryResult;

    fn one_row_session() -> Session {
        let mut session = Session::new();
        session.set_query_result(
            "SELECT name FROM users".to_string(),
            QueryResult::success(
                "SELECT name FROM users".to_string(),
                vec!["name".to_string()],
                vec![vec!["alice".to_string()]],
                4,
            ),
        );
        session
    }

    #[test]
    fn summary_uses_singular_and_timing() {
        assert_eq!(results_summary(&one_row_session()), "1 row returned (4 ms)");
    }

    #[test]
    fn summary_without_query_omits_timing() {
        let session = Session::with_table_page(&["t"], 0, &["x"], Vec::new(), 0);

        assert_eq!(results_summary(&session), "0 rows returned");
    }
}
