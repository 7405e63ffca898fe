use std::ops::Range;

use ratatui::text::Line;

use super::text_utils::{format_grid_row, grid_separator};
use crate::app::session::Session;
use crate::theme::Theme;

/// Header, separator and the rows in `window` of the session's filtered rows.
pub fn grid_lines(
    session: &Session,
    window: Range<usize>,
    selected: Option<usize>,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(format_grid_row(&session.columns), Theme::header()),
        Line::styled(grid_separator(session.columns.len()), Theme::help()),
    ];

    for i in window {
        let Some(row) = session.filtered_rows.get(i) else {
            break;
        };
        let text = format_grid_row(row);
        if selected == Some(i) {
            lines.push(Line::styled(text, Theme::selected()));
        } else {
            lines.push(Line::from(text));
        }
    }
    lines
}
