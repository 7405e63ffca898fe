use ratatui::style::Style;
use ratatui::text::Span;

use crate::app::text_input::TextInput;
use crate::theme::Theme;

use super::text_utils::sanitize;

/// Spans for an input buffer. With `show_caret`, the character under the
/// caret is highlighted, or a trailing `|` is drawn when the caret is at the
/// end.
pub fn input_spans(input: &TextInput, show_caret: bool) -> Vec<Span<'static>> {
    if !show_caret {
        return vec![Span::raw(sanitize(input.text()))];
    }

    let (before, at, after) = input.split_at_cursor();
    let caret_style = Style::default().fg(Theme::CARET_FG).bg(Theme::CARET_BG);
    let mut spans = vec![Span::raw(sanitize(before))];
    match at {
        Some(c) => {
            spans.push(Span::styled(sanitize(&c.to_string()), caret_style));
            spans.push(Span::raw(sanitize(after)));
        }
        None => spans.push(Span::raw("|")),
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::text_input::TextEdit;

    fn text_of(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn caret_at_end_draws_bar() {
        let input = TextInput::new("abc");

        assert_eq!(text_of(&input_spans(&input, true)), "abc|");
    }

    #[test]
    fn caret_inside_highlights_character() {
        let mut input = TextInput::new("abc");
        input.apply(TextEdit::Left);

        let spans = input_spans(&input, true);

        assert_eq!(text_of(&spans), "abc");
        assert_eq!(spans[1].content, "c");
        assert_eq!(spans[1].style.bg, Some(Theme::CARET_BG));
    }

    #[test]
    fn hidden_caret_is_plain_text() {
        let input = TextInput::new("abc");

        assert_eq!(text_of(&input_spans(&input, false)), "abc");
    }
}
