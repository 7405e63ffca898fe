use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a grid cell.
pub const CELL_WIDTH: usize = 15;
/// Row detail values longer than this wrap onto indented lines.
pub const WRAP_WIDTH: usize = 50;
pub const CONTINUATION_INDENT: &str = "    ";
pub const CELL_SEPARATOR: &str = " | ";
const ELLIPSIS: &str = "...";

/// Control characters would corrupt the terminal grid; show them as spaces.
pub fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Cuts `s` to at most `max_width` columns, ending in `...` when cut.
pub fn truncate_cell(s: &str, max_width: usize) -> String {
    let s = sanitize(s);
    if s.width() <= max_width {
        return s;
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Left-aligns `s` in a field of `width` columns.
pub fn pad_cell(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// One grid line: every cell truncated and padded to `CELL_WIDTH`.
pub fn format_grid_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| pad_cell(&truncate_cell(c.as_ref(), CELL_WIDTH), CELL_WIDTH))
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

pub fn grid_separator(columns: usize) -> String {
    vec!["-".repeat(CELL_WIDTH); columns].join("-+-")
}

/// Greedy word wrap. Words longer than `width` are split hard.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let text = sanitize(text);
    if width == 0 || text.split_whitespace().next().is_none() {
        return vec![text];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        while word.width() > width {
            let (head, tail) = split_at_width(&word, width);
            lines.push(head);
            word = tail;
        }
        current = word;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_at_width(s: &str, width: usize) -> (String, String) {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && i > 0 {
            return (s[..i].to_string(), s[i..].to_string());
        }
        used += w;
    }
    (s.to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("short", "short")]
    #[case("exactly15chars!", "exactly15chars!")]
    #[case("this value is far too long", "this value i...")]
    fn truncates_to_cell_width(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(truncate_cell(input, CELL_WIDTH), expected);
    }

    #[test]
    fn truncation_respects_wide_characters() {
        let out = truncate_cell("日本語のテキストです", 10);

        assert_eq!(out, "日本語...");
        assert!(out.width() <= 10);
    }

    #[test]
    fn control_characters_are_blanked() {
        assert_eq!(sanitize("a\tb\nc"), "a b c");
    }

    #[test]
    fn grid_row_pads_and_joins() {
        let row = format_grid_row(&["1", "alice"]);

        assert_eq!(row, format!("1{} | alice{}", " ".repeat(14), " ".repeat(10)));
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap_text("the quick brown fox jumps", 10);

        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        let lines = wrap_text("abcdefghijkl", 5);

        assert_eq!(lines, vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn wrap_keeps_blank_text() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
