use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::key_text;
use super::status_message;
use crate::app::input_mode::InputMode;
use crate::app::keybindings::{GLOBAL_KEYS, KeyBinding, bindings_for};
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct Footer;

impl Footer {
    /// One hint line, plus the full listing while help is expanded.
    pub fn height(state: &AppState) -> u16 {
        if state.show_full_help && state.input_mode() != InputMode::Fatal {
            let listed = bindings_for(&state.view).len() + GLOBAL_KEYS.len();
            1 + listed as u16
        } else {
            1
        }
    }

    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = Vec::new();

        if let Some(message) = &state.messages.current {
            lines.push(status_message::render_line(message));
        } else {
            lines.push(Self::hint_line(state));
        }

        if Self::height(state) > 1 {
            lines.extend(
                bindings_for(&state.view)
                    .iter()
                    .chain(GLOBAL_KEYS)
                    .map(Self::help_line),
            );
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn hint_line(state: &AppState) -> Line<'static> {
        let mode_chip = Span::styled(
            format!(" {} ", state.view.mode().label()),
            Style::default()
                .fg(Theme::TITLE_FG)
                .bg(Theme::TITLE_BG)
                .add_modifier(Modifier::BOLD),
        );
        let mut spans = vec![mode_chip, Span::raw(" ")];

        let hints: Vec<(&str, &str)> = bindings_for(&state.view)
            .iter()
            .chain(GLOBAL_KEYS)
            .map(KeyBinding::as_hint)
            .collect();
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", Theme::help()));
            }
            spans.push(key_text(key));
            spans.push(Span::styled(format!(" {}", desc), Theme::help()));
        }

        Line::from(spans)
    }

    fn help_line(binding: &KeyBinding) -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            key_text(&format!("{:<24}", binding.key)),
            Span::styled(binding.description.to_string(), Theme::help()),
        ])
    }
}
