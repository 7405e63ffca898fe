use ratatui::style::{Color, Modifier, Style};

/// Base color palette
pub struct Palette;

impl Palette {
    pub const SNOW: Color = Color::Rgb(0xfa, 0xfa, 0xfa);
    pub const GRAPE: Color = Color::Rgb(0x7d, 0x56, 0xf4);
    pub const BUBBLEGUM: Color = Color::Rgb(0xf2, 0x5d, 0x94);
    pub const SLATE: Color = Color::Rgb(0x62, 0x62, 0x62);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    pub const TITLE_FG: Color = Palette::SNOW;
    pub const TITLE_BG: Color = Palette::GRAPE;

    pub const SELECTED_FG: Color = Palette::SNOW;
    pub const SELECTED_BG: Color = Palette::BUBBLEGUM;

    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_SUCCESS: Color = Color::Green;

    pub const TEXT_SECONDARY: Color = Palette::SLATE;
    pub const TEXT_ACCENT: Color = Palette::GRAPE;

    pub const CARET_FG: Color = Palette::SNOW;
    pub const CARET_BG: Color = Palette::GRAPE;

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TITLE_FG)
            .bg(Self::TITLE_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::SELECTED_FG)
            .bg(Self::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn header() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}
