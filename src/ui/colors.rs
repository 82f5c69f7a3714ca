//! Colour theme for the dashboard

use ratatui::style::{Color, Modifier, Style};

/// Colours for every element the renderer paints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // === Title bar ===
    pub title_fg: Color,
    pub title_bg: Color,

    // === Column header and rules ===
    pub header_fg: Color,
    pub header_bg: Color,
    pub rule: Color,

    // === Rows ===
    pub pid: Color,
    pub cmdline: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,

    // === Help block ===
    pub help_fg: Color,
    pub help_bg: Color,

    // === Key echo (^C) ===
    pub echo: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// 256-colour palette: red title, blue header, green selection
    pub fn default_theme() -> Self {
        Self {
            title_fg: Color::White,
            title_bg: Color::Indexed(1),

            header_fg: Color::White,
            header_bg: Color::Indexed(4),
            rule: Color::Blue,

            pid: Color::Cyan,
            cmdline: Color::Green,
            selection_fg: Color::Black,
            selection_bg: Color::Indexed(2),

            help_fg: Color::White,
            help_bg: Color::Indexed(4),

            echo: Color::Reset,
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.title_fg).bg(self.title_bg)
    }

    pub fn header(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg)
    }

    pub fn rule(&self) -> Style {
        Style::default().fg(self.rule)
    }

    pub fn help(&self) -> Style {
        Style::default().fg(self.help_fg).bg(self.help_bg)
    }

    /// Style of the code/pid field of a row
    pub fn row_key(&self, selected: bool) -> Style {
        if selected {
            self.selected_row()
        } else {
            Style::default().fg(self.pid)
        }
    }

    /// Style of the text part of a row
    pub fn row_text(&self, selected: bool) -> Style {
        if selected {
            self.selected_row()
        } else {
            Style::default().fg(self.cmdline)
        }
    }

    fn selected_row(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }
}
