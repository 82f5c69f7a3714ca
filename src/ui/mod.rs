pub mod colors;
mod footer;
mod process_list;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::ui::colors::Theme;

/// Digits reserved for the pid (or signal code) column
const KEY_DIGITS: usize = 7;

/// Terminal size for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBudget {
    pub rows: u16,
    pub cols: u16,
}

impl DisplayBudget {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// Lines a frame may use; the last row stays free for the key echo
    pub fn line_budget(&self) -> usize {
        usize::from(self.rows).saturating_sub(1)
    }
}

/// Lines of one frame. Anything pushed past the budget is dropped.
pub struct FrameLines {
    lines: Vec<Line<'static>>,
    budget: usize,
    width: usize,
}

impl FrameLines {
    pub fn new(budget: DisplayBudget) -> Self {
        let limit = budget.line_budget();
        Self {
            lines: Vec::with_capacity(limit),
            budget: limit,
            width: usize::from(budget.cols),
        }
    }

    /// Append a line; returns false once the budget is used up
    pub fn push(&mut self, line: Line<'static>) -> bool {
        if self.lines.len() >= self.budget {
            return false;
        }
        self.lines.push(line);
        true
    }

    pub fn remaining(&self) -> usize {
        self.budget - self.lines.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }
}

/// Build the lines of one frame and record the list windows into `app`
pub fn compose(app: &mut App, budget: DisplayBudget) -> Vec<Line<'static>> {
    let mut out = FrameLines::new(budget);
    process_list::draw(&mut out, app);
    footer::draw(&mut out, app);
    out.into_lines()
}

/// Draw the entire UI
pub fn draw(frame: &mut Frame, app: &mut App, budget: DisplayBudget, echo: Option<&str>) {
    let area = frame.area();
    let lines = compose(app, budget);

    let used = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(area.height);
    let body = Rect::new(area.x, area.y, area.width, used);
    frame.render_widget(Paragraph::new(lines), body);

    // Whatever a taller previous frame left below must go
    let below = Rect::new(area.x, area.y + used, area.width, area.height - used);
    frame.render_widget(Clear, below);

    if let Some(echo) = echo {
        let row = budget.rows.saturating_sub(1);
        if row < area.height {
            let echo_area = Rect::new(area.x, area.y + row, area.width, 1);
            let style = Style::default().fg(app.theme.echo);
            frame.render_widget(Paragraph::new(Span::styled(echo.to_string(), style)), echo_area);
        }
    }
}

/// Horizontal rule across the full width
fn rule(width: usize, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled("-".repeat(width), theme.rule()))
}

/// One list row: a right-aligned number field and centered text
fn row(key: impl std::fmt::Display, text: &str, width: usize, selected: bool, theme: &Theme) -> Line<'static> {
    let key = truncate_to_width(&format!("{:>KEY_DIGITS$}: ", key), width);
    let rest = width.saturating_sub(key.width());
    let text = center(&printable(text), rest);
    Line::from(vec![
        Span::styled(key, theme.row_key(selected)),
        Span::styled(text, theme.row_text(selected)),
    ])
}

/// Pad `text` to `width` columns, centered if it fits, else hard-truncate it
fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width > width {
        return truncate_to_width(text, width);
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Left-aligned `text` padded or cut to exactly `width` columns
fn fill(text: &str, width: usize) -> String {
    let mut line = truncate_to_width(text, width);
    let pad = width.saturating_sub(line.width());
    line.push_str(&" ".repeat(pad));
    line
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    // Cut by characters, not bytes
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

/// Control characters would move the cursor; show them as '?'
fn printable(s: &str) -> String {
    s.chars().map(|c| if c.is_control() { '?' } else { c }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_budget_reserves_last_row() {
        assert_eq!(DisplayBudget::new(24, 80).line_budget(), 23);
        assert_eq!(DisplayBudget::new(1, 80).line_budget(), 0);
        assert_eq!(DisplayBudget::new(0, 80).line_budget(), 0);
    }

    #[test]
    fn test_frame_lines_drops_past_budget() {
        let mut out = FrameLines::new(DisplayBudget::new(3, 10));
        assert!(out.push(Line::from("a")));
        assert!(out.push(Line::from("b")));
        assert!(!out.push(Line::from("c")));
        assert_eq!(out.remaining(), 0);
        assert_eq!(out.into_lines().len(), 2);
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("abcdef", 6), "abcdef");
        assert_eq!(center("abcdefgh", 6), "abcdef");
        assert_eq!(center("x", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // each CJK char is two columns wide
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn test_fill() {
        assert_eq!(fill("ab", 4), "ab  ");
        assert_eq!(fill("abcdef", 4), "abcd");
    }

    #[test]
    fn test_row_layout() {
        let theme = Theme::default();
        let line = row(42, "vim", 20, false, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "     42:     vim    ");
        assert_eq!(text.width(), 20);
    }

    #[test]
    fn test_row_in_narrow_terminal() {
        let theme = Theme::default();
        let line = row(42, "vim", 5, true, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "     ");
    }

    #[test]
    fn test_printable() {
        assert_eq!(printable("a\tb\x1b[2J"), "a?b?[2J");
    }
}
