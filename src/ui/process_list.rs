use ratatui::text::{Line, Span};

use super::{center, row, rule, FrameLines, KEY_DIGITS};
use crate::app::{App, Focus};

/// Rows above the first process: title, column header and rule
const HEAD_ROWS: usize = 3;

/// Title, column header and the window of process rows.
///
/// Sizes the process window from the rows left in `out`. An open signal
/// menu keeps its rule and rows; the list still gets at least one row.
pub fn draw(out: &mut FrameLines, app: &mut App) {
    let width = out.width();
    let available = out.remaining().saturating_sub(HEAD_ROWS);
    let reserved = match app.focus {
        Focus::Signal => 1 + app.max_shown_signals.min(app.signals.len()),
        _ => 0,
    };
    let window = app
        .max_shown_processes
        .min(available.saturating_sub(reserved).max(available.min(1)));
    app.processes.set_window(window);

    let theme = &app.theme;
    let title = format!(
        "Currently running processes: {} | Processes shown: {}",
        app.processes.len(),
        app.processes.shown_count()
    );
    out.push(Line::from(Span::styled(center(&title, width), theme.title())));

    let key = format!("{:>KEY_DIGITS$} |", "PID");
    let key_width = key.len().min(width);
    let header = format!(
        "{}{}",
        &key[..key_width],
        center("CMDLINE", width - key_width)
    );
    out.push(Line::from(Span::styled(header, theme.header())));
    out.push(rule(width, theme));

    for (process, selected) in app.processes.visible() {
        if !out.push(row(process.pid, &process.cmdline, width, selected, theme)) {
            break;
        }
    }
}
