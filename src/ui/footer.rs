use ratatui::text::{Line, Span};

use super::{fill, row, rule, FrameLines};
use crate::app::{App, Focus};

const HELP_LINES: &[&str] = &[
    "K/J      -> Select Up/Down",
    "H        -> Toggle this help text",
    "Q/CTRL+C -> Quit",
    "T        -> Send SIGTERM to selected proc",
    "S        -> Send signal to selected proc (opens signal selection menu)",
    "ESC      -> Cancel send signal",
    "ENTER    -> Send the highlighted signal",
];

/// Rule under the list, then the signal menu or the key help
pub fn draw(out: &mut FrameLines, app: &mut App) {
    let width = out.width();
    out.push(rule(width, &app.theme));

    if app.focus == Focus::Signal {
        let window = app.max_shown_signals.min(out.remaining());
        app.signals.set_window(window);
        let theme = &app.theme;
        for (signal, selected) in app.signals.visible() {
            if !out.push(row(signal.code, signal.name, width, selected, theme)) {
                break;
            }
        }
    } else if app.show_help {
        let style = app.theme.help();
        for text in HELP_LINES {
            if !out.push(Line::from(Span::styled(fill(text, width), style))) {
                break;
            }
        }
    }
}
