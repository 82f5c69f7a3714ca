use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus};
use crate::list::Direction;
use crate::system::SignalSender;

/// What a key press does, decided before any state is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    ToggleHelp,
    MoveProcess(Direction),
    MoveSignal(Direction),
    /// SIGTERM to the selected process
    Terminate,
    OpenSignalMenu,
    CloseSignalMenu,
    /// Highlighted signal to the captured target
    SendSignal,
}

/// Wait up to `timeout` for the next key press.
///
/// `Ok(None)` means nothing was pressed; resize and other events count as nothing.
pub fn next_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Ctrl+C arrives as a key because raw mode turns off signal generation
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// The dispatch table: focus × key → (next focus, effect)
pub fn transition(focus: Focus, key: &KeyEvent) -> (Focus, Effect) {
    if is_interrupt(key) || matches!(key.code, KeyCode::Char('q' | 'Q')) {
        return (focus, Effect::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return (focus, Effect::None);
    }

    match focus {
        Focus::Process => process_keys(key.code),
        Focus::Signal => signal_keys(key.code),
        Focus::Search | Focus::Sort => (focus, Effect::None),
    }
}

fn process_keys(code: KeyCode) -> (Focus, Effect) {
    let effect = match code {
        KeyCode::Char('h' | 'H') => Effect::ToggleHelp,
        KeyCode::Char('k' | 'K') => Effect::MoveProcess(Direction::Up),
        KeyCode::Char('j' | 'J') => Effect::MoveProcess(Direction::Down),
        KeyCode::Char('t' | 'T') => Effect::Terminate,
        KeyCode::Char('s' | 'S') => return (Focus::Signal, Effect::OpenSignalMenu),
        _ => Effect::None,
    };
    (Focus::Process, effect)
}

fn signal_keys(code: KeyCode) -> (Focus, Effect) {
    match code {
        KeyCode::Esc => (Focus::Process, Effect::CloseSignalMenu),
        KeyCode::Char('k' | 'K') => (Focus::Signal, Effect::MoveSignal(Direction::Up)),
        KeyCode::Char('j' | 'J') => (Focus::Signal, Effect::MoveSignal(Direction::Down)),
        KeyCode::Enter => (Focus::Process, Effect::SendSignal),
        _ => (Focus::Signal, Effect::None),
    }
}

/// Handle keyboard events. Returns true if the app should quit.
pub fn handle_key_event(app: &mut App, key: KeyEvent, sender: &mut dyn SignalSender) -> bool {
    // Only handle key press events, ignore release and repeat
    if key.kind != KeyEventKind::Press {
        return false;
    }

    let (next, effect) = transition(app.focus, &key);
    app.focus = next;

    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::ToggleHelp => app.toggle_help(),
        Effect::MoveProcess(direction) => app.move_process_selection(direction),
        Effect::MoveSignal(direction) => app.move_signal_selection(direction),
        Effect::Terminate => app.terminate_selected(sender),
        Effect::OpenSignalMenu => app.open_signal_menu(),
        Effect::CloseSignalMenu => app.close_signal_menu(),
        Effect::SendSignal => app.send_selected_signal(sender),
    }
    false
}
