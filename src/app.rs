use tracing::debug;

use crate::config::Config;
use crate::list::{Direction, ScrollList, Viewport};
use crate::system::{Process, ProcessScanner, SignalEntry, SignalSender, SIGNALS, SIGTERM};
use crate::ui::colors::Theme;

/// Which part of the screen owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Process list navigation
    Process,
    /// Signal selection menu
    Signal,
    /// Reserved, accepts every key as a no-op
    Search,
    /// Reserved, accepts every key as a no-op
    Sort,
}

/// Live scan results with scroll/selection state
pub type ProcessListModel = ScrollList<Process>;

/// The signal catalog with scroll/selection state
pub type SignalMenuModel = ScrollList<SignalEntry>;

/// Application state
pub struct App {
    /// Current color theme
    pub theme: Theme,
    /// Current focus
    pub focus: Focus,
    /// Processes from the latest scan
    pub processes: ProcessListModel,
    /// Signal menu over the fixed catalog
    pub signals: SignalMenuModel,
    /// Key-binding help visible below the list
    pub show_help: bool,
    /// Signal target (captured when the signal menu opens so a rescan can't change it)
    pub signal_target: Option<u32>,
    /// Process list position before the signal menu took rows away from it
    saved_viewport: Option<Viewport>,
    /// Process rows shown at most
    pub max_shown_processes: usize,
    /// Signal rows shown at most
    pub max_shown_signals: usize,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            theme: config.theme.clone(),
            focus: Focus::Process,
            processes: ScrollList::new(Vec::new(), config.max_shown_processes),
            signals: ScrollList::new(SIGNALS.to_vec(), config.max_shown_signals),
            show_help: config.show_help,
            signal_target: None,
            saved_viewport: None,
            max_shown_processes: config.max_shown_processes,
            max_shown_signals: config.max_shown_signals,
        }
    }

    /// Rescan and replace the process list
    pub fn refresh_processes(&mut self, scanner: &ProcessScanner) {
        self.set_processes(scanner.scan());
    }

    pub fn set_processes(&mut self, processes: Vec<Process>) {
        self.processes.replace(processes);
    }

    /// Get selected process
    pub fn selected_process(&self) -> Option<&Process> {
        self.processes.current()
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn move_process_selection(&mut self, direction: Direction) {
        self.processes.navigate(direction);
    }

    pub fn move_signal_selection(&mut self, direction: Direction) {
        self.signals.navigate(direction);
    }

    /// Enter the signal menu and capture the target process.
    ///
    /// Does nothing when no process is selected.
    pub fn open_signal_menu(&mut self) {
        if let Some(pid) = self.selected_process().map(|p| p.pid) {
            self.signal_target = Some(pid);
            self.saved_viewport = Some(self.processes.viewport());
            self.signals.reset();
            self.focus = Focus::Signal;
        } else {
            self.focus = Focus::Process;
        }
    }

    /// Leave the signal menu without sending anything
    pub fn close_signal_menu(&mut self) {
        self.signal_target = None;
        if let Some(viewport) = self.saved_viewport.take() {
            self.processes.restore_viewport(viewport);
        }
        self.focus = Focus::Process;
    }

    /// Send SIGTERM to the selected process right away
    pub fn terminate_selected(&mut self, sender: &mut dyn SignalSender) {
        if let Some(pid) = self.selected_process().map(|p| p.pid) {
            deliver(sender, pid, SIGTERM);
        }
    }

    /// Send the highlighted signal to the captured target and close the menu
    pub fn send_selected_signal(&mut self, sender: &mut dyn SignalSender) {
        if let (Some(pid), Some(signal)) = (self.signal_target, self.signals.current().copied()) {
            deliver(sender, pid, signal);
        }
        self.close_signal_menu();
    }
}

fn deliver(sender: &mut dyn SignalSender, pid: u32, signal: SignalEntry) {
    match sender.send(pid, signal.code) {
        Ok(()) => debug!(pid, signal = signal.name, "signal sent"),
        Err(e) => debug!(pid, signal = signal.name, error = %e, "signal not delivered"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    #[derive(Default)]
    struct Recorder(Vec<(u32, i32)>);

    impl SignalSender for Recorder {
        fn send(&mut self, pid: u32, code: i32) -> Result<()> {
            self.0.push((pid, code));
            Ok(())
        }
    }

    fn app_with(pids: &[u32]) -> App {
        let mut app = App::new(&Config::default());
        app.set_processes(pids.iter().map(|&pid| Process::new(pid, format!("proc{pid}"))).collect());
        app
    }

    #[test]
    fn test_new_app_defaults() {
        let app = App::new(&Config::default());
        assert_eq!(app.focus, Focus::Process);
        assert!(app.show_help);
        assert_eq!(app.signals.len(), SIGNALS.len());
        assert!(app.selected_process().is_none());
    }

    #[test]
    fn test_open_signal_menu_captures_pid_and_resets_menu() {
        let mut app = app_with(&[10, 20, 30]);
        app.move_process_selection(Direction::Down);
        app.signals.navigate(Direction::Down);
        app.signals.navigate(Direction::Down);

        app.open_signal_menu();
        assert_eq!(app.focus, Focus::Signal);
        assert_eq!(app.signal_target, Some(20));
        assert_eq!(app.signals.selected_offset(), 0);
        assert_eq!(app.signals.scroll_offset(), 0);
    }

    #[test]
    fn test_open_signal_menu_without_processes_stays_in_list() {
        let mut app = app_with(&[]);
        app.open_signal_menu();
        assert_eq!(app.focus, Focus::Process);
        assert!(app.signal_target.is_none());
    }

    #[test]
    fn test_terminate_selected_sends_sigterm() {
        let mut app = app_with(&[5, 6]);
        let mut rec = Recorder::default();
        app.move_process_selection(Direction::Down);
        app.terminate_selected(&mut rec);
        assert_eq!(rec.0, vec![(6, 15)]);
    }

    #[test]
    fn test_terminate_with_empty_list_sends_nothing() {
        let mut app = app_with(&[]);
        let mut rec = Recorder::default();
        app.terminate_selected(&mut rec);
        assert!(rec.0.is_empty());
    }

    #[test]
    fn test_send_selected_signal_uses_captured_target() {
        let mut app = app_with(&[100, 200]);
        let mut rec = Recorder::default();
        app.open_signal_menu();
        app.set_processes(vec![Process::new(999, "replacement")]);
        app.send_selected_signal(&mut rec);

        assert_eq!(rec.0, vec![(100, 1)]);
        assert_eq!(app.focus, Focus::Process);
        assert!(app.signal_target.is_none());
    }

    #[test]
    fn test_closing_menu_restores_process_viewport() {
        let pids: Vec<u32> = (100..130).collect();
        let mut app = app_with(&pids);
        for _ in 0..19 {
            app.move_process_selection(Direction::Down);
        }
        let before = app.processes.viewport();

        app.open_signal_menu();
        // the menu needs rows, so the list window shrinks while it is open
        app.processes.set_window(9);
        assert_eq!(app.selected_process().map(|p| p.pid), Some(119));

        app.close_signal_menu();
        assert_eq!(app.processes.viewport(), before);
        assert_eq!(app.selected_process().map(|p| p.pid), Some(119));
    }
}
