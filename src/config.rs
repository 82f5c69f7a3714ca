//! Runtime settings
//!
//! Nothing is read from disk or the environment; every field has a fixed default.

use std::path::PathBuf;
use std::time::Duration;

use crate::ui::colors::Theme;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Longest wait for a key before a frame is redrawn anyway
    pub poll_interval: Duration,
    /// Process rows shown at most, even on tall terminals
    pub max_shown_processes: usize,
    /// Signal menu rows shown at most
    pub max_shown_signals: usize,
    /// Whether the key-binding help starts visible
    pub show_help: bool,
    /// Directory holding one entry per process
    pub proc_root: PathBuf,
    /// Colours
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            max_shown_processes: 20,
            max_shown_signals: 10,
            show_help: true,
            proc_root: PathBuf::from("/proc"),
            theme: Theme::default(),
        }
    }
}
