mod process;
mod signal;

pub use process::{join_tokens, Process, ProcessScanner, CMDLINE_CAPACITY};
pub use signal::{KillSender, SignalEntry, SignalSender, SIGNALS, SIGTERM};
