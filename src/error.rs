//! Error types for sigtop

use std::io;

use thiserror::Error;

/// Errors that can end the dashboard or a single operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Standard input is not an interactive terminal.
    #[error("standard input is not a terminal")]
    NotATerminal,

    /// Terminal attributes could not be read or switched to raw mode.
    #[error("cannot read terminal attributes: {0}")]
    TerminalAttributes(#[source] io::Error),

    /// Reading the next input event failed while the dashboard was running.
    #[error("failed to read input: {0}")]
    InputRead(#[source] io::Error),

    /// The kernel rejected a signal delivery.
    #[error("failed to send signal {code} to process {pid}: {source}")]
    Signal {
        pid: u32,
        code: i32,
        #[source]
        source: nix::errno::Errno,
    },

    /// The pid would address a process group or every process rather than one process.
    #[error("invalid process id {0}")]
    InvalidPid(u32),

    /// The signal number is not known on this platform.
    #[error("unknown signal number {0}")]
    UnknownSignal(i32),

    /// Output or other terminal I/O failure.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Startup failures that happen before the terminal is touched.
    pub fn is_environment(&self) -> bool {
        matches!(self, Error::NotATerminal | Error::TerminalAttributes(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
