//! Signal catalog and delivery

use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tracing::debug;

use crate::error::{Error, Result};

/// A nameable signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalEntry {
    pub name: &'static str,
    pub code: i32,
}

const fn entry(name: &'static str, signal: Signal) -> SignalEntry {
    SignalEntry {
        name,
        code: signal as i32,
    }
}

/// Signals offered in the signal menu (Linux numbering order)
pub const SIGNALS: &[SignalEntry] = &[
    entry("SIGHUP", Signal::SIGHUP),
    entry("SIGINT", Signal::SIGINT),
    entry("SIGQUIT", Signal::SIGQUIT),
    entry("SIGILL", Signal::SIGILL),
    entry("SIGTRAP", Signal::SIGTRAP),
    entry("SIGABRT", Signal::SIGABRT),
    entry("SIGBUS", Signal::SIGBUS),
    entry("SIGFPE", Signal::SIGFPE),
    entry("SIGKILL", Signal::SIGKILL),
    entry("SIGUSR1", Signal::SIGUSR1),
    entry("SIGSEGV", Signal::SIGSEGV),
    entry("SIGUSR2", Signal::SIGUSR2),
    entry("SIGPIPE", Signal::SIGPIPE),
    entry("SIGALRM", Signal::SIGALRM),
    entry("SIGTERM", Signal::SIGTERM),
    entry("SIGCHLD", Signal::SIGCHLD),
    entry("SIGCONT", Signal::SIGCONT),
    entry("SIGSTOP", Signal::SIGSTOP),
    entry("SIGTSTP", Signal::SIGTSTP),
    entry("SIGTTIN", Signal::SIGTTIN),
    entry("SIGTTOU", Signal::SIGTTOU),
    entry("SIGURG", Signal::SIGURG),
    entry("SIGXCPU", Signal::SIGXCPU),
    entry("SIGXFSZ", Signal::SIGXFSZ),
    entry("SIGVTALRM", Signal::SIGVTALRM),
    entry("SIGPROF", Signal::SIGPROF),
    entry("SIGWINCH", Signal::SIGWINCH),
    entry("SIGSYS", Signal::SIGSYS),
];

/// Signal sent by the quick-terminate key
pub const SIGTERM: SignalEntry = entry("SIGTERM", Signal::SIGTERM);

/// Something that can deliver a signal to a process.
///
/// Delivery is fire-and-forget: `Ok` only means the request was accepted.
pub trait SignalSender {
    fn send(&mut self, pid: u32, code: i32) -> Result<()>;
}

/// Delivers signals with kill(2)
#[derive(Debug, Default, Clone, Copy)]
pub struct KillSender;

impl SignalSender for KillSender {
    fn send(&mut self, pid: u32, code: i32) -> Result<()> {
        // kill(2) treats 0 and negative pids as process groups
        let target = i32::try_from(pid)
            .ok()
            .filter(|&raw| raw > 0)
            .ok_or(Error::InvalidPid(pid))?;
        let sig = Signal::try_from(code).map_err(|_| Error::UnknownSignal(code))?;
        debug!(pid, signal = %sig, "sending signal");
        signal::kill(Pid::from_raw(target), sig)
            .map_err(|source| Error::Signal { pid, code, source })
    }
}
