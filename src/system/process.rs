//! Process enumeration from a procfs-style directory

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// Longest command line kept per process, in bytes
pub const CMDLINE_CAPACITY: usize = 127;

/// Upper bound on how much of a cmdline record is read
const CMDLINE_READ_LIMIT: u64 = 4096;

/// A single process as seen by one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: u32,
    pub cmdline: String,
}

impl Process {
    /// Build a process entry, truncating the command line to [`CMDLINE_CAPACITY`]
    pub fn new(pid: u32, cmdline: impl Into<String>) -> Self {
        let mut cmdline = cmdline.into();
        truncate_bytes(&mut cmdline, CMDLINE_CAPACITY);
        Self { pid, cmdline }
    }
}

/// Reads processes and their command lines from a procfs root
#[derive(Debug, Clone)]
pub struct ProcessScanner {
    root: PathBuf,
}

impl Default for ProcessScanner {
    fn default() -> Self {
        Self::new("/proc")
    }
}

impl ProcessScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Enumerate every process whose cmdline record can be read.
    ///
    /// Processes that exit between enumeration and the read are skipped.
    /// Order is whatever the directory listing yields.
    pub fn scan(&self) -> Vec<Process> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(root = %self.root.display(), error = %e, "cannot list process root");
                return Vec::new();
            }
        };

        let mut processes = Vec::new();
        for entry in entries.flatten() {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            let Some(pid) = entry.file_name().to_str().and_then(parse_pid) else {
                continue;
            };
            match read_cmdline(&entry.path().join("cmdline")) {
                Some(cmdline) => processes.push(Process::new(pid, cmdline)),
                None => trace!(pid, "skipping vanished process"),
            }
        }
        processes
    }
}

/// Process directories are named by a positive pid that fits a `pid_t`
fn parse_pid(name: &str) -> Option<u32> {
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<i32>()
        .ok()
        .filter(|&pid| pid > 0)
        .map(|pid| pid as u32)
}

/// Read a cmdline record and join its NUL-separated tokens with spaces
fn read_cmdline(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut raw = Vec::new();
    file.take(CMDLINE_READ_LIMIT).read_to_end(&mut raw).ok()?;
    Some(join_tokens(&raw))
}

/// Join NUL-separated tokens with single spaces.
///
/// Trailing terminators are dropped; empty interior tokens are kept.
pub fn join_tokens(raw: &[u8]) -> String {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let raw = &raw[..end];
    if raw.is_empty() {
        return String::new();
    }
    raw.split(|&b| b == 0)
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate to at most `max` bytes without splitting a character
fn truncate_bytes(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_proc(entries: &[(&str, Option<&[u8]>)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, cmdline) in entries {
            let proc_dir = dir.path().join(name);
            fs::create_dir(&proc_dir).unwrap();
            if let Some(content) = cmdline {
                fs::write(proc_dir.join("cmdline"), content).unwrap();
            }
        }
        dir
    }

    fn scan_sorted(dir: &TempDir) -> Vec<Process> {
        let mut procs = ProcessScanner::new(dir.path()).scan();
        procs.sort_by_key(|p| p.pid);
        procs
    }

    #[test]
    fn test_join_tokens() {
        assert_eq!(join_tokens(b"/usr/bin/vim\0-R\0notes.txt\0"), "/usr/bin/vim -R notes.txt");
        assert_eq!(join_tokens(b"bash"), "bash");
        assert_eq!(join_tokens(b"a\0\0b\0"), "a  b");
        assert_eq!(join_tokens(b"sleep\0100\0\0\0"), "sleep 100");
        assert_eq!(join_tokens(b""), "");
        assert_eq!(join_tokens(b"\0\0"), "");
    }

    #[test]
    fn test_process_new_truncates() {
        let long = "x".repeat(300);
        let p = Process::new(1, long);
        assert_eq!(p.cmdline.len(), CMDLINE_CAPACITY);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 126 ASCII bytes then a 3-byte char straddling the limit
        let s = format!("{}€", "a".repeat(126));
        let p = Process::new(1, s);
        assert_eq!(p.cmdline.len(), 126);
        assert!(p.cmdline.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_scan_reads_cmdlines() {
        let dir = fake_proc(&[
            ("1", Some(b"/sbin/init\0splash\0")),
            ("42", Some(b"sleep\0100\0")),
        ]);
        let procs = scan_sorted(&dir);
        assert_eq!(
            procs,
            vec![Process::new(1, "/sbin/init splash"), Process::new(42, "sleep 100")]
        );
    }

    #[test]
    fn test_scan_skips_unreadable_and_non_pid_entries() {
        let dir = fake_proc(&[
            ("7", Some(b"kept\0")),
            ("8", None), // exited before its cmdline was read
            ("self", Some(b"not a pid\0")),
            ("sys", None),
        ]);
        fs::write(dir.path().join("123"), b"a file, not a directory").unwrap();

        let procs = scan_sorted(&dir);
        assert_eq!(procs, vec![Process::new(7, "kept")]);
    }

    #[test]
    fn test_scan_skips_pids_outside_pid_range() {
        let dir = fake_proc(&[
            ("0", Some(b"swapper\0")),
            ("2147483647", Some(b"highest\0")),
            ("2147483648", Some(b"too high\0")),
            ("4294967295", Some(b"wraps to -1\0")),
            ("-5", Some(b"negative\0")),
            ("+7", Some(b"signed\0")),
        ]);
        let procs = scan_sorted(&dir);
        assert_eq!(procs, vec![Process::new(2147483647, "highest")]);
    }

    #[test]
    fn test_scan_keeps_kernel_threads_with_empty_cmdline() {
        let dir = fake_proc(&[("2", Some(b""))]);
        let procs = scan_sorted(&dir);
        assert_eq!(procs, vec![Process::new(2, "")]);
    }

    #[test]
    fn test_scan_truncates_long_cmdlines() {
        let mut long = Vec::new();
        for _ in 0..100 {
            long.extend_from_slice(b"--flag\0");
        }
        let dir = fake_proc(&[("99", Some(&long))]);
        let procs = scan_sorted(&dir);
        assert_eq!(procs.len(), 1);
        assert_eq!(procs[0].cmdline.len(), CMDLINE_CAPACITY);
        assert!(procs[0].cmdline.starts_with("--flag --flag"));
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let scanner = ProcessScanner::new("/definitely/not/a/proc/root");
        assert!(scanner.scan().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_real_procfs_includes_self() {
        let me = std::process::id();
        let procs = ProcessScanner::default().scan();
        assert!(procs.iter().all(|p| p.cmdline.len() <= CMDLINE_CAPACITY));
        assert!(procs.iter().any(|p| p.pid == me));
    }
}
