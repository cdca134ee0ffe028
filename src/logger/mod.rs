//! Append-only logger over two fixed files, one for routine messages and one
//! for errors.
//!
//! Every call opens its file, appends one line and closes it again; nothing is
//! buffered between calls. Missing files are created with a header line, and
//! the log directory is created on first use.
//!
//! The logger takes no locks. Each line goes out as a single append, which
//! POSIX keeps intact for small writes, but several processes writing the same
//! file are not otherwise coordinated.

mod file;
pub mod timestamp;

use crate::config::LogPaths;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use timestamp::stamp;

/// Which file a message lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogDestination {
    GeneralLog,
    ErrorLog,
}

impl LogDestination {
    /// The file this destination writes to under `paths`
    pub fn path(self, paths: &LogPaths) -> &Path {
        match self {
            LogDestination::GeneralLog => paths.general_log(),
            LogDestination::ErrorLog => paths.error_log(),
        }
    }
}

impl fmt::Display for LogDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogDestination::GeneralLog => write!(f, "general"),
            LogDestination::ErrorLog => write!(f, "error"),
        }
    }
}

/// Writes timestamped lines to the general and error logs.
///
/// Failures never propagate: each operation returns `true` when its line was
/// written and `false` otherwise. Failed writes to the general log leave a
/// note in the error log.
#[derive(Debug, Clone)]
pub struct FileLogger {
    paths: LogPaths,
}

impl FileLogger {
    pub fn new(paths: LogPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &LogPaths {
        &self.paths
    }

    /// Print the timestamped message to stdout and append it to the general log.
    ///
    /// Only the file write decides the result.
    pub fn to_console(&self, message: &str) -> bool {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.echo(&mut out, message)
    }

    /// [`to_console`](Self::to_console) against any writer
    pub fn echo<W: Write>(&self, out: &mut W, message: &str) -> bool {
        let line = stamp(message);

        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::debug!("Console echo failed: {}", e);
        }

        self.write_line(self.paths.general_log(), &line).is_ok()
    }

    /// Append the timestamped message to the general log
    pub fn to_general_log(&self, message: &str) -> bool {
        self.log(LogDestination::GeneralLog, message)
    }

    /// Append the timestamped message to the error log
    pub fn to_error_log(&self, message: &str) -> bool {
        self.log(LogDestination::ErrorLog, message)
    }

    /// Append the timestamped message to `destination`
    pub fn log(&self, destination: LogDestination, message: &str) -> bool {
        let target = destination.path(&self.paths);
        self.write_line(target, &stamp(message)).is_ok()
    }
}
