use super::timestamp::stamp;
use super::FileLogger;
use crate::error::LogFailure;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

const FAILED_CREATE: &str = "Failed to create ";
const FAILED_WRITE: &str = "Failed to write to ";

impl FileLogger {
    /// Append `line` verbatim to `target`, creating the file first if needed.
    ///
    /// A failed write is mirrored to the error log unless `target` is the
    /// error log itself.
    pub(super) fn write_line(&self, target: &Path, line: &str) -> Result<(), LogFailure> {
        if !target.is_file() {
            self.create_log_file(target)?;
        }

        append(target, line).map_err(|source| {
            let failure = LogFailure::FileWrite {
                path: target.to_path_buf(),
                source,
            };
            tracing::warn!("{}", failure);
            self.report_failure(FAILED_WRITE, target);
            failure
        })
    }

    /// Create `target` with a header line, creating the log directory first.
    fn create_log_file(&self, target: &Path) -> Result<(), LogFailure> {
        let dir = self.paths.dir();
        if !dir.is_dir() {
            fs::create_dir_all(dir).map_err(|source| {
                let failure = LogFailure::DirectoryCreate {
                    path: dir.to_path_buf(),
                    source,
                };
                tracing::warn!("{}", failure);
                failure
            })?;
            tracing::debug!("Created log directory {}", dir.display());
        }

        let header = stamp(&format!("{} created.", target.display()));
        write_header(target, &header).map_err(|source| {
            let failure = LogFailure::FileCreate {
                path: target.to_path_buf(),
                source,
            };
            tracing::warn!("{}", failure);
            self.report_failure(FAILED_CREATE, target);
            failure
        })?;

        tracing::debug!("Created log file {}", target.display());
        Ok(())
    }

    /// Best-effort note in the error log about `target`.
    ///
    /// Skipped when `target` is the error log path, so a broken error log
    /// ends the chain instead of recursing.
    fn report_failure(&self, what: &str, target: &Path) {
        let error_log = self.paths.error_log();
        if target == error_log {
            return;
        }

        let note = stamp(&format!("{}{}", what, target.display()));
        // Outcome already traced inside write_line
        let _ = self.write_line(error_log, &note);
    }
}

/// Truncate-or-create `path` and write the header line
fn write_header(path: &Path, header: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(format!("{}\n", header).as_bytes())?;
    file.flush()
}

/// Open `path` for appending, write one line, close
fn append(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    // One write per line keeps concurrent O_APPEND writers from splitting it
    file.write_all(format!("{}\n", line).as_bytes())?;
    file.flush()
}
