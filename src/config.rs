use std::path::{Path, PathBuf};

/// Configuration constants for log locations
/// Directory holding both log files
pub const LOG_DIR: &str = "/var/log/filelog";

/// File name of the general log
pub const GENERAL_LOG_FILE: &str = "general.log";

/// File name of the error log
pub const ERROR_LOG_FILE: &str = "error.log";

/// Resolved locations of the log directory and its two files.
///
/// Built once at startup and handed to [`crate::FileLogger::new`]; the paths
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    dir: PathBuf,
    general_log: PathBuf,
    error_log: PathBuf,
}

impl LogPaths {
    /// Use explicit paths. The files are not required to live inside `dir`,
    /// but `dir` is the only directory that is created on demand.
    pub fn new(
        dir: impl Into<PathBuf>,
        general_log: impl Into<PathBuf>,
        error_log: impl Into<PathBuf>,
    ) -> Self {
        Self {
            dir: dir.into(),
            general_log: general_log.into(),
            error_log: error_log.into(),
        }
    }

    /// `general.log` and `error.log` inside `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let general_log = dir.join(GENERAL_LOG_FILE);
        let error_log = dir.join(ERROR_LOG_FILE);
        Self {
            dir,
            general_log,
            error_log,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn general_log(&self) -> &Path {
        &self.general_log
    }

    pub fn error_log(&self) -> &Path {
        &self.error_log
    }
}

impl Default for LogPaths {
    fn default() -> Self {
        Self::in_dir(LOG_DIR)
    }
}
