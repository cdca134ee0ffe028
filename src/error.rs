use crate::logger::LogDestination;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilelogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Could not write to the {destination} log")]
    LogFailed { destination: LogDestination },
}

impl FilelogError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FilelogError::Io(_) | FilelogError::LogFailed { .. } => exitcode::IOERR,
            FilelogError::PathError(_) => exitcode::CONFIG,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilelogError>;

/// Why a single write attempt failed. Never leaves the logger: the public
/// operations reduce it to `false` after reporting it through `tracing`.
#[derive(Error, Debug)]
pub(crate) enum LogFailure {
    #[error("failed to create log directory {}: {}", path.display(), source)]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create {}: {}", path.display(), source)]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write to {}: {}", path.display(), source)]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let failed = FilelogError::LogFailed {
            destination: LogDestination::ErrorLog,
        };
        assert_eq!(failed.exit_code(), exitcode::IOERR);

        let io_err = FilelogError::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(io_err.exit_code(), exitcode::IOERR);

        let path = FilelogError::PathError("no home".to_string());
        assert_eq!(path.exit_code(), exitcode::CONFIG);
    }

    #[test]
    fn test_log_failed_message_names_destination() {
        let err = FilelogError::LogFailed {
            destination: LogDestination::GeneralLog,
        };
        assert_eq!(err.to_string(), "Could not write to the general log");
    }

    #[test]
    fn test_failure_message_includes_path() {
        let failure = LogFailure::FileWrite {
            path: PathBuf::from("/var/log/filelog/general.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = failure.to_string();
        assert!(msg.starts_with("failed to write to /var/log/filelog/general.log"));
        assert!(msg.ends_with("denied"));
    }
}
