use crate::config::LogPaths;
use crate::error::Result;
use crate::utils::path::{absolutize, expand_home};
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Build the log locations from the `--log-dir` flag, or the built-in
/// `/var/log/filelog` when it is absent.
pub fn resolve_log_paths(log_dir: Option<&Path>) -> Result<LogPaths> {
    match log_dir {
        Some(dir) => {
            let dir = absolutize(&expand_home(dir)?)?;
            Ok(LogPaths::in_dir(dir))
        }
        None => Ok(LogPaths::default()),
    }
}

/// Setup diagnostic tracing.
/// - Default: warnings from the logger itself go to stderr
/// - With --verbose: debug output, including directory and file creation
/// - With --quiet: no tracing output at all
///
/// RUST_LOG overrides the level in the first two cases.
pub fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        // Nothing installed: tracing macros become no-ops
        return Ok(());
    }

    let default_log_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_level));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr) // stdout belongs to `console`
            .with_target(verbose)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .without_time(), // logged lines already carry their own stamp
    );

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ERROR_LOG_FILE, GENERAL_LOG_FILE, LOG_DIR};
    use tempfile::TempDir;

    #[test]
    fn test_resolve_default_paths() {
        let paths = resolve_log_paths(None).unwrap();
        assert_eq!(paths.dir(), Path::new(LOG_DIR));
    }

    #[test]
    fn test_resolve_explicit_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = resolve_log_paths(Some(temp_dir.path())).unwrap();

        assert_eq!(paths.dir(), temp_dir.path());
        assert_eq!(paths.general_log(), temp_dir.path().join(GENERAL_LOG_FILE));
        assert_eq!(paths.error_log(), temp_dir.path().join(ERROR_LOG_FILE));
    }

    #[test]
    fn test_resolve_relative_dir_is_absolute() {
        let paths = resolve_log_paths(Some(Path::new("some/logs"))).unwrap();
        assert!(paths.dir().is_absolute());
        assert!(paths.general_log().is_absolute());
    }
}
