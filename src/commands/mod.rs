use crate::error::{FilelogError, Result};
use crate::logger::{FileLogger, LogDestination};
use crate::output::Output;

/// How a message should be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// stdout plus the general log
    Console,
    To(LogDestination),
}

impl Delivery {
    /// The file the message ends up in
    pub fn destination(self) -> LogDestination {
        match self {
            Delivery::Console => LogDestination::GeneralLog,
            Delivery::To(destination) => destination,
        }
    }
}

/// Log one message and report the outcome.
/// Message words are joined with single spaces.
pub fn handle_log(
    logger: &FileLogger,
    delivery: Delivery,
    words: &[String],
    output: &mut Output,
) -> Result<()> {
    let message = words.join(" ");
    let destination = delivery.destination();
    let path = destination.path(logger.paths());

    tracing::debug!("Logging {} bytes to {}", message.len(), path.display());

    let written = match delivery {
        Delivery::Console => logger.to_console(&message),
        Delivery::To(destination) => logger.log(destination, &message),
    };

    if written {
        output.logged(destination, path)?;
        Ok(())
    } else {
        output.log_failed(destination, path)?;
        Err(FilelogError::LogFailed { destination })
    }
}

/// Print the resolved log locations
pub fn handle_paths(logger: &FileLogger, output: &mut Output) -> Result<()> {
    output.paths(logger.paths())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogPaths;
    use std::fs;
    use tempfile::TempDir;

    fn words(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_delivery_destination() {
        assert_eq!(Delivery::Console.destination(), LogDestination::GeneralLog);
        assert_eq!(
            Delivery::To(LogDestination::ErrorLog).destination(),
            LogDestination::ErrorLog
        );
    }

    #[test]
    fn test_handle_log_joins_words() {
        let temp_dir = TempDir::new().unwrap();
        let logger = FileLogger::new(LogPaths::in_dir(temp_dir.path()));
        let mut output = Output::new(true, false);

        handle_log(
            &logger,
            Delivery::To(LogDestination::ErrorLog),
            &words("disk is full"),
            &mut output,
        )
        .unwrap();

        let content = fs::read_to_string(logger.paths().error_log()).unwrap();
        assert!(content.lines().last().unwrap().ends_with(" : disk is full"));
    }

    #[test]
    fn test_handle_log_failure_maps_to_error() {
        let temp_dir = TempDir::new().unwrap();
        let logger = FileLogger::new(LogPaths::in_dir(temp_dir.path()));
        fs::create_dir(logger.paths().general_log()).unwrap();
        let mut output = Output::new(true, false);

        let err = handle_log(&logger, Delivery::Console, &words("x"), &mut output).unwrap_err();

        assert!(matches!(
            err,
            FilelogError::LogFailed {
                destination: LogDestination::GeneralLog
            }
        ));
        assert_eq!(err.exit_code(), exitcode::IOERR);
    }
}
