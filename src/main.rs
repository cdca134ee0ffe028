use clap::Parser;
use filelog::cli::{Cli, Commands, OutputFormat};
use filelog::commands::{handle_log, handle_paths, Delivery};
use filelog::error::FilelogError;
use filelog::output::Output;
use filelog::{init, FileLogger, LogDestination};

fn main() {
    // Setup panic handler for user-friendly error messages
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let mut output = Output::new(cli.quiet, matches!(cli.output, OutputFormat::Json));

    let result = (|| {
        init::setup_logging(cli.verbose, cli.quiet)?;

        // Paths are fixed from here on
        let paths = init::resolve_log_paths(cli.log_dir.as_deref())?;
        let logger = FileLogger::new(paths);

        match &cli.command {
            Commands::Console { message } => {
                handle_log(&logger, Delivery::Console, message, &mut output)?;
            }
            Commands::General { message } => {
                let delivery = Delivery::To(LogDestination::GeneralLog);
                handle_log(&logger, delivery, message, &mut output)?;
            }
            Commands::Error { message } => {
                let delivery = Delivery::To(LogDestination::ErrorLog);
                handle_log(&logger, delivery, message, &mut output)?;
            }
            Commands::Paths => handle_paths(&logger, &mut output)?,
        }

        Ok::<(), FilelogError>(())
    })();

    match result {
        Ok(()) => std::process::exit(exitcode::OK),
        Err(e) => {
            // Failed writes were already reported by handle_log
            if !matches!(e, FilelogError::LogFailed { .. }) {
                let _ = output.error(e.to_string());
            }
            std::process::exit(e.exit_code());
        }
    }
}
