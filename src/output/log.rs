use super::Output;
use crate::config::LogPaths;
use crate::logger::LogDestination;
use serde_json::json;
use std::io::{self, Write};
use std::path::Path;

impl Output {
    /// Report a line written to `destination`. Silent in text mode.
    pub fn logged(&mut self, destination: LogDestination, path: &Path) -> io::Result<()> {
        if self.quiet() || !self.json() {
            return Ok(());
        }
        self.print_json_internal(
            "success",
            &format!("Logged to {}", path.display()),
            json!({ "destination": destination, "path": path }),
        )
    }

    /// Report a line that could not be written
    pub fn log_failed(&mut self, destination: LogDestination, path: &Path) -> io::Result<()> {
        self.error(format!(
            "Could not write to the {} log at {}",
            destination,
            path.display()
        ))
    }

    /// Print where the logs live
    pub fn paths(&mut self, paths: &LogPaths) -> io::Result<()> {
        if self.quiet() {
            return Ok(());
        }
        if self.json() {
            return self.print_json_internal(
                "info",
                "Log locations",
                json!({
                    "dir": paths.dir(),
                    "general_log": paths.general_log(),
                    "error_log": paths.error_log(),
                }),
            );
        }
        writeln!(self.stdout(), "directory:   {}", paths.dir().display())?;
        writeln!(self.stdout(), "general log: {}", paths.general_log().display())?;
        writeln!(self.stdout(), "error log:   {}", paths.error_log().display())?;
        Ok(())
    }
}
