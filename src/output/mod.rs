use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub mod log;

/// Output handler for user-facing messages of the `filelog` binary.
/// The logged lines themselves never pass through here.
pub struct Output {
    stdout: StandardStream,
    stderr: StandardStream,
    quiet: bool,
    json: bool,
}

impl Output {
    /// Create a new Output instance
    pub fn new(quiet: bool, json: bool) -> Self {
        let color_choice = if std::io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };

        Self {
            stdout: StandardStream::stdout(color_choice),
            stderr: StandardStream::stderr(color_choice),
            quiet,
            json,
        }
    }

    // ========== Basic Output Methods ==========

    /// Print an error message (red, always shown)
    pub fn error(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        if self.json {
            self.print_json("error", msg.as_ref(), serde_json::Value::Null)?;
        } else {
            self.stderr
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(self.stderr, "✗ {}", msg.as_ref())?;
            self.stderr.reset()?;
        }
        Ok(())
    }

    // ========== JSON Output ==========

    fn print_json(
        &mut self,
        level: &str,
        message: &str,
        details: serde_json::Value,
    ) -> io::Result<()> {
        writeln!(self.stdout, "{}", json_record(level, message, details))?;
        Ok(())
    }

    // ========== Internal helpers for submodules ==========

    pub(crate) fn stdout(&mut self) -> &mut StandardStream {
        &mut self.stdout
    }

    pub(crate) fn quiet(&self) -> bool {
        self.quiet
    }

    pub(crate) fn json(&self) -> bool {
        self.json
    }

    pub(crate) fn print_json_internal(
        &mut self,
        level: &str,
        message: &str,
        details: serde_json::Value,
    ) -> io::Result<()> {
        self.print_json(level, message, details)
    }
}

/// One JSON output record. `details` fields are merged in when it is an object.
fn json_record(level: &str, message: &str, details: serde_json::Value) -> serde_json::Value {
    let mut record = serde_json::json!({
        "level": level,
        "message": message,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    if let (Some(record), serde_json::Value::Object(details)) = (record.as_object_mut(), details) {
        record.extend(details);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_record_basic_fields() {
        let record = json_record("info", "hello", serde_json::Value::Null);
        assert_eq!(record["level"], "info");
        assert_eq!(record["message"], "hello");
        assert!(record["timestamp"].is_string());
    }

    #[test]
    fn test_json_record_merges_details() {
        let record = json_record(
            "success",
            "logged",
            json!({ "destination": "error_log", "path": "/tmp/error.log" }),
        );
        assert_eq!(record["destination"], "error_log");
        assert_eq!(record["path"], "/tmp/error.log");
        assert_eq!(record["message"], "logged");
    }

    #[test]
    fn test_quiet_still_reports_errors() {
        let mut output = Output::new(true, true);
        assert!(output.quiet());
        // Errors bypass the quiet flag; only status output is silenced
        output.error("write failed").unwrap();
    }

    #[test]
    fn test_json_record_ignores_non_object_details() {
        let record = json_record("info", "x", json!(["a", "b"]));
        assert_eq!(record.as_object().unwrap().len(), 3);
    }
}
