//! Timestamped append-only logging to a general and an error log file.
//!
//! ```no_run
//! use filelog::{FileLogger, LogPaths};
//!
//! let logger = FileLogger::new(LogPaths::in_dir("/var/log/myapp"));
//! logger.to_console("startup complete");
//! if !logger.to_general_log("listening on :8080") {
//!     // the failure is already noted in error.log where possible
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logger;
pub mod output;
pub mod utils;

pub use config::LogPaths;
pub use logger::{FileLogger, LogDestination};
