//! `twinlog` - Minimal structured logging to a colored terminal or an append-only file.
//!
//! A logger is bound to a call site (caller location and module name) and to one
//! of two sinks, chosen by a single config flag:
//! - terminal: one ANSI-colored line per call on stdout
//! - file: the same line echoed to stdout, then appended color-free to `log.log`
//!
//! Each line reads `<date> [<Level>] {"ts":..,"caller":..,"module":..,"msg":..}`.
//!
//! # Example
//!
//! ```
//! use twinlog::Config;
//!
//! let config = Config::new(false);
//! let logger = config.log_help("src/main.rs:10", "server/http");
//!
//! logger.info("listening");
//! logger.warn("slow request");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `twinlog` command-line binary

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{AnsiColor, render_line, strip_ansi};
pub use level::{Level, LevelDescriptor, ParseLevelError};
pub use logger::{Logger, LoggerBuilder};
pub use output::{FileOutput, LogRecord, Output, Sink, TerminalOutput};
