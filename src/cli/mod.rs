//! CLI module for twinlog.
//!
//! One invocation emits one line: handy for shell scripts that want the same
//! format as the services they sit next to.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use clap::Parser;
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// twinlog - Emit one structured log line from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "twinlog",
    version,
    about = "Emit one structured log line to the terminal or a log file"
)]
pub struct Cli {
    /// Append to the log file (and echo to stdout) regardless of config
    #[arg(long)]
    pub file: bool,
    /// Log file location (implies nothing about --file)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Log level
    #[arg(value_enum, ignore_case = true)]
    pub level: LogLevel,
    /// Call-site location, e.g. src/main.rs:42
    pub caller: String,
    /// Module name
    pub module: String,
    /// Log message (words are joined with spaces)
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Config from `--config` or the default location, with flags layered on top.
    ///
    /// # Errors
    /// Config file read or parse failures.
    pub fn resolve_config(&self) -> Result<Config, crate::Error> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if self.file {
            config.general.write_to_file = true;
        }
        if let Some(path) = &self.path {
            config.file.path = path.to_string_lossy().into_owned();
        }
        Ok(config)
    }

    #[must_use]
    pub fn build_logger(&self, config: &Config) -> Logger {
        config.log_help(&self.caller, &self.module)
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.message.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_flags() {
        let cli = Cli::try_parse_from([
            "twinlog", "--file", "--path", "out.log", "WARN", "a.rs:1", "net", "disk", "full",
        ])
        .unwrap();
        assert!(cli.file);
        assert_eq!(cli.level, LogLevel::Warn);
        assert_eq!(cli.caller, "a.rs:1");
        assert_eq!(cli.module, "net");
        assert_eq!(cli.message(), "disk full");
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(Cli::try_parse_from(["twinlog", "trace", "c", "m", "x"]).is_err());
    }

    #[test]
    fn requires_a_message() {
        assert!(Cli::try_parse_from(["twinlog", "info", "c", "m"]).is_err());
    }
}
