//! The two backends (terminal, file) share one contract: a record plus its level
//! descriptor in, one rendered line out.

mod file;
mod terminal;

pub use file::{DEFAULT_LOG_FILE, FileOutput};
pub use terminal::TerminalOutput;

use crate::fmt::rfc3339;
use crate::level::LevelDescriptor;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The JSON payload of every line. Field order is the wire order: `ts`, `caller`, `module`, `msg`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogRecord {
    /// RFC 3339, second precision. Empty on the logger's base record.
    pub ts: String,
    /// Call-site location, e.g. `src/server.rs:30`.
    pub caller: String,
    pub module: String,
    pub msg: String,
}

impl LogRecord {
    /// Base record a logger keeps for its whole lifetime; `ts` and `msg` are filled per emit.
    #[must_use]
    pub fn new(caller: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            ts: String::new(),
            caller: caller.into(),
            module: module.into(),
            msg: String::new(),
        }
    }

    /// A fresh record for one emit: the base is never mutated, so nothing leaks between calls.
    #[must_use]
    pub fn stamped(&self, msg: &str) -> Self {
        self.stamped_at(msg, &Local::now())
    }

    #[must_use]
    pub fn stamped_at<Tz: TimeZone>(&self, msg: &str, at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Self {
            ts: rfc3339(at),
            caller: self.caller.clone(),
            module: self.module.clone(),
            msg: msg.to_string(),
        }
    }

    /// Compact JSON, no whitespace between tokens.
    ///
    /// # Errors
    /// Serialization of plain strings does not fail in practice; the error is surfaced rather than unwrapped.
    pub fn to_json(&self) -> Result<String, crate::Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `Send + Sync` so a logger can be shared across threads behind a plain reference.
pub trait Output: Send + Sync {
    /// Renders and delivers one line.
    ///
    /// # Errors
    /// I/O errors from the underlying sink (stdout, file).
    fn write(&self, record: &LogRecord, level: &LevelDescriptor) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}

/// A logger is bound to exactly one of these for its whole lifetime.
#[derive(Debug, Clone)]
pub enum Sink {
    Terminal(TerminalOutput),
    File(FileOutput),
}

impl Sink {
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::Terminal(TerminalOutput::new())
    }
}

impl From<TerminalOutput> for Sink {
    fn from(output: TerminalOutput) -> Self {
        Self::Terminal(output)
    }
}

impl From<FileOutput> for Sink {
    fn from(output: FileOutput) -> Self {
        Self::File(output)
    }
}

impl Output for Sink {
    fn write(&self, record: &LogRecord, level: &LevelDescriptor) -> Result<(), crate::Error> {
        match self {
            Self::Terminal(output) => output.write(record, level),
            Self::File(output) => output.write(record, level),
        }
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self {
            Self::Terminal(output) => output.flush(),
            Self::File(output) => output.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn json_keys_in_wire_order() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let record = LogRecord::new("log/log.go:30", "server").stamped_at("test", &at);
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"ts":"2024-01-02T03:04:05Z","caller":"log/log.go:30","module":"server","msg":"test"}"#
        );
    }

    #[test]
    fn stamping_leaves_base_untouched() {
        let base = LogRecord::new("c", "m");
        let first = base.stamped("one");
        let second = base.stamped("two");
        assert_eq!(first.msg, "one");
        assert_eq!(second.msg, "two");
        assert!(base.msg.is_empty());
        assert!(base.ts.is_empty());
    }

    #[test]
    fn escapes_quotes_newlines_and_unicode() {
        let msg = "say \"hi\"\nnext line — ünïcødé 日本";
        let record = LogRecord::new("c", "m").stamped(msg);
        let json = record.to_json().unwrap();
        assert!(!json.contains('\n'));
        let back: LogRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.msg, msg);
    }
}
