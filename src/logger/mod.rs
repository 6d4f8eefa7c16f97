//! A logger is a call site's identity (caller, module) bound to one sink.
//! Every emit stamps a fresh record from that identity, so `&self` is enough
//! and a logger can be shared between threads.

mod builder;
mod from_config;

pub use builder::{FileBuilder, LoggerBuilder};

use crate::level::{Level, LevelDescriptor};
use crate::output::{LogRecord, Output, Sink};

/// Immutable after build: the sink binding never changes.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    record: LogRecord,
    sink: Sink,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Core dispatch. Sink failures never reach the caller: the file sink has
    /// already reported them on the diagnostic channel, stdout failures are dropped.
    pub fn log(&self, level: Level, msg: &str) {
        let descriptor = LevelDescriptor::describe(level);
        let record = self.record.stamped(msg);
        let _ = self.sink.write(&record, &descriptor);
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// The file sink flushes on every write; this only matters for stdout.
    ///
    /// # Errors
    /// I/O error from the sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()
    }

    #[must_use]
    pub fn caller(&self) -> &str {
        &self.record.caller
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.record.module
    }

    #[must_use]
    pub const fn sink(&self) -> &Sink {
        &self.sink
    }

    #[must_use]
    pub const fn writes_to_file(&self) -> bool {
        self.sink.is_file()
    }
}
