//! Stepwise construction for callers who want a custom file path without a config file.

use super::Logger;
use crate::output::{FileOutput, LogRecord, Sink, TerminalOutput};
use std::path::PathBuf;

/// Terminal-backed with empty caller/module until told otherwise.
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    caller: String,
    module: String,
    sink: Sink,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call-site location shown in every line, e.g. `src/main.rs:42`.
    #[must_use]
    pub fn caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = caller.into();
        self
    }

    #[must_use]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    #[must_use]
    pub fn terminal(mut self) -> Self {
        self.sink = Sink::Terminal(TerminalOutput::new());
        self
    }

    /// File output has its own setting (the path), so it gets a sub-builder.
    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            output: FileOutput::new(),
        }
    }

    /// Replaces whatever sink was selected before.
    #[must_use]
    pub fn sink(mut self, sink: impl Into<Sink>) -> Self {
        self.sink = sink.into();
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            record: LogRecord::new(self.caller, self.module),
            sink: self.sink,
        }
    }
}

pub struct FileBuilder {
    parent: LoggerBuilder,
    output: FileOutput,
}

impl FileBuilder {
    /// Defaults to `log.log` in the working directory.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = self.output.path(path);
        self
    }

    /// Sub-builder consumes self, so there must be a way back.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.sink = Sink::File(self.output);
        self.parent
    }
}
