//! Immediate colored feedback on stdout, nothing persisted.

use crate::fmt::render_line;
use crate::level::LevelDescriptor;

use super::{LogRecord, Output};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// One line, one newline. Locked so the line isn't split by another thread's output.
    pub(crate) fn echo(line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord, level: &LevelDescriptor) -> Result<(), crate::Error> {
        let line = render_line(record, level)?;
        Self::echo(&line)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}
