//! Append-only plain-text file, echoed to stdout in color.
//!
//! The file is opened and closed inside every `write`; no handle outlives a call,
//! so external tools can move or truncate the file at any time.

use crate::fmt::{render_line, strip_ansi};
use crate::internal;
use crate::level::LevelDescriptor;

use super::{LogRecord, Output, TerminalOutput};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Relative to the process working directory.
pub const DEFAULT_LOG_FILE: &str = "log.log";

/// Owner read-write, group/other read.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone)]
pub struct FileOutput {
    /// May contain `~`; expanded at write time.
    file_path: PathBuf,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOutput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    /// Tests and services with a read-only working directory need somewhere else to write.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// The configured path, before `~` expansion.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Config values use `~` for portability: the OS needs a real path.
    /// Non-UTF-8 paths are used as given, never lossily converted.
    #[must_use]
    pub fn resolve_path(&self) -> PathBuf {
        let path = self.file_path.to_str().map_or_else(
            || self.file_path.clone(),
            |path_str| PathBuf::from(shellexpand::tilde(path_str).as_ref()),
        );
        internal::debug("FILE", &format!("Resolved path: {}", path.display()));
        path
    }

    fn open(path: &Path) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        options.open(path)
    }

    /// Appends `line` plus a newline. Each failure class is reported where it happens.
    fn append(&self, line: &str) -> Result<(), crate::Error> {
        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            match fs::create_dir_all(parent) {
                Ok(()) => {
                    internal::debug("FILE", &format!("Created directory: {}", parent.display()));
                }
                Err(e) => {
                    internal::error(
                        "FILE",
                        &format!("Failed to create directory {}: {e}", parent.display()),
                    );
                    return Err(e.into());
                }
            }
        }

        let file = Self::open(&path).map_err(|e| {
            internal::error(
                "FILE",
                &format!("Failed to open file {}: {e}", path.display()),
            );
            e
        })?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(|e| {
                internal::error(
                    "FILE",
                    &format!("Failed to write to file {}: {e}", path.display()),
                );
                e
            })?;

        writer.flush().map_err(|e| {
            internal::error(
                "FILE",
                &format!("Failed to flush buffer for {}: {e}", path.display()),
            );
            e
        })?;

        Ok(())
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord, level: &LevelDescriptor) -> Result<(), crate::Error> {
        let line = render_line(record, level)?;

        // Echo failure must not cost the durable copy.
        if let Err(e) = TerminalOutput::echo(&line) {
            internal::warn("FILE", &format!("Failed to echo to stdout: {e}"));
        }

        self.append(&strip_ansi(&line))
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
