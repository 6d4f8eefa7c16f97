//! Levels only label a line: each one maps to a display name and a color, nothing more.

use crate::fmt::AnsiColor;
use std::fmt;
use std::str::FromStr;

/// Discriminants are the stable numeric codes callers may persist or pass across boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Failures the caller could not recover from.
    Error = 0,
    /// Anomalies worth a second look.
    Warn = 1,
    /// Development-time detail.
    Debug = 2,
    /// Normal operational milestones.
    #[default]
    Info = 3,
}

impl Level {
    /// Matches the bracketed label that appears in every rendered line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warn => "Warn",
            Self::Debug => "Debug",
            Self::Info => "Info",
        }
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// `None` for anything outside the four known codes.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Error),
            1 => Some(Self::Warn),
            2 => Some(Self::Debug),
            3 => Some(Self::Info),
            _ => None,
        }
    }

    /// All four levels in code order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Error, Self::Warn, Self::Debug, Self::Info]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// The color/name pair a sink needs to render a level tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDescriptor {
    pub color: AnsiColor,
    pub name: &'static str,
}

impl LevelDescriptor {
    /// Fallback for codes outside the known set: rendered uncolored.
    pub const UNKNOWN: Self = Self {
        color: AnsiColor::Reset,
        name: "Unknown",
    };

    #[must_use]
    pub const fn describe(level: Level) -> Self {
        let color = match level {
            Level::Debug => AnsiColor::Magenta,
            Level::Info => AnsiColor::Green,
            Level::Warn => AnsiColor::Yellow,
            Level::Error => AnsiColor::Red,
        };
        Self {
            color,
            name: level.as_str(),
        }
    }

    /// Total over `i32`: any code without a level gets [`Self::UNKNOWN`].
    #[must_use]
    pub const fn describe_code(code: i32) -> Self {
        match Level::from_code(code) {
            Some(level) => Self::describe(level),
            None => Self::UNKNOWN,
        }
    }

    /// Raw escape sequence that opens the tag.
    #[must_use]
    pub const fn color_code(&self) -> &'static str {
        self.color.code()
    }
}

impl From<Level> for LevelDescriptor {
    fn from(level: Level) -> Self {
        Self::describe(level)
    }
}
