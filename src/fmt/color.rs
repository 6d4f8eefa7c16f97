//! Plain 16-color SGR codes: every terminal renders them, and the strip pattern
//! in [`super::strip`] only has to recognize one shape of escape.

use std::fmt;

/// A dedicated type keeps raw escape strings out of level and sink code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnsiColor {
    Red,
    Green,
    Yellow,
    Magenta,
    /// Also used as the "no color" marker for unknown levels.
    #[default]
    Reset,
}

impl AnsiColor {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Magenta => "\x1b[35m",
            Self::Reset => Self::RESET,
        }
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Most callers just want "make this text colored" without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, color: AnsiColor) -> String {
    let code = color.code();
    let reset = AnsiColor::RESET;
    format!("{code}{text}{reset}")
}
