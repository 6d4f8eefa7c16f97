//! Log files are read with pagers and grep, where escape codes are noise.

use regex::Regex;
use std::sync::LazyLock;

/// SGR sequences only: `ESC [` then digits/semicolons, terminated by `m`.
static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid ANSI regex"));

/// Removes every SGR color sequence, leaving the text content untouched.
#[must_use]
pub fn strip_ansi(input: &str) -> String {
    ANSI_REGEX.replace_all(input, "").into_owned()
}

/// True if any SGR sequence is present.
#[must_use]
pub fn has_ansi(input: &str) -> bool {
    ANSI_REGEX.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_and_compound_codes() {
        let colored = "\x1b[32m[Info]\x1b[0m and \x1b[1;38;2;255;0;0mbold red\x1b[0m";
        assert_eq!(strip_ansi(colored), "[Info] and bold red");
    }

    #[test]
    fn leaves_plain_text_alone() {
        let plain = "2024-01-01 00:00:00 [Warn] {\"msg\":\"[x]m\"}";
        assert_eq!(strip_ansi(plain), plain);
        assert!(!has_ansi(plain));
    }

    #[test]
    fn ignores_non_sgr_escapes() {
        // Cursor movement ends in a letter other than `m`.
        assert_eq!(strip_ansi("\x1b[2Kline"), "\x1b[2Kline");
    }
}
