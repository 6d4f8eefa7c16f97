//! twinlog's own diagnostic channel: sink failures and setup details go to stderr,
//! never through the logger that is failing.
//!
//! Messages below a minimum level are dropped. That minimum is set at most once;
//! until then it is `warn`.

use crate::config::Config;
use crate::level::Level;
use std::io::{self, Write};
use std::sync::OnceLock;

static THRESHOLD: OnceLock<u8> = OnceLock::new();

/// Used until something calls `init`: failures are always visible, chatter is not.
const DEFAULT_THRESHOLD: Level = Level::Warn;

/// Record levels carry no ordering; the diagnostic channel needs one to filter.
const fn verbosity(level: Level) -> u8 {
    match level {
        Level::Debug => 0,
        Level::Info => 1,
        Level::Warn => 2,
        Level::Error => 3,
    }
}

/// Only the first call takes effect; later calls are no-ops.
pub fn init(threshold: Level) {
    THRESHOLD.get_or_init(|| verbosity(threshold));
}

/// Reads `general.diagnostics`; an unparsable value keeps the default.
pub fn init_with_config(config: &Config) {
    let threshold = match config.diagnostics_level() {
        Ok(level) => level,
        Err(e) => {
            warn("INTERNAL", &format!("{e}, using '{DEFAULT_THRESHOLD}'"));
            DEFAULT_THRESHOLD
        }
    };
    init(threshold);
    debug(
        "INTERNAL",
        &format!(
            "Diagnostics at {threshold}, sink: {}",
            if config.general.write_to_file {
                "file"
            } else {
                "terminal"
            }
        ),
    );
}

#[must_use]
pub fn enabled(level: Level) -> bool {
    let threshold = THRESHOLD
        .get()
        .copied()
        .unwrap_or_else(|| verbosity(DEFAULT_THRESHOLD));
    verbosity(level) >= threshold
}

fn log(level: Level, scope: &str, msg: &str) {
    if !enabled(level) {
        return;
    }
    // Nowhere left to report a failing stderr.
    let _ = writeln!(io::stderr().lock(), "twinlog: {scope} {level}: {msg}");
}

/// Path resolution and setup details.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Degraded but still working: e.g. the stdout echo failed while the file write succeeded.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// A line was lost: open, write or flush failed.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_orders_diagnostics() {
        assert!(verbosity(Level::Debug) < verbosity(Level::Info));
        assert!(verbosity(Level::Info) < verbosity(Level::Warn));
        assert!(verbosity(Level::Warn) < verbosity(Level::Error));
    }

    #[test]
    fn errors_always_pass_the_threshold() {
        assert!(enabled(Level::Error));
    }
}
