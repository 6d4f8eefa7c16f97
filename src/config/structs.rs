//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Selects the sink: `true` for the file, `false` for the terminal.
    pub write_to_file: bool,
    /// Threshold for twinlog's own stderr diagnostics.
    pub diagnostics: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            write_to_file: false,
            diagnostics: "warn".to_string(),
        }
    }
}

/// File output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Log file path, relative to the working directory unless absolute. `~` is expanded.
    pub path: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: crate::output::DEFAULT_LOG_FILE.to_string(),
        }
    }
}
