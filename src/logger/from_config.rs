//! The factory: a config picks the sink, the call site supplies its identity.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// `write_to_file = true` binds the file sink (at `file.path`), anything else the terminal.
    #[must_use]
    pub fn from_config(config: &Config, caller: &str, module: &str) -> Self {
        let builder = LoggerBuilder::new().caller(caller).module(module);

        if config.write_to_file() {
            internal::debug(
                "LOGGER",
                &format!("{module}: file sink at {}", config.file.path),
            );
            builder.file().path(&config.file.path).done().build()
        } else {
            internal::debug("LOGGER", &format!("{module}: terminal sink"));
            builder.terminal().build()
        }
    }
}
