//! Usage:
//!   twinlog [--file] [--path <PATH>] [--config <PATH>] <LEVEL> <CALLER> <MODULE> <MESSAGE>...

use clap::Parser;
use std::process::ExitCode;
use twinlog::cli::Cli;
use twinlog::internal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Sink choice and diagnostics threshold come from config, so it loads first
    let config = match cli.resolve_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    internal::init_with_config(&config);

    let logger = cli.build_logger(&config);
    logger.log(cli.level.into(), &cli.message());

    match logger.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Flush failed: {e}"));
            ExitCode::FAILURE
        }
    }
}
