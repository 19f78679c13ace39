//! Logger setup for the CLI.
//!
//! Command output goes through `log::info!`, so the logger writes to stdout
//! and prints info lines bare. `--verbose` switches to env_logger's default
//! format (timestamp, level, target) at debug level; `--quiet` keeps only
//! warnings and errors. `RUST_LOG` overrides both.

use std::io::Write;

use log::{Level, LevelFilter};

/// `--verbose` wins when both flags are given.
pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

pub(crate) fn init(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(quiet, verbose))
        .target(env_logger::Target::Stdout);

    if !verbose {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }

    builder.parse_default_env();
    builder.init();
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
