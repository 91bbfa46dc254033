//! # DelvForge - Command-Line Stylesheet Builder
//!
//! Thin front end over [`delvforge_core`]: load a configuration file (or the
//! built-in defaults), generate, and write CSS.
//!
//! ```text
//! delvforge build --config delvforge.yaml --output dist/app.css --minify
//! delvforge presets --out-dir dist
//! delvforge variants
//! delvforge components --config delvforge.yaml
//! ```
//!
//! Logging goes to stderr through `tracing-subscriber`. `RUST_LOG` takes
//! precedence over `-v`.

pub mod cli;
pub mod commands;
pub mod presets;

use std::io::Write;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Command};

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs one parsed command line, writing command output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Build(args) => commands::build(&args, out),
        Command::Presets(args) => commands::presets(&args, out).map(|_| ()),
        Command::Variants(args) => commands::variants(&args, out),
        Command::Components(args) => commands::components(&args, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "trace");
    }
}
