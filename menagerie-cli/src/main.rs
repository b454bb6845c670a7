//! Menagerie: interactive animal registry.
//!
//! # Usage
//!
//! ```text
//! menagerie [--output <PATH>]
//! ```
//!
//! Reads numbered menu choices from stdin. After every successful
//! registration the whole registry is written to `animals.txt` (or `--output`).

mod menu;
mod shell;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use menagerie_dump::DEFAULT_DUMP_FILE;
use shell::{Shell, ShellConfig};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "menagerie",
    version,
    about = "Register animals, teach them commands, and count pets vs. pack animals",
    long_about = None,
)]
struct Cli {
    /// File rewritten with every registered animal after each registration.
    #[arg(long, short = 'o', value_name = "PATH", default_value = DEFAULT_DUMP_FILE)]
    output: PathBuf,
}

impl From<Cli> for ShellConfig {
    fn from(cli: Cli) -> Self {
        Self {
            dump_path: cli.output,
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), ShellConfig::from(cli));
    shell.run().context("interactive session failed")
}

/// Logs go to stderr so they never interleave with menu output on stdout.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}
