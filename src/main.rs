//! # pomgen CLI
//!
//! Binary entry point for `pomgen`. Argument parsing lives in `cli`, each
//! subcommand in `commands`; generation itself is done by the `pomgen`
//! library so the binary stays a thin wrapper.
//!
//! Errors bubble up as `anyhow::Error`, are printed to stderr and turn into
//! exit code 1.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
