//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// pomgen - Generate Maven pom.xml and pom.properties from a project descriptor
#[derive(Parser, Debug)]
#[command(name = "pomgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace", "off"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write pom.xml for the project
    Pom(commands::pom::PomArgs),

    /// Write the pom.properties manifest for the project
    Properties(commands::properties::PropertiesArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Pom(args) => commands::pom::execute(args, &self.color),
            Commands::Properties(args) => commands::properties::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // Already initialised is fine.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
