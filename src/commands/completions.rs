//! # Completions Command Implementation
//!
//! `pomgen completions <SHELL>` prints a completion script to stdout. The
//! script is generated by `clap_complete` from the [`Cli`] definition, so it
//! covers the `pom`, `properties` and `completions` subcommands together
//! with their flags (`--project`, `--profile`, `--allow-snapshots`,
//! `--no-disclaimer`) and the global `--color` / `--log-level` values.
//!
//! ## Supported Shells
//!
//! - **Bash**: `~/.local/share/bash-completion/completions/pomgen`
//! - **Zsh**: `_pomgen` in a directory on `fpath`
//! - **Fish**: `~/.config/fish/completions/pomgen.fish`
//! - **PowerShell**: dot-source the output from `$PROFILE`
//! - **Elvish**: evaluate the output from `rc.elv`
//!
//! Profile names come from the descriptor and are not completed.
//!
//! ## Example
//!
//! ```bash
//! pomgen completions bash > ~/.local/share/bash-completion/completions/pomgen
//! pomgen completions zsh > ~/.zfunc/_pomgen
//! pomgen completions fish > ~/.config/fish/completions/pomgen.fish
//! ```

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Shells `clap_complete` can target.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    /// Windows PowerShell and `pwsh`
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::PowerShell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(Shell::from(args.shell), &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
