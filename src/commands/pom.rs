//! # Pom Command Implementation
//!
//! `pomgen pom` loads the project descriptor, generates `pom.xml` and
//! writes it to the requested path, or `<root>/pom.xml` by default.
//!
//! Generation fails, and nothing is written, when a release version depends
//! on snapshot versions. `--allow-snapshots` or a non-empty
//! `POMGEN_SNAPSHOTS_IN_RELEASE` lifts that check.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pomgen::output::{emoji, highlight, OutputConfig};
use pomgen::pom::{self, PomOptions};
use pomgen::project::DEFAULT_DESCRIPTOR;

use super::{load_project, write_output};

/// Write pom.xml for the project
#[derive(Args, Debug)]
pub struct PomArgs {
    /// Project descriptor to read.
    #[arg(short, long, value_name = "FILE", env = "POMGEN_PROJECT", default_value = DEFAULT_DESCRIPTOR)]
    pub project: PathBuf,

    /// Additional profile to activate (repeatable).
    #[arg(long = "profile", value_name = "NAME")]
    pub profiles: Vec<String>,

    /// Leave out the "autogenerated" comment.
    #[arg(long)]
    pub no_disclaimer: bool,

    /// Allow a release version to depend on snapshot versions.
    #[arg(long)]
    pub allow_snapshots: bool,

    /// Output path; defaults to pom.xml in the project root.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Execute the `pom` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: PomArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let project = load_project(&args.project, &args.profiles)?;

    let env_options = PomOptions::from_env();
    let options = PomOptions {
        disclaimer: !args.no_disclaimer,
        allow_snapshots: args.allow_snapshots || env_options.allow_snapshots,
    };
    let xml = pom::make_pom(&project, &options)?;

    let target = args
        .output
        .unwrap_or_else(|| pom::default_pom_path(project.descriptor()));
    let written = write_output(&target, &xml)?;
    println!(
        "{} Wrote {}",
        emoji(&out, "📝", "[OK]"),
        highlight(&out, &written.display().to_string())
    );
    Ok(())
}
