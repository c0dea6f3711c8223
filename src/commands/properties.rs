//! # Properties Command Implementation
//!
//! `pomgen properties` writes the `pom.properties` manifest (version,
//! groupId, artifactId and, inside a git checkout, revision). By default it
//! lands where Maven packages it:
//! `<compile-path>/META-INF/maven/<group>/<name>/pom.properties`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pomgen::output::{emoji, highlight, OutputConfig};
use pomgen::project::DEFAULT_DESCRIPTOR;
use pomgen::properties;

use super::{load_project, write_output};

/// Write the pom.properties manifest
#[derive(Args, Debug)]
pub struct PropertiesArgs {
    /// Project descriptor to read.
    #[arg(short, long, value_name = "FILE", env = "POMGEN_PROJECT", default_value = DEFAULT_DESCRIPTOR)]
    pub project: PathBuf,

    /// Additional profile to activate (repeatable).
    #[arg(long = "profile", value_name = "NAME")]
    pub profiles: Vec<String>,

    /// Output path; defaults to the packaged manifest location.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Execute the `properties` command.
pub fn execute(args: PropertiesArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let project = load_project(&args.project, &args.profiles)?.effective();

    let manifest = properties::make_pom_properties(&project);
    let target = args
        .output
        .unwrap_or_else(|| properties::default_properties_path(&project));
    let written = write_output(&target, &manifest)?;
    println!(
        "{} Wrote {}",
        emoji(&out, "📝", "[OK]"),
        highlight(&out, &written.display().to_string())
    );
    Ok(())
}
