//! # CLI Command Implementations
//!
//! One module per `pomgen` subcommand. Each defines a clap `Args` struct and
//! an `execute` function that loads the descriptor, calls into the `pomgen`
//! library and reports what it wrote.
//!
//! Loading and writing are shared here so `pom` and `properties` agree on
//! descriptor lookup, profile activation and output handling.

pub mod completions;
pub mod pom;
pub mod properties;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use pomgen::profiles::Project;
use pomgen::project;

/// Load the descriptor at `path` and activate `profiles` on top of the
/// default ones.
pub fn load_project(path: &Path, profiles: &[String]) -> Result<Project> {
    let descriptor = project::from_file(path)
        .with_context(|| format!("Failed to load project descriptor {}", path.display()))?;
    let mut project = Project::new(descriptor);
    project.merge_profiles(profiles);
    debug!("Active profiles: {:?}", project.active_profiles());
    Ok(project)
}

/// Write `contents` to `path`, creating parent directories. Returns the
/// absolute path written.
pub fn write_output(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()))
}
