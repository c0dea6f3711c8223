//! # POM Generation
//!
//! Turns a [`Project`] into the text of a `pom.xml`.
//!
//! ## Pipeline
//!
//! 1. **Unmerge build layers**: the profiles named in [`BUILD_PROFILES`]
//!    are deactivated so the base view holds only what the project ships.
//! 2. **Views**: the base view, the base plus `provided`, and the base plus
//!    [`TEST_VIEW_PROFILES`] are materialised and their dependencies
//!    consolidated into one scoped list.
//! 3. **Release integrity**: a release version may not depend on snapshot
//!    versions unless the override is set.
//! 4. **SCM**: explicit `scm` data or discovery from the `.git` directory.
//! 5. **Relativize**: every configured path loses its `<root>/` prefix.
//! 6. **Render**: [`PomModel`] builds the element tree, which is serialized
//!    with an XML declaration and, optionally, the disclaimer comment.
//!
//! ## Submodules
//!
//! - [`tags`]: the [`XmlTags`](tags::XmlTags) trait and the value rules
//! - [`build`]: the `<build>` section and build-helper executions
//! - [`model`]: the top-level `<project>` element

pub mod build;
pub mod model;
pub mod tags;

use std::path::PathBuf;

use log::debug;

use crate::dependencies::{consolidate, DependencyViews};
use crate::error::{Error, Result};
use crate::path::relativize;
use crate::profiles::Project;
use crate::project::{DependencySpec, ProjectDescriptor};
use crate::xml::{render, XML_DECLARATION};
use crate::{scm, SNAPSHOT_OVERRIDE_ENV};

pub use model::PomModel;
pub use tags::XmlTags;

/// Comment placed after the XML declaration.
pub const DISCLAIMER: &str = "<!-- This file was autogenerated by pomgen. \
Please do not edit it directly; edit the project descriptor instead. -->";

/// Profile layers removed before the views are computed.
pub const BUILD_PROFILES: &[&str] = &["base", "system", "user", "provided", "dev", "test", "default"];

/// Profiles whose dependencies become `scope=test`.
pub const TEST_VIEW_PROFILES: &[&str] = &["provided", "dev", "test", "default"];

/// Profile whose dependencies become `scope=provided`.
pub const PROVIDED_PROFILES: &[&str] = &["provided"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomOptions {
    /// Prepend the autogenerated-file comment.
    pub disclaimer: bool,
    /// Skip the release integrity check.
    pub allow_snapshots: bool,
}

impl Default for PomOptions {
    fn default() -> Self {
        Self {
            disclaimer: true,
            allow_snapshots: false,
        }
    }
}

impl PomOptions {
    /// Defaults, with `allow_snapshots` taken from the environment.
    pub fn from_env() -> Self {
        Self {
            allow_snapshots: snapshot_override_from_env(),
            ..Self::default()
        }
    }
}

/// Whether the snapshot override variable is set to a non-empty value.
pub fn snapshot_override_from_env() -> bool {
    std::env::var_os(SNAPSHOT_OVERRIDE_ENV).is_some_and(|value| !value.is_empty())
}

/// Fail when a release `project` depends on snapshot versions.
pub fn check_snapshot_deps(
    project: &ProjectDescriptor,
    dependencies: &[DependencySpec],
    allow_snapshots: bool,
) -> Result<()> {
    if project.is_snapshot() || allow_snapshots {
        return Ok(());
    }
    let offending: Vec<String> = dependencies
        .iter()
        .filter(|dep| dep.is_snapshot())
        .map(ToString::to_string)
        .collect();
    if offending.is_empty() {
        Ok(())
    } else {
        Err(Error::SnapshotInRelease {
            version: project.version.clone(),
            dependencies: offending,
        })
    }
}

/// Where `pom.xml` goes when no output path is given.
pub fn default_pom_path(project: &ProjectDescriptor) -> PathBuf {
    project.root.join("pom.xml")
}

/// Generate the `pom.xml` text for `project`.
pub fn make_pom(project: &Project, options: &PomOptions) -> Result<String> {
    let mut layered = project.clone();
    layered.unmerge_profiles(BUILD_PROFILES.iter().copied());

    let base = layered.effective();
    let provided = layered
        .with_profiles(PROVIDED_PROFILES.iter().copied())
        .effective();
    let test = layered
        .with_profiles(TEST_VIEW_PROFILES.iter().copied())
        .effective();

    let dependencies = consolidate(&DependencyViews {
        base: &base.dependencies,
        provided: &provided.dependencies,
        test: &test.dependencies,
    });
    let checked: Vec<DependencySpec> = dependencies
        .iter()
        .chain(&base.managed_dependencies)
        .cloned()
        .collect();
    check_snapshot_deps(&base, &checked, options.allow_snapshots)?;

    let scm = scm::resolve(&base);
    debug!("SCM section: {:?}", scm);

    let root = base.root.clone();
    let test_paths: Vec<String> = test
        .test_paths
        .iter()
        .map(|path| relativize(&root, path))
        .collect();
    let test_resource_paths: Vec<String> = test
        .resource_paths
        .iter()
        .filter(|path| !base.resource_paths.contains(path))
        .map(|path| relativize(&root, path))
        .collect();
    let mut relative = base;
    relative.map_paths(|path| relativize(&root, path));

    let model = PomModel {
        project: &relative,
        scm,
        dependencies,
        test_paths,
        test_resource_paths,
    };
    let element = model.xml_tags("project").ok_or_else(|| Error::Xml {
        message: "project element rendered empty".to_string(),
    })?;
    let body = render(&element)?;

    let mut pom = String::from(XML_DECLARATION);
    pom.push('\n');
    if options.disclaimer {
        pom.push_str(DISCLAIMER);
        pom.push('\n');
    }
    pom.push_str(&body);
    pom.push('\n');
    Ok(pom)
}
