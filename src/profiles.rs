//! # Profile Layering
//!
//! A [`Project`] pairs a loaded [`ProjectDescriptor`] with an ordered list
//! of active profile names. [`Project::effective`] applies those profiles on
//! top of the base descriptor:
//!
//! - sequences (dependencies, managed dependencies, repositories and every
//!   path list) are appended after the base entries, skipping entries that
//!   are already present verbatim;
//! - `target-path` and `compile-path` are replaced by the last profile that
//!   sets them.
//!
//! Profiles are applied in activation order.

use log::{debug, warn};

use crate::project::{Profile, ProjectDescriptor};

/// Profiles active right after loading, when the descriptor defines them.
pub const DEFAULT_PROFILES: &[&str] = &["base", "system", "user", "provided", "dev"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    descriptor: ProjectDescriptor,
    active: Vec<String>,
}

impl Project {
    /// Wrap a descriptor, activating whichever default profiles it defines.
    pub fn new(descriptor: ProjectDescriptor) -> Self {
        let mut project = Self {
            descriptor,
            active: Vec::new(),
        };
        project.activate_defined(DEFAULT_PROFILES.iter().copied());
        project
    }

    /// Wrap a descriptor with no profile active.
    pub fn bare(descriptor: ProjectDescriptor) -> Self {
        Self {
            descriptor,
            active: Vec::new(),
        }
    }

    pub fn descriptor(&self) -> &ProjectDescriptor {
        &self.descriptor
    }

    pub fn active_profiles(&self) -> &[String] {
        &self.active
    }

    /// Activate `names` after the currently active profiles.
    ///
    /// Names the descriptor does not define are skipped with a warning.
    pub fn merge_profiles<S: AsRef<str>>(&mut self, names: impl IntoIterator<Item = S>) {
        for name in names {
            let name = name.as_ref();
            if self.descriptor.profiles.contains_key(name) {
                self.activate(name);
            } else {
                warn!("Ignoring unknown profile '{}'", name);
            }
        }
    }

    /// Deactivate every profile in `names`.
    pub fn unmerge_profiles<S: AsRef<str>>(&mut self, names: impl IntoIterator<Item = S>) {
        let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        self.active.retain(|active| !names.contains(active));
    }

    /// A copy with the defined subset of `names` additionally active.
    pub fn with_profiles<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut project = self.clone();
        project.activate_defined(names);
        project
    }

    /// The descriptor with every active profile applied.
    pub fn effective(&self) -> ProjectDescriptor {
        let mut descriptor = self.descriptor.clone();
        for name in &self.active {
            if let Some(profile) = self.descriptor.profiles.get(name) {
                apply(&mut descriptor, profile);
            }
        }
        descriptor
    }

    fn activate_defined<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            if self.descriptor.profiles.contains_key(name) {
                self.activate(name);
            } else {
                debug!("Profile '{}' is not defined, skipping", name);
            }
        }
    }

    fn activate(&mut self, name: &str) {
        if !self.active.iter().any(|active| active == name) {
            self.active.push(name.to_string());
        }
    }
}

fn append<T: Clone + PartialEq>(base: &mut Vec<T>, extra: &[T]) {
    for item in extra {
        if !base.contains(item) {
            base.push(item.clone());
        }
    }
}

fn apply(descriptor: &mut ProjectDescriptor, profile: &Profile) {
    append(&mut descriptor.dependencies, &profile.dependencies);
    append(&mut descriptor.managed_dependencies, &profile.managed_dependencies);
    append(&mut descriptor.repositories, &profile.repositories);
    append(&mut descriptor.source_paths, &profile.source_paths);
    append(&mut descriptor.java_source_paths, &profile.java_source_paths);
    append(&mut descriptor.test_paths, &profile.test_paths);
    append(&mut descriptor.resource_paths, &profile.resource_paths);
    if let Some(target) = &profile.target_path {
        descriptor.target_path = Some(target.clone());
    }
    if let Some(compile) = &profile.compile_path {
        descriptor.compile_path = Some(compile.clone());
    }
}
