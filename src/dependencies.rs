//! # Dependency Consolidation
//!
//! Maven has one flat `<dependencies>` list with a `scope` per entry, while
//! the descriptor spreads dependencies over profiles. This module folds the
//! profile views back into one list:
//!
//! 1. the base view, as declared;
//! 2. the `provided` view, extras stamped `scope=provided`;
//! 3. the test view (provided + dev + test + default), extras stamped
//!    `scope=test`.
//!
//! The concatenation is then deduplicated on `group/artifact`, keeping the
//! first occurrence, so a base declaration always beats a profile-injected
//! one of the same artifact.

use std::collections::HashSet;

use log::debug;

use crate::project::{Coordinate, DependencySpec};

pub const PROVIDED_SCOPE: &str = "provided";
pub const TEST_SCOPE: &str = "test";

/// The three materialised dependency lists consolidation works from.
#[derive(Debug, Clone, Copy)]
pub struct DependencyViews<'a> {
    pub base: &'a [DependencySpec],
    pub provided: &'a [DependencySpec],
    pub test: &'a [DependencySpec],
}

/// Merge the views into one ordered, scoped, deduplicated list.
pub fn consolidate(views: &DependencyViews<'_>) -> Vec<DependencySpec> {
    let base_keys: HashSet<&Coordinate> = views.base.iter().map(DependencySpec::identity).collect();

    let stamp = |deps: &[DependencySpec], scope: &'static str| {
        deps.iter()
            .filter(|dep| !base_keys.contains(dep.identity()))
            .map(move |dep| dep.with_scope(scope))
            .collect::<Vec<_>>()
    };
    let provided = stamp(views.provided, PROVIDED_SCOPE);
    let test = stamp(views.test, TEST_SCOPE);

    dedupe(views.base.iter().cloned().chain(provided).chain(test))
}

/// Keep the first dependency of each `group/artifact`.
pub fn dedupe(deps: impl IntoIterator<Item = DependencySpec>) -> Vec<DependencySpec> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for dep in deps {
        if seen.insert(dep.identity().clone()) {
            result.push(dep);
        } else {
            debug!("Dropping duplicate dependency {}", dep);
        }
    }
    result
}
