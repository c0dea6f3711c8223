//! # pomgen
//!
//! Generates a Maven `pom.xml` and its companion `pom.properties` manifest
//! from a YAML (or JSON) project descriptor, so that projects built with
//! other tools can be published to and resolved from Maven repositories.
//!
//! ## Quick Example
//!
//! ```
//! use pomgen::pom::{make_pom, PomOptions};
//! use pomgen::profiles::Project;
//! use pomgen::project;
//!
//! let descriptor = project::parse(r#"
//! name: widget
//! group: org.example
//! version: "1.0.0"
//! dependencies:
//!   - [org.clojure/clojure, "1.11.1"]
//! "#).unwrap();
//!
//! let options = PomOptions { disclaimer: false, allow_snapshots: false };
//! let pom = make_pom(&Project::new(descriptor), &options).unwrap();
//! assert!(pom.contains("<artifactId>clojure</artifactId>"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Descriptor (`project`)**: the typed project map and its loader.
//! - **Profiles (`profiles`)**: named layers merged onto the descriptor.
//! - **SCM (`scm`)**: git metadata read from disk for `<scm>` and `revision`.
//! - **Dependencies (`dependencies`)**: folds profile views into one scoped list.
//! - **Tags (`pom::tags`)**: maps typed values onto an element tree.
//! - **Rendering (`element`, `xml`)**: the element tree and its serializer.
//! - **Properties (`properties`)**: the `pom.properties` manifest.

pub mod dependencies;
pub mod element;
pub mod error;
pub mod output;
pub mod path;
pub mod pom;
pub mod profiles;
pub mod project;
pub mod properties;
pub mod scm;
pub mod xml;

/// Environment variable that, when non-empty, lets a release depend on
/// snapshot versions.
pub const SNAPSHOT_OVERRIDE_ENV: &str = "POMGEN_SNAPSHOTS_IN_RELEASE";

#[cfg(test)]
mod path_proptest;
