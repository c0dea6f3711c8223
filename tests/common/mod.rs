//! Shared test utilities for the CLI end-to-end tests.
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_project(descriptors::MINIMAL);
//!     fixture.command().arg("pom").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::descriptors;
    pub use super::TestFixture;
}

/// Project descriptors used across tests.
#[allow(dead_code)]
pub mod descriptors {
    /// Release project with a single release dependency.
    pub const MINIMAL: &str = r#"
name: widget
group: org.example
version: "1.0.0"
dependencies:
  - [org.clojure/clojure, "1.11.1"]
"#;

    /// Release project depending on a snapshot.
    pub const SNAPSHOT_DEPENDENCY: &str = r#"
name: widget
group: org.example
version: "1.0.0"
dependencies:
  - [org.example/lib, "0.2.0-SNAPSHOT"]
"#;

    /// Project using profiles, extra roots and descriptive metadata.
    pub const FULL: &str = r#"
name: widget
group: org.example
version: "2.1.0-SNAPSHOT"
description: A small widget
url: https://example.org/widget
license:
  name: Eclipse Public License 2.0
  url: https://www.eclipse.org/legal/epl-2.0/
source-paths: [src, src-gen]
java-source-paths: java
dependencies:
  - [org.clojure/clojure, "1.11.1"]
  - artifact: org.slf4j/slf4j-api
    version: "2.0.9"
    exclusions: [org.example/noise]
repositories:
  - id: clojars
    url: https://repo.clojars.org/
profiles:
  provided:
    dependencies:
      - [javax.servlet/servlet-api, "2.5"]
  dev:
    dependencies:
      - [criterium, "0.4.6"]
    resource-paths: [dev-resources]
  uberjar:
    compile-path: target/uber/classes
"#;

    /// Not a mapping.
    pub const INVALID_YAML: &str = "name: [unclosed";
}

/// A temporary project directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `project.yaml` with the given content.
    pub fn with_project(self, content: &str) -> Self {
        self.with_file("project.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a `.git` directory whose HEAD resolves to `sha` on `main` and
    /// whose origin is `origin`.
    #[allow(dead_code)]
    pub fn with_git(self, sha: &str, origin: &str) -> Self {
        self.with_file(".git/HEAD", "ref: refs/heads/main\n")
            .with_file(".git/refs/heads/main", &format!("{}\n", sha))
            .with_file(
                ".git/config",
                &format!(
                    "[core]\n\tbare = false\n[remote \"origin\"]\n\turl = {}\n\tfetch = +refs/heads/*:refs/remotes/origin/*\n",
                    origin
                ),
            )
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Canonical path of the fixture directory, as the CLI reports it.
    #[allow(dead_code)]
    pub fn canonical_path(&self) -> PathBuf {
        self.path().canonicalize().expect("Failed to canonicalize")
    }

    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    #[allow(dead_code)]
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read output")
    }

    /// A `pomgen` command running in the fixture directory with the
    /// pomgen, logging and backtrace environment variables cleared.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pomgen");
        cmd.current_dir(self.path())
            .env_remove("POMGEN_SNAPSHOTS_IN_RELEASE")
            .env_remove("POMGEN_PROJECT")
            .env_remove("RUST_LOG")
            .env_remove("RUST_BACKTRACE")
            .env_remove("RUST_LIB_BACKTRACE");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_project() {
        let fixture = TestFixture::new().with_project(descriptors::MINIMAL);
        assert!(fixture.path().join("project.yaml").exists());
    }

    #[test]
    fn test_descriptors_are_valid_yaml() {
        for descriptor in [
            descriptors::MINIMAL,
            descriptors::SNAPSHOT_DEPENDENCY,
            descriptors::FULL,
        ] {
            serde_yaml::from_str::<serde_yaml::Value>(descriptor).expect("descriptor should be YAML");
        }
        assert!(serde_yaml::from_str::<serde_yaml::Value>(descriptors::INVALID_YAML).is_err());
    }
}
