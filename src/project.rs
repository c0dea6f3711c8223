//! # Project Descriptor Schema and Loading
//!
//! This module defines the in-memory project descriptor that the POM
//! generator consumes, and the logic for loading it from a YAML (or JSON)
//! file on disk.
//!
//! ## Key Components
//!
//! - **`ProjectDescriptor`**: The full project map: identity (`group`, `name`,
//!   `version`), metadata (`description`, `url`, `license`, ...), filesystem
//!   paths, dependencies, repositories and named `profiles`.
//!
//! - **`Coordinate`**: A `group/artifact` pair. An unqualified coordinate such
//!   as `clojure` uses the artifact name as its group.
//!
//! - **`DependencySpec`**: One dependency. In a descriptor it may be written
//!   either compactly as `[group/artifact, "1.0"]` or as a map with
//!   `artifact`, `version`, `scope`, `classifier`, `extension`, `optional`
//!   and `exclusions` keys.
//!
//! ## Loading
//!
//! `from_file` reads the descriptor, picks the parser from the file
//! extension, defaults `root` to the directory holding the file and anchors
//! every relative path setting to that root. `parse` does the same for an
//! in-memory YAML string, anchoring only when the document names a `root`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::path::anchor;

/// Marker that identifies a non-release version string.
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Default descriptor file name looked up by the CLI.
pub const DEFAULT_DESCRIPTOR: &str = "project.yaml";

/// A `group/artifact` pair identifying a Maven artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Parse a `group/artifact` symbol. A bare `artifact` is its own group.
    pub fn parse(symbol: &str) -> Result<Self> {
        let symbol = symbol.trim();
        let invalid = |message: &str| Error::InvalidCoordinate {
            coordinate: symbol.to_string(),
            message: message.to_string(),
        };

        match symbol.split_once('/') {
            None if symbol.is_empty() => Err(invalid("coordinate is empty")),
            None => Ok(Self::new(symbol, symbol)),
            Some((group, artifact)) => {
                if group.is_empty() || artifact.is_empty() {
                    Err(invalid("group and artifact must both be non-empty"))
                } else if artifact.contains('/') {
                    Err(invalid("too many '/' separators"))
                } else {
                    Ok(Self::new(group, artifact))
                }
            }
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group == self.artifact {
            write!(f, "{}", self.artifact)
        } else {
            write!(f, "{}/{}", self.group, self.artifact)
        }
    }
}

impl TryFrom<String> for Coordinate {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        Self::parse(&symbol).map_err(serde::de::Error::custom)
    }
}

/// An artifact excluded from a dependency's transitive graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawExclusion")]
pub struct Exclusion {
    pub coordinate: Coordinate,
    pub classifier: Option<String>,
    pub extension: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExclusion {
    Bare(String),
    Detailed {
        artifact: String,
        #[serde(default)]
        classifier: Option<String>,
        #[serde(default)]
        extension: Option<String>,
    },
}

impl TryFrom<RawExclusion> for Exclusion {
    type Error = Error;

    fn try_from(raw: RawExclusion) -> Result<Self> {
        match raw {
            RawExclusion::Bare(symbol) => Ok(Self {
                coordinate: Coordinate::parse(&symbol)?,
                classifier: None,
                extension: None,
            }),
            RawExclusion::Detailed {
                artifact,
                classifier,
                extension,
            } => Ok(Self {
                coordinate: Coordinate::parse(&artifact)?,
                classifier,
                extension,
            }),
        }
    }
}

/// A single dependency declaration.
///
/// Two specs with the same [`Coordinate`] are the same dependency for
/// deduplication purposes, whatever their versions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDependency")]
pub struct DependencySpec {
    pub coordinate: Coordinate,
    /// May be absent for entries whose version comes from dependency management.
    pub version: Option<String>,
    pub classifier: Option<String>,
    /// Maven packaging type, rendered as `<type>`.
    pub extension: Option<String>,
    pub scope: Option<String>,
    pub optional: bool,
    pub exclusions: Vec<Exclusion>,
}

impl DependencySpec {
    pub fn new(coordinate: Coordinate, version: impl Into<String>) -> Self {
        Self {
            coordinate,
            version: Some(version.into()),
            classifier: None,
            extension: None,
            scope: None,
            optional: false,
            exclusions: Vec::new(),
        }
    }

    /// The identity key used for deduplication.
    pub fn identity(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn with_scope(&self, scope: &str) -> Self {
        Self {
            scope: Some(scope.to_string()),
            ..self.clone()
        }
    }

    pub fn is_snapshot(&self) -> bool {
        self.version
            .as_deref()
            .is_some_and(|v| v.contains(SNAPSHOT_MARKER))
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {}", self.coordinate, version),
            None => write!(f, "{}", self.coordinate),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDependency {
    Compact(Vec<String>),
    Detailed(DetailedDependency),
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct DetailedDependency {
    artifact: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    classifier: Option<String>,
    #[serde(default)]
    extension: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    exclusions: Vec<Exclusion>,
}

impl TryFrom<RawDependency> for DependencySpec {
    type Error = Error;

    fn try_from(raw: RawDependency) -> Result<Self> {
        match raw {
            RawDependency::Compact(parts) => match parts.as_slice() {
                [artifact] => Ok(Self {
                    version: None,
                    ..Self::new(Coordinate::parse(artifact)?, "")
                }),
                [artifact, version] => Ok(Self::new(Coordinate::parse(artifact)?, version.as_str())),
                _ => Err(Error::InvalidCoordinate {
                    coordinate: parts.join(" "),
                    message: "compact form is [group/artifact, version]".to_string(),
                }),
            },
            RawDependency::Detailed(d) => Ok(Self {
                coordinate: Coordinate::parse(&d.artifact)?,
                version: d.version,
                classifier: d.classifier,
                extension: d.extension,
                scope: d.scope,
                optional: d.optional,
                exclusions: d.exclusions,
            }),
        }
    }
}

/// Snapshot or release policy of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RepositoryPolicy {
    Enabled(bool),
    Detailed {
        #[serde(default)]
        enabled: Option<bool>,
        /// Rendered as `updatePolicy` (e.g. `daily`, `always`)
        #[serde(default)]
        update: Option<String>,
        /// Rendered as `checksumPolicy` (e.g. `fail`, `warn`)
        #[serde(default)]
        checksum: Option<String>,
    },
}

impl RepositoryPolicy {
    pub fn enabled(&self) -> bool {
        match self {
            Self::Enabled(enabled) => *enabled,
            Self::Detailed { enabled, .. } => enabled.unwrap_or(true),
        }
    }

    pub fn update(&self) -> Option<&str> {
        match self {
            Self::Enabled(_) => None,
            Self::Detailed { update, .. } => update.as_deref(),
        }
    }

    pub fn checksum(&self) -> Option<&str> {
        match self {
            Self::Enabled(_) => None,
            Self::Detailed { checksum, .. } => checksum.as_deref(),
        }
    }
}

/// A remote artifact repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RepositorySpec {
    pub id: String,
    pub url: String,
    /// Unspecified means enabled.
    #[serde(default)]
    pub snapshots: Option<RepositoryPolicy>,
    /// Unspecified means enabled.
    #[serde(default)]
    pub releases: Option<RepositoryPolicy>,
}

impl RepositorySpec {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            snapshots: None,
            releases: None,
        }
    }
}

/// A license, either just its name or the full Maven license record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum License {
    Name(String),
    Detailed {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        distribution: Option<String>,
        #[serde(default)]
        comments: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MailingList {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subscribe: Option<String>,
    #[serde(default)]
    pub unsubscribe: Option<String>,
    #[serde(default)]
    pub post: Option<String>,
    #[serde(default)]
    pub archive: Option<String>,
    #[serde(default)]
    pub other_archives: Vec<String>,
}

/// The `scm` section of a descriptor.
///
/// Carrying any of `url`, `connection`, `developer-connection` or `tag`
/// makes it an explicit override. Otherwise the SCM data is discovered from
/// the `.git` directory under `dir` (relative to the root) or the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScmConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(default)]
    pub developer_connection: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl ScmConfig {
    pub fn is_explicit(&self) -> bool {
        self.url.is_some()
            || self.connection.is_some()
            || self.developer_connection.is_some()
            || self.tag.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Parent {
    pub artifact: Coordinate,
    pub version: String,
    #[serde(default)]
    pub relative_path: Option<String>,
}

/// A Maven plugin to list under `<build><plugins>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PomPlugin {
    pub artifact: Coordinate,
    #[serde(default)]
    pub version: Option<String>,
    /// Raw XML appended inside `<plugin>` (e.g. a `<configuration>` block)
    #[serde(default)]
    pub extra: Option<String>,
}

/// Settings a named profile layers on top of the base descriptor.
///
/// Sequences are appended to the base entries, scalar paths replace them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Profile {
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
    #[serde(default)]
    pub managed_dependencies: Vec<DependencySpec>,
    #[serde(default)]
    pub repositories: Vec<RepositorySpec>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub source_paths: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub java_source_paths: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub test_paths: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub resource_paths: Vec<String>,
    #[serde(default)]
    pub target_path: Option<String>,
    #[serde(default)]
    pub compile_path: Option<String>,
}

/// The project map the POM is generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectDescriptor {
    pub name: String,
    /// Defaults to `name` when left out.
    #[serde(default)]
    pub group: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub mailing_list: Option<MailingList>,
    #[serde(default)]
    pub mailing_lists: Vec<MailingList>,
    #[serde(default)]
    pub scm: Option<ScmConfig>,
    #[serde(default)]
    pub parent: Option<Parent>,
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
    #[serde(default)]
    pub managed_dependencies: Vec<DependencySpec>,
    #[serde(default)]
    pub repositories: Vec<RepositorySpec>,
    #[serde(default)]
    pub extensions: Vec<DependencySpec>,
    #[serde(default)]
    pub pom_plugins: Vec<PomPlugin>,
    #[serde(default = "default_resource_paths", deserialize_with = "one_or_many")]
    pub resource_paths: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub java_source_paths: Vec<String>,
    #[serde(default = "default_source_paths", deserialize_with = "one_or_many")]
    pub source_paths: Vec<String>,
    #[serde(default = "default_test_paths", deserialize_with = "one_or_many")]
    pub test_paths: Vec<String>,
    #[serde(default = "default_target_path")]
    pub target_path: Option<String>,
    #[serde(default = "default_compile_path")]
    pub compile_path: Option<String>,
    /// Raw XML appended verbatim at the end of `<project>`.
    #[serde(default)]
    pub pom_addition: Option<String>,
    #[serde(default)]
    pub root: PathBuf,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

fn default_source_paths() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_test_paths() -> Vec<String> {
    vec!["test".to_string()]
}

fn default_resource_paths() -> Vec<String> {
    vec!["resources".to_string()]
}

fn default_target_path() -> Option<String> {
    Some("target".to_string())
}

fn default_compile_path() -> Option<String> {
    Some("target/classes".to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accept either a single path string or a sequence of them.
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(path) => vec![path],
        OneOrMany::Many(paths) => paths,
    })
}

impl ProjectDescriptor {
    /// A descriptor with only the required identity filled in.
    pub fn new(group: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn is_snapshot(&self) -> bool {
        self.version.contains(SNAPSHOT_MARKER)
    }

    /// Licenses to publish; the `licenses` sequence wins over `license`.
    pub fn all_licenses(&self) -> Vec<&License> {
        if self.licenses.is_empty() {
            self.license.iter().collect()
        } else {
            self.licenses.iter().collect()
        }
    }

    pub fn all_mailing_lists(&self) -> Vec<&MailingList> {
        self.mailing_list.iter().chain(&self.mailing_lists).collect()
    }

    /// Rewrite every configured filesystem path setting with `f`.
    pub fn map_paths(&mut self, f: impl Fn(&str) -> String) {
        for paths in [
            &mut self.source_paths,
            &mut self.java_source_paths,
            &mut self.test_paths,
            &mut self.resource_paths,
        ] {
            for path in paths.iter_mut() {
                *path = f(path);
            }
        }
        for path in [&mut self.target_path, &mut self.compile_path]
            .into_iter()
            .flatten()
        {
            *path = f(path);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::DescriptorParse {
                message: "project name must not be empty".to_string(),
                hint: Some("Add 'name: my-project' to the descriptor".to_string()),
            });
        }
        if self.version.trim().is_empty() {
            return Err(Error::DescriptorParse {
                message: "project version must not be empty".to_string(),
                hint: Some("Add 'version: 0.1.0-SNAPSHOT' to the descriptor".to_string()),
            });
        }
        Ok(())
    }

    /// Fill loader defaults and anchor relative paths to `root`.
    fn normalize(mut self) -> Result<Self> {
        self.validate()?;
        if self.group.trim().is_empty() {
            self.group = self.name.clone();
        }
        if !self.root.as_os_str().is_empty() {
            let root = self.root.clone();
            self.map_paths(|path| anchor(&root, path));
            for profile in self.profiles.values_mut() {
                profile.map_paths(|path| anchor(&root, path));
            }
        }
        Ok(self)
    }
}

impl Profile {
    fn map_paths(&mut self, f: impl Fn(&str) -> String) {
        for paths in [
            &mut self.source_paths,
            &mut self.java_source_paths,
            &mut self.test_paths,
            &mut self.resource_paths,
        ] {
            for path in paths.iter_mut() {
                *path = f(path);
            }
        }
        for path in [&mut self.target_path, &mut self.compile_path]
            .into_iter()
            .flatten()
        {
            *path = f(path);
        }
    }
}

fn parse_error(err: impl fmt::Display) -> Error {
    let message = err.to_string();
    let hint = message.contains("did not match any variant").then(|| {
        "Write dependencies as [group/artifact, \"1.0\"] or as a map with an 'artifact' key, \
         and quote numeric versions"
            .to_string()
    });
    Error::DescriptorParse { message, hint }
}

/// Parse a YAML descriptor.
pub fn parse(content: &str) -> Result<ProjectDescriptor> {
    let descriptor: ProjectDescriptor = serde_yaml::from_str(content).map_err(parse_error)?;
    descriptor.normalize()
}

/// Parse a JSON descriptor.
pub fn parse_json(content: &str) -> Result<ProjectDescriptor> {
    let descriptor: ProjectDescriptor = serde_json::from_str(content).map_err(parse_error)?;
    descriptor.normalize()
}

/// Load a descriptor from disk.
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML. When
/// the descriptor names no `root`, the directory containing the file is used.
pub fn from_file(path: &Path) -> Result<ProjectDescriptor> {
    let content = std::fs::read_to_string(path)?;
    let mut descriptor: ProjectDescriptor =
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
            serde_json::from_str(&content).map_err(parse_error)?
        } else {
            serde_yaml::from_str(&content).map_err(parse_error)?
        };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    descriptor.root = if descriptor.root.as_os_str().is_empty() {
        dir
    } else {
        dir.join(&descriptor.root)
    };

    descriptor.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
name: widget
group: org.example
version: "1.0.0"
"#;

    #[test]
    fn test_coordinate_parse_qualified() {
        let coordinate = Coordinate::parse("org.clojure/clojure").unwrap();
        assert_eq!(coordinate.group, "org.clojure");
        assert_eq!(coordinate.artifact, "clojure");
        assert_eq!(coordinate.to_string(), "org.clojure/clojure");
    }

    #[test]
    fn test_coordinate_parse_unqualified_defaults_group() {
        let coordinate = Coordinate::parse("ring").unwrap();
        assert_eq!(coordinate.group, "ring");
        assert_eq!(coordinate.artifact, "ring");
        assert_eq!(coordinate.to_string(), "ring");
    }

    #[test]
    fn test_coordinate_parse_rejects_malformed() {
        assert!(Coordinate::parse("").is_err());
        assert!(Coordinate::parse("/artifact").is_err());
        assert!(Coordinate::parse("group/").is_err());
        assert!(Coordinate::parse("a/b/c").is_err());
    }

    #[test]
    fn test_parse_minimal_applies_defaults() {
        let project = parse(MINIMAL).unwrap();
        assert_eq!(project.name, "widget");
        assert_eq!(project.group, "org.example");
        assert_eq!(project.source_paths, vec!["src"]);
        assert_eq!(project.test_paths, vec!["test"]);
        assert_eq!(project.resource_paths, vec!["resources"]);
        assert_eq!(project.target_path.as_deref(), Some("target"));
        assert_eq!(project.compile_path.as_deref(), Some("target/classes"));
        assert!(project.dependencies.is_empty());
        assert!(!project.is_snapshot());
    }

    #[test]
    fn test_parse_group_defaults_to_name() {
        let project = parse("name: solo\nversion: \"0.1.0-SNAPSHOT\"\n").unwrap();
        assert_eq!(project.group, "solo");
        assert!(project.is_snapshot());
    }

    #[test]
    fn test_parse_rejects_empty_version() {
        let err = parse("name: solo\nversion: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("version must not be empty"));
    }

    #[test]
    fn test_parse_rejects_missing_name() {
        assert!(parse("version: \"1.0\"\n").is_err());
    }

    #[test]
    fn test_parse_dependencies_both_forms() {
        let project = parse(
            r#"
name: widget
version: "1.0.0"
dependencies:
  - [org.clojure/clojure, "1.11.1"]
  - artifact: ring/ring-core
    version: "1.9.0"
    scope: test
    optional: true
    classifier: sources
    extension: jar
    exclusions:
      - commons-io
      - artifact: org.slf4j/slf4j-api
        classifier: tests
"#,
        )
        .unwrap();

        assert_eq!(project.dependencies.len(), 2);
        let clojure = &project.dependencies[0];
        assert_eq!(clojure.coordinate, Coordinate::new("org.clojure", "clojure"));
        assert_eq!(clojure.version.as_deref(), Some("1.11.1"));
        assert_eq!(clojure.scope, None);

        let ring = &project.dependencies[1];
        assert_eq!(ring.scope.as_deref(), Some("test"));
        assert!(ring.optional);
        assert_eq!(ring.classifier.as_deref(), Some("sources"));
        assert_eq!(ring.exclusions.len(), 2);
        assert_eq!(ring.exclusions[0].coordinate, Coordinate::new("commons-io", "commons-io"));
        assert_eq!(ring.exclusions[1].classifier.as_deref(), Some("tests"));
    }

    #[test]
    fn test_parse_dependency_without_version() {
        let project = parse("name: w\nversion: \"1\"\nmanaged-dependencies:\n  - [org.example/bom]\n").unwrap();
        assert_eq!(project.managed_dependencies[0].version, None);
    }

    #[test]
    fn test_parse_paths_accept_single_string() {
        let project = parse("name: w\nversion: \"1\"\nsource-paths: src/main\ntest-paths: [t1, t2]\n").unwrap();
        assert_eq!(project.source_paths, vec!["src/main"]);
        assert_eq!(project.test_paths, vec!["t1", "t2"]);
    }

    #[test]
    fn test_parse_anchors_relative_paths_to_root() {
        let project = parse(
            r#"
name: w
version: "1"
root: /home/u/proj
source-paths: [src, /elsewhere/gen]
profiles:
  dev:
    resource-paths: [dev-resources]
"#,
        )
        .unwrap();
        assert_eq!(project.source_paths, vec!["/home/u/proj/src", "/elsewhere/gen"]);
        assert_eq!(project.target_path.as_deref(), Some("/home/u/proj/target"));
        assert_eq!(
            project.profiles["dev"].resource_paths,
            vec!["/home/u/proj/dev-resources"]
        );
    }

    #[test]
    fn test_parse_license_and_repositories() {
        let project = parse(
            r#"
name: w
version: "1"
license: EPL-2.0
licenses:
  - name: MIT
    url: https://opensource.org/licenses/MIT
repositories:
  - id: clojars
    url: https://repo.clojars.org/
    snapshots: false
    releases:
      update: daily
      checksum: fail
"#,
        )
        .unwrap();
        assert_eq!(project.license, Some(License::Name("EPL-2.0".to_string())));
        assert_eq!(project.all_licenses().len(), 1);
        assert!(matches!(project.all_licenses()[0], License::Detailed { .. }));

        let repo = &project.repositories[0];
        assert!(!repo.snapshots.as_ref().unwrap().enabled());
        let releases = repo.releases.as_ref().unwrap();
        assert!(releases.enabled());
        assert_eq!(releases.update(), Some("daily"));
        assert_eq!(releases.checksum(), Some("fail"));
    }

    #[test]
    fn test_parse_scm_config() {
        let project = parse("name: w\nversion: \"1\"\nscm:\n  dir: ..\n").unwrap();
        let scm = project.scm.unwrap();
        assert_eq!(scm.dir.as_deref(), Some(".."));
        assert!(!scm.is_explicit());

        let project = parse("name: w\nversion: \"1\"\nscm:\n  url: https://example.org/w\n").unwrap();
        assert!(project.scm.unwrap().is_explicit());
    }

    #[test]
    fn test_parse_json_descriptor() {
        let project = parse_json(
            r#"{"name": "w", "group": "g", "version": "2.0",
                "dependencies": [["a/b", "1.0"]]}"#,
        )
        .unwrap();
        assert_eq!(project.group, "g");
        assert_eq!(project.dependencies[0].coordinate, Coordinate::new("a", "b"));
    }

    #[test]
    fn test_from_file_defaults_root_to_parent_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("project.yaml");
        std::fs::write(&path, MINIMAL).unwrap();

        let project = from_file(&path).unwrap();
        let root = temp.path().canonicalize().unwrap();
        assert_eq!(project.root, root);
        assert_eq!(
            project.target_path.as_deref(),
            root.join("target").to_str()
        );
    }

    #[test]
    fn test_from_file_json_by_extension() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("project.json");
        std::fs::write(&path, r#"{"name": "w", "version": "1.0"}"#).unwrap();
        assert_eq!(from_file(&path).unwrap().name, "w");
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = from_file(Path::new("/nonexistent/project.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_dependency_display_and_snapshot() {
        let dep = DependencySpec::new(Coordinate::parse("a/b").unwrap(), "1.0-SNAPSHOT");
        assert_eq!(dep.to_string(), "a/b 1.0-SNAPSHOT");
        assert!(dep.is_snapshot());
        assert_eq!(dep.with_scope("test").scope.as_deref(), Some("test"));
    }

    #[test]
    fn test_map_paths_touches_every_path_setting() {
        let mut project = ProjectDescriptor::new("g", "n", "1");
        project.source_paths = vec!["a".into()];
        project.java_source_paths = vec!["b".into()];
        project.test_paths = vec!["c".into()];
        project.resource_paths = vec!["d".into()];
        project.target_path = Some("e".into());
        project.compile_path = Some("f".into());
        project.map_paths(|p| format!("x/{}", p));
        assert_eq!(project.source_paths, vec!["x/a"]);
        assert_eq!(project.java_source_paths, vec!["x/b"]);
        assert_eq!(project.test_paths, vec!["x/c"]);
        assert_eq!(project.resource_paths, vec!["x/d"]);
        assert_eq!(project.target_path.as_deref(), Some("x/e"));
        assert_eq!(project.compile_path.as_deref(), Some("x/f"));
    }
}
