//! The top-level `<project>` element.

use crate::element::Element;
use crate::project::{DependencySpec, ProjectDescriptor};
use crate::scm::ScmInfo;

use super::build::BuildSection;
use super::tags::XmlTags;

pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd";
pub const MODEL_VERSION: &str = "4.0.0";
pub const DEFAULT_PACKAGING: &str = "jar";

/// A project descriptor together with the derived data the POM needs.
///
/// Paths in `project` are expected to be relative to the project root
/// already.
#[derive(Debug, Clone)]
pub struct PomModel<'a> {
    pub project: &'a ProjectDescriptor,
    pub scm: Option<ScmInfo>,
    /// Consolidated and scoped
    pub dependencies: Vec<DependencySpec>,
    /// Test roots of the test view
    pub test_paths: Vec<String>,
    pub test_resource_paths: Vec<String>,
}

impl XmlTags for PomModel<'_> {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        let project = self.project;
        let packaging = project
            .packaging
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_PACKAGING);
        let build = BuildSection {
            project,
            test_paths: &self.test_paths,
            test_resource_paths: &self.test_resource_paths,
        };
        let dependency_management = Element::new("dependencyManagement")
            .child(project.managed_dependencies.xml_tags("dependencies"))
            .non_empty();

        let element = Element::new(tag)
            .attribute("xmlns", POM_NAMESPACE)
            .attribute("xmlns:xsi", XSI_NAMESPACE)
            .attribute("xsi:schemaLocation", SCHEMA_LOCATION)
            .child(MODEL_VERSION.xml_tags("model-version"))
            .child(project.parent.xml_tags("parent"))
            .child(project.group.xml_tags("group-id"))
            .child(project.name.xml_tags("artifact-id"))
            .child(packaging.xml_tags("packaging"))
            .child(project.version.xml_tags("version"))
            .child(project.classifier.xml_tags("classifier"))
            .child(project.name.xml_tags("name"))
            .child(project.description.xml_tags("description"))
            .child(project.url.xml_tags("url"))
            .child(project.all_licenses().xml_tags("licenses"))
            .child(project.all_mailing_lists().xml_tags("mailing-lists"))
            .child(self.scm.xml_tags("scm"))
            .child(build.xml_tags("build"))
            .child(project.repositories.xml_tags("repositories"))
            .child(dependency_management)
            .child(self.dependencies.xml_tags("dependencies"));

        Some(match &project.pom_addition {
            Some(addition) if !addition.trim().is_empty() => element.raw(addition.as_str()),
            _ => element,
        })
    }
}
