//! The `<build>` section.
//!
//! Maven models exactly one source and one test source directory. Extra
//! roots are registered through `build-helper-maven-plugin`, with one
//! execution per kind of root, each emitted only when it has extra roots.

use crate::element::Element;
use crate::project::ProjectDescriptor;

use super::tags::XmlTags;

pub const BUILD_HELPER_GROUP: &str = "org.codehaus.mojo";
pub const BUILD_HELPER_ARTIFACT: &str = "build-helper-maven-plugin";
pub const BUILD_HELPER_VERSION: &str = "1.7";

/// Everything `<build>` is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct BuildSection<'a> {
    pub project: &'a ProjectDescriptor,
    /// Test roots of the test view, base roots first.
    pub test_paths: &'a [String],
    /// Resource paths that only the test view adds.
    pub test_resource_paths: &'a [String],
}

/// A `<resource>` / `<testResource>` entry.
struct ResourceDir<'a>(&'a str);

impl XmlTags for ResourceDir<'_> {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        Element::new(super::tags::camel_case(tag))
            .child(self.0.xml_tags("directory"))
            .non_empty()
    }
}

/// One build-helper execution registering extra roots.
struct HelperExecution<'a> {
    goal: &'static str,
    phase: &'static str,
    sources: &'a [String],
}

impl XmlTags for HelperExecution<'_> {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        let sources = self.sources.xml_tags("sources")?;
        Some(
            Element::new(tag)
                .child(self.goal.xml_tags("id"))
                .child(self.phase.xml_tags("phase"))
                .child(Element::new("goals").child(self.goal.xml_tags("goal")))
                .child(Element::new("configuration").child(sources)),
        )
    }
}

fn build_helper_plugin(extra_sources: &[String], extra_tests: &[String]) -> Option<Element> {
    let executions = [
        HelperExecution {
            goal: "add-source",
            phase: "generate-sources",
            sources: extra_sources,
        },
        HelperExecution {
            goal: "add-test-source",
            phase: "generate-test-sources",
            sources: extra_tests,
        },
    ];
    let executions = executions.xml_tags("executions")?;
    Some(
        Element::new("plugin")
            .child(BUILD_HELPER_GROUP.xml_tags("group-id"))
            .child(BUILD_HELPER_ARTIFACT.xml_tags("artifact-id"))
            .child(BUILD_HELPER_VERSION.xml_tags("version"))
            .child(executions),
    )
}

/// First entry and the rest.
fn split_first(paths: &[String]) -> (Option<&String>, &[String]) {
    match paths.split_first() {
        Some((first, rest)) => (Some(first), rest),
        None => (None, &[]),
    }
}

fn resources(paths: &[String], tag: &str) -> Option<Element> {
    paths
        .iter()
        .map(|p| ResourceDir(p))
        .collect::<Vec<_>>()
        .xml_tags(tag)
}

impl XmlTags for BuildSection<'_> {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        let project = self.project;
        let source_roots: Vec<String> = project
            .source_paths
            .iter()
            .chain(&project.java_source_paths)
            .cloned()
            .collect();
        let (source_dir, extra_sources) = split_first(&source_roots);
        let (test_dir, extra_tests) = split_first(self.test_paths);

        let plugins = Element::new("plugins")
            .child(build_helper_plugin(extra_sources, extra_tests))
            .children(project.pom_plugins.iter().map(|p| p.xml_tags("plugin")))
            .non_empty();

        Element::new(tag)
            .child(source_dir.xml_tags("source-directory"))
            .child(test_dir.xml_tags("test-source-directory"))
            .child(resources(&project.resource_paths, "resources"))
            .child(resources(self.test_resource_paths, "test-resources"))
            .child(project.extensions.xml_tags("extensions"))
            .child(project.target_path.xml_tags("directory"))
            .child(project.compile_path.xml_tags("output-directory"))
            .child(plugins)
            .non_empty()
    }
}
