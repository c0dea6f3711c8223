//! # Tag Generation
//!
//! [`XmlTags`] maps one typed descriptor value onto an [`Element`] for a
//! semantic tag name such as `"group-id"` or `"dependencies"`. Returning
//! `None` omits the tag entirely; nothing in a POM is rendered empty.
//!
//! ## Rules
//!
//! - **Default**: strings become `<camelCaseTag>value</camelCaseTag>`;
//!   empty strings, `None` and `false` are omitted.
//! - **List**: a slice renders a wrapper named after the plural tag, with
//!   each item rendered under the singular tag (`dependencies` ->
//!   `dependency`, `repositories` -> `repository`). A list whose items all
//!   omit themselves is omitted too.
//! - **Typed rules**: dependencies, exclusions, repositories, licenses,
//!   mailing lists, parents, plugins and SCM data implement the trait with
//!   their own child layout.
//!
//! New kinds of tag are added by implementing [`XmlTags`] for their value
//! type.

use crate::element::Element;
use crate::project::{
    DependencySpec, Exclusion, License, MailingList, Parent, PomPlugin, RepositoryPolicy,
    RepositorySpec,
};
use crate::scm::ScmInfo;

/// Render a value as the element for `tag`, or `None` to leave it out.
pub trait XmlTags {
    fn xml_tags(&self, tag: &str) -> Option<Element>;
}

/// `group-id` -> `groupId`
pub fn camel_case(tag: &str) -> String {
    let mut parts = tag.split('-');
    let mut result = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// `dependencies` -> `dependency`, `repositories` -> `repository`,
/// `exclusions` -> `exclusion`
pub fn singular(tag: &str) -> String {
    if let Some(stem) = tag.strip_suffix("ies") {
        format!("{}y", stem)
    } else if let Some(stem) = tag.strip_suffix('s') {
        stem.to_string()
    } else {
        tag.to_string()
    }
}

impl XmlTags for str {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        (!self.is_empty()).then(|| Element::with_text(camel_case(tag), self))
    }
}

impl XmlTags for String {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        self.as_str().xml_tags(tag)
    }
}

impl XmlTags for bool {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        self.then(|| Element::with_text(camel_case(tag), "true"))
    }
}

impl<T: XmlTags + ?Sized> XmlTags for &T {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        (**self).xml_tags(tag)
    }
}

impl<T: XmlTags> XmlTags for Option<T> {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        self.as_ref()?.xml_tags(tag)
    }
}

impl<T: XmlTags> XmlTags for [T] {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        let item_tag = singular(tag);
        Element::new(camel_case(tag))
            .children(self.iter().map(|item| item.xml_tags(&item_tag)))
            .non_empty()
    }
}

impl<T: XmlTags> XmlTags for Vec<T> {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        self.as_slice().xml_tags(tag)
    }
}

/// Dependencies render as `<dependency>`; under `extensions` only the
/// coordinate and version are meaningful.
impl XmlTags for DependencySpec {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        let element = Element::new(camel_case(tag))
            .child(self.coordinate.group.xml_tags("group-id"))
            .child(self.coordinate.artifact.xml_tags("artifact-id"))
            .child(self.version.xml_tags("version"));

        if tag == "extension" {
            return Some(element);
        }

        Some(
            element
                .child(self.optional.xml_tags("optional"))
                .child(self.classifier.xml_tags("classifier"))
                .child(self.extension.xml_tags("type"))
                .child(self.exclusions.xml_tags("exclusions"))
                .child(self.scope.xml_tags("scope")),
        )
    }
}

impl XmlTags for Exclusion {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        Some(
            Element::new(camel_case(tag))
                .child(self.coordinate.group.xml_tags("group-id"))
                .child(self.coordinate.artifact.xml_tags("artifact-id"))
                .child(self.classifier.xml_tags("classifier"))
                .child(self.extension.xml_tags("type")),
        )
    }
}

/// `<snapshots>`/`<releases>`; enabled unless the descriptor says otherwise.
fn policy_tags(tag: &str, policy: Option<&RepositoryPolicy>) -> Element {
    let enabled = policy.map_or(true, RepositoryPolicy::enabled);
    Element::new(tag)
        .child(Element::with_text("enabled", enabled.to_string()))
        .child(policy.and_then(|p| p.update()).xml_tags("update-policy"))
        .child(policy.and_then(|p| p.checksum()).xml_tags("checksum-policy"))
}

impl XmlTags for RepositorySpec {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        Some(
            Element::new(camel_case(tag))
                .child(self.id.xml_tags("id"))
                .child(self.url.xml_tags("url"))
                .child(policy_tags("snapshots", self.snapshots.as_ref()))
                .child(policy_tags("releases", self.releases.as_ref())),
        )
    }
}

impl XmlTags for License {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        match self {
            License::Name(name) => Element::new(camel_case(tag))
                .child(name.xml_tags("name"))
                .non_empty(),
            License::Detailed {
                name,
                url,
                distribution,
                comments,
            } => Element::new(camel_case(tag))
                .child(name.xml_tags("name"))
                .child(url.xml_tags("url"))
                .child(distribution.xml_tags("distribution"))
                .child(comments.xml_tags("comments"))
                .non_empty(),
        }
    }
}

impl XmlTags for MailingList {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        Element::new(camel_case(tag))
            .child(self.name.xml_tags("name"))
            .child(self.subscribe.xml_tags("subscribe"))
            .child(self.unsubscribe.xml_tags("unsubscribe"))
            .child(self.post.xml_tags("post"))
            .child(self.archive.xml_tags("archive"))
            .child(self.other_archives.xml_tags("other-archives"))
            .non_empty()
    }
}

impl XmlTags for Parent {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        Some(
            Element::new(camel_case(tag))
                .child(self.artifact.artifact.xml_tags("artifact-id"))
                .child(self.artifact.group.xml_tags("group-id"))
                .child(self.version.xml_tags("version"))
                .child(self.relative_path.xml_tags("relative-path")),
        )
    }
}

impl XmlTags for PomPlugin {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        let element = Element::new(camel_case(tag))
            .child(self.artifact.group.xml_tags("group-id"))
            .child(self.artifact.artifact.xml_tags("artifact-id"))
            .child(self.version.xml_tags("version"));
        Some(match &self.extra {
            Some(extra) if !extra.trim().is_empty() => element.raw(extra.as_str()),
            _ => element,
        })
    }
}

impl XmlTags for ScmInfo {
    fn xml_tags(&self, tag: &str) -> Option<Element> {
        Element::new(camel_case(tag))
            .child(self.connection.xml_tags("connection"))
            .child(self.developer_connection.xml_tags("developer-connection"))
            .child(self.tag.xml_tags("tag"))
            .child(self.url.xml_tags("url"))
            .non_empty()
    }
}
