//! A small owned element tree for building XML documents.
//!
//! Builders accept `Option<Element>` children and silently drop `None`, so a
//! missing value never turns into an empty tag: omission happens while the
//! tree is built, not when it is serialized.

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// An XML fragment spliced in verbatim at render time.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// `<tag>text</tag>`
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(tag).text(text)
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element; `None` is dropped.
    pub fn child(mut self, child: impl Into<Option<Element>>) -> Self {
        if let Some(child) = child.into() {
            self.children.push(Node::Element(child));
        }
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = Option<Element>>) -> Self {
        children
            .into_iter()
            .fold(self, |element, child| element.child(child))
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn raw(mut self, fragment: impl Into<String>) -> Self {
        self.children.push(Node::Raw(fragment.into()));
        self
    }

    /// `None` when the element ended up with no children at all.
    pub fn non_empty(self) -> Option<Self> {
        (!self.children.is_empty()).then_some(self)
    }

    /// Child elements, skipping text and raw nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First child element named `tag`.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.elements().find(|e| e.tag == tag)
    }

    /// Descend through child elements by tag name.
    pub fn path(&self, tags: &[&str]) -> Option<&Element> {
        tags.iter().try_fold(self, |element, tag| element.find(tag))
    }

    /// Concatenated text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn child_tags(&self) -> Vec<&str> {
        self.elements().map(|e| e.tag.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_drops_none() {
        let element = Element::new("dependency")
            .child(Element::with_text("groupId", "org.example"))
            .child(None::<Element>)
            .child(Some(Element::with_text("artifactId", "widget")));
        assert_eq!(element.child_tags(), vec!["groupId", "artifactId"]);
    }

    #[test]
    fn test_children_and_non_empty() {
        let empty = Element::new("licenses").children(vec![None, None]);
        assert_eq!(empty.non_empty(), None);

        let one = Element::new("licenses").children(vec![None, Some(Element::new("license"))]);
        assert_eq!(one.non_empty().unwrap().child_tags(), vec!["license"]);
    }

    #[test]
    fn test_path_and_text_content() {
        let build = Element::new("build").child(
            Element::new("resources").child(
                Element::new("resource").child(Element::with_text("directory", "resources")),
            ),
        );
        assert_eq!(
            build
                .path(&["resources", "resource", "directory"])
                .unwrap()
                .text_content(),
            "resources"
        );
        assert!(build.path(&["testResources"]).is_none());
        assert_eq!(build.path(&[]), Some(&build));
    }

    #[test]
    fn test_attributes_keep_order() {
        let element = Element::new("project")
            .attribute("xmlns", "urn:a")
            .attribute("xmlns:xsi", "urn:b");
        assert_eq!(element.attributes[0].0, "xmlns");
        assert_eq!(element.attributes[1].0, "xmlns:xsi");
    }
}
