//! # XML Rendering
//!
//! Turns an [`Element`] tree into indented XML text using `xot`.
//!
//! Attributes named `xmlns` and `xmlns:<prefix>` become namespace
//! declarations; element names always live in the default namespace in
//! scope, and `prefix:name` attributes resolve through the declared
//! prefixes. [`Node::Raw`] fragments are parsed in the surrounding default
//! namespace and grafted in as-is.

use std::collections::HashMap;
use std::fmt;

use xot::{NameId, NamespaceId, Xot};

use crate::element::{Element, Node};
use crate::error::{Error, Result};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

fn xml_error(err: impl fmt::Display) -> Error {
    Error::Xml {
        message: err.to_string(),
    }
}

#[derive(Debug, Clone, Default)]
struct Scope {
    default_ns: Option<(NamespaceId, String)>,
    prefixes: HashMap<String, NamespaceId>,
}

struct Renderer {
    xot: Xot,
}

impl Renderer {
    fn new() -> Self {
        Self { xot: Xot::new() }
    }

    fn element_name(&mut self, tag: &str, scope: &Scope) -> NameId {
        match &scope.default_ns {
            Some((ns, _)) => self.xot.add_name_ns(tag, *ns),
            None => self.xot.add_name(tag),
        }
    }

    fn attribute_name(&mut self, name: &str, element: &Element, scope: &Scope) -> Result<NameId> {
        match name.split_once(':') {
            Some((prefix, local)) => {
                let ns = scope.prefixes.get(prefix).copied().ok_or_else(|| Error::Xml {
                    message: format!("unbound namespace prefix '{}' on <{}>", prefix, element.tag),
                })?;
                Ok(self.xot.add_name_ns(local, ns))
            }
            None => Ok(self.xot.add_name(name)),
        }
    }

    fn build(&mut self, element: &Element, parent_scope: &Scope) -> Result<xot::Node> {
        let mut scope = parent_scope.clone();
        let mut declarations = Vec::new();
        let mut attributes = Vec::new();

        for (name, value) in &element.attributes {
            if name == "xmlns" {
                let ns = self.xot.add_namespace(value);
                scope.default_ns = Some((ns, value.clone()));
                declarations.push((self.xot.empty_prefix(), ns));
            } else if let Some(prefix) = name.strip_prefix("xmlns:") {
                let ns = self.xot.add_namespace(value);
                scope.prefixes.insert(prefix.to_string(), ns);
                declarations.push((self.xot.add_prefix(prefix), ns));
            } else {
                attributes.push((name, value));
            }
        }

        let name = self.element_name(&element.tag, &scope);
        let node = self.xot.new_element(name);
        for (prefix, ns) in declarations {
            self.xot.namespaces_mut(node).insert(prefix, ns);
        }
        for (name, value) in attributes {
            let attribute = self.attribute_name(name, element, &scope)?;
            self.xot.attributes_mut(node).insert(attribute, value.clone());
        }

        for child in &element.children {
            match child {
                Node::Element(child) => {
                    let built = self.build(child, &scope)?;
                    self.xot.append(node, built).map_err(xml_error)?;
                }
                Node::Text(text) => {
                    let text = self.xot.new_text(text);
                    self.xot.append(node, text).map_err(xml_error)?;
                }
                Node::Raw(fragment) => self.splice(node, fragment, &scope)?,
            }
        }

        Ok(node)
    }

    /// Parse `fragment` and move its top-level nodes under `parent`.
    fn splice(&mut self, parent: xot::Node, fragment: &str, scope: &Scope) -> Result<()> {
        let wrapped = match &scope.default_ns {
            Some((_, uri)) => format!(r#"<fragment xmlns="{}">{}</fragment>"#, uri, fragment),
            None => format!("<fragment>{}</fragment>", fragment),
        };
        let document = self.xot.parse(&wrapped).map_err(|e| Error::Xml {
            message: format!("invalid XML fragment: {}", e),
        })?;
        let wrapper = self.xot.document_element(document).map_err(xml_error)?;

        // Source formatting would fight the serializer's indentation.
        let blank: Vec<xot::Node> = self
            .xot
            .descendants(wrapper)
            .filter(|n| self.xot.text_str(*n).is_some_and(|t| t.trim().is_empty()))
            .collect();
        for node in blank {
            self.xot.remove(node).map_err(xml_error)?;
        }

        let children: Vec<xot::Node> = self.xot.children(wrapper).collect();
        for child in children {
            self.xot.detach(child).map_err(xml_error)?;
            self.xot.append(parent, child).map_err(xml_error)?;
        }
        Ok(())
    }
}

/// Render `element` as an indented XML document body (no declaration).
pub fn render(element: &Element) -> Result<String> {
    let mut renderer = Renderer::new();
    let root = renderer.build(element, &Scope::default())?;
    let document = renderer
        .xot
        .new_document_with_element(root)
        .map_err(xml_error)?;

    let parameters = xot::output::xml::Parameters {
        indentation: Some(Default::default()),
        ..Default::default()
    };
    let body = renderer
        .xot
        .serialize_xml_string(parameters, document)
        .map_err(xml_error)?;
    Ok(body.trim_end().to_string())
}
