//! # pom.properties
//!
//! The manifest Maven packages next to the POM under
//! `META-INF/maven/<group>/<artifact>/`. Output is in `java.util.Properties`
//! text format with a fixed header and no timestamp, so regenerating from an
//! unchanged checkout gives identical bytes.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::project::ProjectDescriptor;
use crate::scm;

pub const PROPERTIES_HEADER: &str = "#Generated by pomgen";

/// Escape `text` for use as a properties key or value.
///
/// A leading space is escaped in values as well as keys, which the
/// `Properties` loader accepts.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '=' | ':' | '#' | '!' => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' ' if i == 0 => escaped.push_str("\\ "),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{000c}' => escaped.push_str("\\f"),
            c if (c as u32) < 0x20 || (c as u32) > 0x7e => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(escaped, "\\u{:04X}", unit);
                }
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render the manifest for `project`.
///
/// `revision` is included only when the checkout's HEAD resolves.
pub fn make_pom_properties(project: &ProjectDescriptor) -> String {
    let mut entries = vec![
        ("version", project.version.clone()),
        ("groupId", project.group.clone()),
        ("artifactId", project.name.clone()),
    ];
    if let Some(revision) = scm::revision(project) {
        entries.push(("revision", revision));
    }

    let mut out = String::from(PROPERTIES_HEADER);
    out.push('\n');
    for (key, value) in entries {
        let _ = writeln!(out, "{}={}", escape(key), escape(&value));
    }
    out
}

/// `<compile-path>/META-INF/maven/<group>/<name>/pom.properties`
pub fn default_properties_path(project: &ProjectDescriptor) -> PathBuf {
    let compile = project
        .compile_path
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| project.root.join("target").join("classes"));
    compile
        .join("META-INF")
        .join("maven")
        .join(&project.group)
        .join(&project.name)
        .join("pom.properties")
}
