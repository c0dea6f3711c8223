//! Path manipulation utilities for pomgen
//!
//! Descriptor paths are held as strings. The loader anchors them to the
//! project root so that profile layers and defaults all agree on absolute
//! locations; the POM wants them relative again, so generation strips the
//! root prefix back off.

use std::path::{Path, MAIN_SEPARATOR};

/// Join a relative `path` onto `root`. Absolute paths pass through.
pub fn anchor(root: &Path, path: &str) -> String {
    if Path::new(path).is_absolute() {
        path.to_string()
    } else {
        root.join(path).to_string_lossy().into_owned()
    }
}

/// Strip the `<root><separator>` prefix from `path`.
///
/// Paths outside of `root` (and every path when `root` is empty) are
/// returned unchanged. The comparison is textual.
pub fn relativize(root: &Path, path: &str) -> String {
    let root = root.to_string_lossy();
    if root.is_empty() {
        return path.to_string();
    }
    let prefix = format!("{}{}", root.trim_end_matches(MAIN_SEPARATOR), MAIN_SEPARATOR);
    path.strip_prefix(prefix.as_str()).unwrap_or(path).to_string()
}
