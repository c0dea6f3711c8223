//! Property-based tests for path and tag-name helpers.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{anchor, relativize};
    use crate::pom::tags::{camel_case, singular};
    use proptest::prelude::*;
    use std::path::Path;

    // ============================================================================
    // relativize / anchor property tests
    // ============================================================================

    proptest! {
        /// Property: anchoring a relative path and relativizing it again is the identity
        #[test]
        fn relativize_undoes_anchor(
            root in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
            rel in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        ) {
            let root = Path::new(&root);
            let anchored = anchor(root, &rel);
            prop_assert_eq!(relativize(root, &anchored), rel);
        }

        /// Property: paths that do not start with the root are unchanged
        #[test]
        fn relativize_ignores_foreign_paths(
            root in "/[a-m]{1,8}",
            path in "/[n-z]{1,8}(/[a-z]{1,8}){0,3}",
        ) {
            prop_assert_eq!(relativize(Path::new(&root), &path), path);
        }

        /// Property: relativize never lengthens a path
        #[test]
        fn relativize_never_grows(root in "(/[a-z]{0,4}){0,3}", path in "[a-z/]{0,20}") {
            let result = relativize(Path::new(&root), &path);
            prop_assert!(result.len() <= path.len());
        }
    }

    // ============================================================================
    // tag name property tests
    // ============================================================================

    proptest! {
        /// Property: camel-cased tag names never contain a dash
        #[test]
        fn camel_case_removes_dashes(tag in "[a-z]{1,6}(-[a-z]{1,6}){0,4}") {
            prop_assert!(!camel_case(&tag).contains('-'));
        }

        /// Property: single-word tags are unchanged by camel-casing
        #[test]
        fn camel_case_keeps_single_words(tag in "[a-z]{1,12}") {
            prop_assert_eq!(camel_case(&tag), tag);
        }

        /// Property: a plural formed with a trailing "s" singularizes back
        #[test]
        fn singular_strips_plural_s(word in "[a-z]{1,10}[b-df-hj-np-tv-xz]") {
            let plural = format!("{}s", word);
            prop_assert_eq!(singular(&plural), word);
        }
    }
}
