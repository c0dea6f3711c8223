//! # Error Handling
//!
//! This module defines the centralized error type for `pomgen`. It uses the
//! `thiserror` library to describe every failure the library can report,
//! with messages that are meant to be shown to the user as-is.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum of failure modes. Each variant carries the
//!   context needed to explain what went wrong.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Only a handful of conditions are fatal during generation:
//!
//! - The project descriptor could not be read or parsed.
//! - A dependency coordinate is malformed.
//! - A release version depends on snapshot versions and no override is set.
//! - A raw XML fragment (`pom-addition`, plugin `extra`) is not well formed.
//!
//! Version-control lookups never produce an `Error`; a missing `.git`
//! directory or unreadable ref simply means the SCM section is left out.

use thiserror::Error;

use crate::SNAPSHOT_OVERRIDE_ENV;

/// Main error type for pomgen operations
#[derive(Error, Debug)]
pub enum Error {
    /// The project descriptor could not be parsed.
    ///
    /// Includes the parser message and optionally a hint about how to fix it.
    #[error("Descriptor parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    DescriptorParse {
        message: String,
        /// Optional hint for how to fix the descriptor
        hint: Option<String>,
    },

    /// A dependency or artifact coordinate was malformed.
    #[error("Invalid coordinate '{coordinate}': {message}")]
    InvalidCoordinate { coordinate: String, message: String },

    /// A release version depends on one or more snapshot versions.
    #[error(
        "Release versions may not depend upon snapshots.\n\
         Project version {version} depends on: {}\n\
         Freeze snapshots to dated versions or set the {} environment variable to override.",
        dependencies.join(", "),
        SNAPSHOT_OVERRIDE_ENV
    )]
    SnapshotInRelease {
        version: String,
        /// `group/artifact version` of each offending dependency
        dependencies: Vec<String>,
    },

    /// Building or serializing the XML document failed.
    #[error("XML error: {message}")]
    Xml { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
