//! Error types for `Usbong`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `Usbong` operations.
///
/// Only construction and I/O failures surface here. Missing translations,
/// hints, assets and malformed node names degrade silently, and navigation
/// reports rejection through `bool` flags instead.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Document Errors ====================
    /// The document root is not a directory.
    #[error("not a tree directory: {path}")]
    NotADirectory {
        /// The path that was given as the document root.
        path: PathBuf,
    },

    /// The primary XML file is missing from the document directory.
    #[error("tree document not found: {path}")]
    DocumentNotFound {
        /// The expected path of the primary XML file.
        path: PathBuf,
    },

    /// The root element is not a `process-definition`.
    #[error("invalid tree document: {0}")]
    InvalidDocument(String),

    /// The document has no `start-state`, or its transition has no target.
    #[error("tree document has no start state")]
    MissingStartState,

    /// The start state points at a node that does not exist.
    #[error("start node not found: {name}")]
    StartNodeNotFound {
        /// The unresolved node name.
        name: String,
    },

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parsing or serialization error.
    #[error("TOML error: {0}")]
    TomlError(String),

    // ==================== File System Errors ====================
    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::TomlError(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::TomlError(err.to_string())
    }
}

/// A specialized Result type for `Usbong` operations.
pub type Result<T> = std::result::Result<T, Error>;
