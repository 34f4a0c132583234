use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that stop a run before any root is generated.
///
/// Failures while persisting a single root's artifacts never surface here;
/// they are logged and recorded in that root's report.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The element tree document could not be deserialized.
    #[error("Failed to parse element tree {path}: {message}")]
    TreeParse { path: PathBuf, message: String },

    /// The element tree document has an extension we cannot read.
    #[error("Unsupported element tree format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedTreeFormat(PathBuf),

    /// A root was requested that the document does not contain.
    #[error("UI root '{0}' not found in element tree")]
    UnknownRoot(String),
}

impl CodegenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.into(),
            source,
        }
    }
}
