//! Error type shared by every stage of the build.
//!
//! Each variant maps to one way the run can abort. Nothing is retried: errors travel straight
//! back to `main`, which prints them and exits non-zero.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
/// Fatal conditions raised while reading the document or writing the viewer.
pub enum Error {
    /// The source document does not exist.
    #[error("Can't find {} in this folder.", .0.display())]
    MissingDocument(PathBuf),

    /// The viewer template does not exist, so there is nothing to inject into.
    #[error("Can't find {}. Copy it into this folder first (or generate once).", .0.display())]
    MissingTemplate(PathBuf),

    /// A required part is absent from the document container.
    #[error("document container has no {0} part")]
    MissingPart(String),

    /// The document is not a readable zip container.
    #[error("invalid document container: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A document part is not well-formed XML.
    #[error("invalid document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The section tree could not be serialised.
    #[error("failed to serialise section tree: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File being read or written when the failure happened.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

impl Error {
    /// Attach the offending path to an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for fallible operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
