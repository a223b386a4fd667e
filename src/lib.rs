//! hne-viewer: turn a heading-structured DOCX into a browsable section tree.
//!
//! The document's paragraphs are read straight from its zip container, regrouped under their
//! headings, given stable ids and breadcrumb paths, and written out as JSON both to a standalone
//! file and into the data element of a static HTML viewer.

pub mod config;
pub mod error;
pub mod formats;
pub mod heading;
pub mod ids;
pub mod logging;
pub mod pipeline;
pub mod section;
pub mod tree;
pub mod viewer;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
