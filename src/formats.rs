//! Paragraph sources for different document containers.
//!
//! This module defines the `ParagraphSource` trait, which abstracts over anything that can yield
//! the paragraphs of a document in order together with their style names. The tree builder only
//! ever sees this flat stream.

pub mod docx;

use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// One paragraph of a document: its visible text and the display name of its style.
pub struct Paragraph {
    /// Concatenated text of every run in the paragraph.
    pub text: String,
    /// Human-readable style name, the raw style identifier, or empty when unstyled.
    pub style: String,
}

impl Paragraph {
    #[must_use]
    /// Build a paragraph from its text and style name.
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
        }
    }
}

/// A document that can be read as a sequence of styled paragraphs.
pub trait ParagraphSource {
    /// Iterate over the paragraphs in document order.
    ///
    /// Every call starts again from the first paragraph.
    fn paragraphs(&self) -> Box<dyn Iterator<Item = Result<Paragraph>> + '_>;
}
