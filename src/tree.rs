//! Rebuilding the section hierarchy from a flat paragraph stream.
//!
//! Open sections are kept on a stack, innermost last. A heading closes every open section at its
//! own level or deeper, so skipped levels (1 straight to 3) still nest under the nearest shallower
//! heading. A closed section is appended to the section beneath it on the stack, which keeps
//! siblings in document order because a section always closes before its next sibling opens.

use crate::error::Result;
use crate::formats::Paragraph;
use crate::heading;
use crate::section::Section;

/// Incremental builder fed one paragraph at a time.
pub struct TreeBuilder {
    stack: Vec<Section>,
}

impl TreeBuilder {
    #[must_use]
    /// Start a tree whose synthetic root carries the given title.
    pub fn new(root_title: impl Into<String>) -> Self {
        Self {
            stack: vec![Section::new(root_title, 0)],
        }
    }

    /// Add a paragraph to the innermost open section, or open a new section for a heading.
    pub fn push(&mut self, paragraph: &Paragraph) {
        if paragraph.text.trim().is_empty() {
            self.innermost().push_blank();
            return;
        }

        let line = paragraph.text.trim_end();
        match heading::classify(&paragraph.style) {
            Some(level) => {
                self.close_to(level);
                self.stack.push(Section::new(line.trim_start(), level));
            }
            None => self.innermost().content.push(line.to_string()),
        }
    }

    #[must_use]
    /// Close every open section and return the pruned root.
    pub fn finish(mut self) -> Section {
        self.close_to(1);
        let mut root = self
            .stack
            .pop()
            .unwrap_or_else(|| Section::new(String::new(), 0));
        root.prune();
        root
    }

    /// Close open sections until the innermost one is shallower than `level`.
    ///
    /// The root (bottom of the stack) is never closed.
    fn close_to(&mut self, level: u32) {
        while self.stack.len() > 1 && self.stack.last().is_some_and(|top| top.level >= level) {
            if let Some(closed) = self.stack.pop() {
                self.innermost().children.push(closed);
            }
        }
    }

    fn innermost(&mut self) -> &mut Section {
        // The root is never popped before `finish`, so the stack is never empty here.
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}

#[must_use]
/// Build the pruned section tree for a complete paragraph sequence.
pub fn build<'a>(
    root_title: impl Into<String>,
    paragraphs: impl IntoIterator<Item = &'a Paragraph>,
) -> Section {
    let mut builder = TreeBuilder::new(root_title);
    for paragraph in paragraphs {
        builder.push(paragraph);
    }
    builder.finish()
}

/// Build the tree from a fallible paragraph stream, stopping at the first error.
///
/// Also returns how many paragraphs were consumed.
///
/// # Errors
///
/// Returns the first error produced by the stream.
pub fn try_build(
    root_title: impl Into<String>,
    paragraphs: impl IntoIterator<Item = Result<Paragraph>>,
) -> Result<(Section, usize)> {
    let mut builder = TreeBuilder::new(root_title);
    let mut consumed = 0;
    for paragraph in paragraphs {
        builder.push(&paragraph?);
        consumed += 1;
    }
    tracing::debug!(paragraphs = consumed, "built section tree");
    Ok((builder.finish(), consumed))
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
