//! Section representation for heading-structured documents.
//!
//! A section represents a hierarchical division of a document, corresponding to a heading
//! paragraph. Sections own their subsections directly, so the whole guide is a single tree rooted
//! at a synthetic level-0 section that collects any text appearing before the first heading.

use serde::{Deserialize, Serialize};

/// Content entry marking a paragraph break between prose lines.
pub const BLANK: &str = "";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Hierarchical document division with its own prose and nested subsections.
pub struct Section {
    /// Heading text with surrounding whitespace removed, or the guide name for the root.
    pub title: String,
    /// Nesting depth in the document hierarchy (0 for the synthetic root, 1 for top-level).
    pub level: u32,
    /// Plain paragraph lines directly under this heading, with `""` marking paragraph breaks.
    pub content: Vec<String>,
    /// Directly nested subsections in document order.
    pub children: Vec<Section>,
    /// Pre-order identifier such as `n00042`, empty until assigned.
    #[serde(default)]
    pub id: String,
    /// Titles from the root down to and including this section, empty until assigned.
    #[serde(default)]
    pub path: Vec<String>,
}

impl Section {
    #[must_use]
    /// Create an empty section with no identifier or path yet.
    pub fn new(title: impl Into<String>, level: u32) -> Self {
        Self {
            title: title.into(),
            level,
            content: Vec::new(),
            children: Vec::new(),
            id: String::new(),
            path: Vec::new(),
        }
    }

    /// Record a paragraph break, unless the section is empty or already ends with one.
    pub fn push_blank(&mut self) {
        if self.content.last().is_some_and(|line| line != BLANK) {
            self.content.push(BLANK.to_string());
        }
    }

    /// Drop trailing paragraph breaks here and in every descendant.
    pub fn prune(&mut self) {
        while self.content.last().is_some_and(|line| line == BLANK) {
            self.content.pop();
        }
        for child in &mut self.children {
            child.prune();
        }
    }

    #[must_use]
    /// Number of sections in this subtree, including this one.
    pub fn count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// Visit this section and its descendants in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Section)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level JSON object consumed by the viewer.
pub struct GuideDocument {
    /// Base file name of the document the tree was built from.
    pub generated_from: String,
    /// Synthetic root section holding the whole hierarchy.
    pub root: Section,
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
