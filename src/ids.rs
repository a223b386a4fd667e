//! Stable identifiers and breadcrumb paths for every section.
//!
//! Identifiers are handed out in pre-order (parent before children, children in document order)
//! from an explicit counter, so an unchanged document always produces the same ids.

use crate::section::Section;

#[derive(Debug, Default)]
/// Sequential source of section identifiers.
pub struct IdAllocator {
    next: usize,
}

impl IdAllocator {
    #[must_use]
    /// Start counting from `n00000`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next identifier.
    pub fn allocate(&mut self) -> String {
        let id = format!("n{:05}", self.next);
        self.next += 1;
        id
    }

    #[must_use]
    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}

/// Assign ids and paths to `root` and all of its descendants.
///
/// Returns the number of sections visited.
pub fn assign(root: &mut Section) -> usize {
    let mut ids = IdAllocator::new();
    assign_with(root, None, &mut ids);
    ids.issued()
}

/// Assign ids from `ids` in pre-order, extending `parent_path` with each section's title.
///
/// A section without a parent path (the root) gets a path holding only its own title.
pub fn assign_with(section: &mut Section, parent_path: Option<&[String]>, ids: &mut IdAllocator) {
    section.id = ids.allocate();
    section.path = match parent_path {
        Some(parent) => {
            let mut path = parent.to_vec();
            path.push(section.title.clone());
            path
        }
        None => vec![section.title.clone()],
    };

    let path = section.path.clone();
    for child in &mut section.children {
        assign_with(child, Some(&path), ids);
    }
}

#[cfg(test)]
#[path = "tests/ids.rs"]
mod tests;
