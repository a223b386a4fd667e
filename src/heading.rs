//! Heading detection from paragraph style names.
//!
//! Producers disagree on how heading styles are spelled: Word stores `heading 1` internally and
//! displays `Heading 1`, while other tools emit `Heading1`. All of these classify the same way.

use regex::Regex;
use std::sync::LazyLock;

static HEADING_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^heading\s*([0-9]+)$").expect("heading style pattern is valid")
});

#[must_use]
/// Heading level named by a paragraph style, or `None` for body text.
///
/// Level 0 is reserved for the synthetic root, so `Heading 0` is treated as body text, as are
/// levels too large to represent.
pub fn classify(style: &str) -> Option<u32> {
    let caps = HEADING_STYLE.captures(style)?;
    caps[1].parse::<u32>().ok().filter(|&level| level > 0)
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
