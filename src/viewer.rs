//! JSON output and injection into the static HTML viewer.
//!
//! The viewer page embeds its data in `<script id="hne-data" type="application/json">`. Each run
//! swaps the inner text of that element for freshly serialised JSON and leaves the rest of the
//! page untouched.

use crate::error::Result;
use crate::section::GuideDocument;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Opening tag of the data element the viewer reads on load.
pub const PLACEHOLDER_OPEN: &str = r#"<script id="hne-data" type="application/json">"#;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?s)({})(.*?)(</script>)", regex::escape(PLACEHOLDER_OPEN));
    Regex::new(&pattern).expect("placeholder pattern is valid")
});

/// Indented JSON for the standalone output file.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn to_pretty_json(doc: &GuideDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Compact JSON made safe to sit inside a `<script>` element.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn to_script_json(doc: &GuideDocument) -> Result<String> {
    let json = serde_json::to_string(doc)?;
    Ok(escape_for_script(&json))
}

#[must_use]
/// Escape text so it cannot close the surrounding `<script>` element.
///
/// Backslashes are doubled before `</` becomes `<\/`, so the escape added for `</` is not itself
/// doubled.
pub fn escape_for_script(text: &str) -> String {
    text.replace('\\', r"\\").replace("</", r"<\/")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of injecting data into a viewer template.
pub struct Injection {
    /// Rewritten page.
    pub html: String,
    /// Number of placeholder regions whose contents were replaced.
    pub replaced: usize,
}

#[must_use]
/// Replace the inner text of every placeholder region in `template` with `payload`.
///
/// The payload is inserted verbatim. A template without a placeholder comes back unchanged with
/// `replaced == 0`.
pub fn inject(template: &str, payload: &str) -> Injection {
    let mut replaced = 0;
    let html = PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            replaced += 1;
            format!("{}{payload}{}", &caps[1], &caps[3])
        })
        .into_owned();
    Injection { html, replaced }
}

#[cfg(test)]
#[path = "tests/viewer.rs"]
mod tests;
