//! The end-to-end build: document in, JSON file and refreshed viewer page out.
//!
//! Stages run strictly in order and each file is opened, used and closed within its stage. The
//! JSON file is written before the viewer template is looked up, so a missing template still
//! leaves fresh JSON behind.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::formats::docx::DocxSource;
use crate::formats::ParagraphSource;
use crate::section::GuideDocument;
use crate::{ids, tree, viewer};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a completed run produced.
pub struct RunSummary {
    /// JSON file that was written.
    pub json_path: PathBuf,
    /// Viewer page that was rewritten.
    pub html_path: PathBuf,
    /// Paragraphs read from the document.
    pub paragraphs: usize,
    /// Sections in the tree, including the root.
    pub sections: usize,
    /// Placeholder regions replaced in the viewer page.
    pub replaced: usize,
}

/// Read the document named in `config` and build its identified section tree.
///
/// Also returns the number of paragraphs read.
///
/// # Errors
///
/// Returns [`Error::MissingDocument`] if the input does not exist, or an error if the container
/// cannot be parsed.
pub fn load_document(config: &Config) -> Result<(GuideDocument, usize)> {
    let input = Path::new(&config.input_path);
    if !input.exists() {
        return Err(Error::MissingDocument(input.to_path_buf()));
    }

    let source = DocxSource::open(input)?;
    let (mut root, paragraphs) = tree::try_build(config.root_title.as_str(), source.paragraphs())?;
    let sections = ids::assign(&mut root);
    tracing::debug!(paragraphs, sections, "assigned section ids");

    let generated_from = input
        .file_name()
        .map_or_else(|| config.input_path.clone(), |name| name.to_string_lossy().into_owned());
    Ok((
        GuideDocument {
            generated_from,
            root,
        },
        paragraphs,
    ))
}

/// Serialise `doc` into the JSON file and the viewer page named in `config`.
///
/// Returns the number of placeholder regions replaced.
///
/// # Errors
///
/// Returns [`Error::MissingTemplate`] if the viewer page does not exist (after the JSON file has
/// been written), or an error if serialisation or file I/O fails.
pub fn write_outputs(doc: &GuideDocument, config: &Config) -> Result<usize> {
    let json_path = Path::new(&config.json_path);
    fs::write(json_path, viewer::to_pretty_json(doc)?).map_err(|e| Error::io(json_path, e))?;
    tracing::info!(path = %json_path.display(), "wrote section tree");

    let html_path = Path::new(&config.html_path);
    if !html_path.exists() {
        return Err(Error::MissingTemplate(html_path.to_path_buf()));
    }

    let template = fs::read_to_string(html_path).map_err(|e| Error::io(html_path, e))?;
    let injection = viewer::inject(&template, &viewer::to_script_json(doc)?);
    if injection.replaced == 0 {
        tracing::warn!(
            path = %html_path.display(),
            "no {} element found; page left unchanged",
            viewer::PLACEHOLDER_OPEN
        );
    }
    fs::write(html_path, injection.html).map_err(|e| Error::io(html_path, e))?;
    tracing::info!(path = %html_path.display(), replaced = injection.replaced, "updated viewer");

    Ok(injection.replaced)
}

/// Run the whole build described by `config`.
///
/// # Errors
///
/// Returns the first fatal error from any stage.
pub fn run(config: &Config) -> Result<RunSummary> {
    let (doc, paragraphs) = load_document(config)?;
    let replaced = write_outputs(&doc, config)?;
    let summary = RunSummary {
        json_path: PathBuf::from(&config.json_path),
        html_path: PathBuf::from(&config.html_path),
        paragraphs,
        sections: doc.root.count(),
        replaced,
    };
    tracing::info!(
        paragraphs = summary.paragraphs,
        sections = summary.sections,
        replaced = summary.replaced,
        "build complete"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
