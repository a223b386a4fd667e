//! DOCX paragraph source reading the zip container directly.
//!
//! A DOCX file is a zip archive. Two parts matter here:
//! - `word/styles.xml` maps internal style identifiers (`Heading1`) to display names
//!   (`heading 1`).
//! - `word/document.xml` holds the paragraphs (`w:p`), their style reference (`w:pPr/w:pStyle`)
//!   and their text runs (`w:t`).
//!
//! Both parts are read into memory when the source is opened and the archive is closed again, so
//! paragraph iteration never touches the file.

use crate::error::{Error, Result};
use crate::formats::{Paragraph, ParagraphSource};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

/// A DOCX document held as its raw main part plus a resolved style-name table.
pub struct DocxSource {
    document_xml: String,
    style_names: HashMap<String, String>,
}

impl DocxSource {
    /// Open a DOCX file and load the parts needed for paragraph extraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is not a zip archive, lacks
    /// `word/document.xml`, or has a malformed styles part.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::from_reader(file)
    }

    /// Load a DOCX container from any seekable reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader is not a zip archive, lacks `word/document.xml`, or has a
    /// malformed styles part.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;

        let style_names = match read_part(&mut archive, STYLES_PART)? {
            Some(xml) => parse_style_names(&xml)?,
            None => HashMap::new(),
        };
        let document_xml = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))?;

        tracing::debug!(styles = style_names.len(), "loaded document container");
        Ok(Self {
            document_xml,
            style_names,
        })
    }

    #[must_use]
    /// Display name for a style identifier, falling back to the identifier itself.
    pub fn style_name<'a>(&'a self, style_id: &'a str) -> &'a str {
        self.style_names.get(style_id).map_or(style_id, String::as_str)
    }
}

impl ParagraphSource for DocxSource {
    fn paragraphs(&self) -> Box<dyn Iterator<Item = Result<Paragraph>> + '_> {
        let mut reader = Reader::from_str(&self.document_xml);
        reader.trim_text(false);
        Box::new(Paragraphs {
            reader,
            source: self,
            finished: false,
        })
    }
}

/// Lazy walk over the `w:p` elements of `word/document.xml`.
struct Paragraphs<'a> {
    reader: Reader<&'a [u8]>,
    source: &'a DocxSource,
    finished: bool,
}

impl Iterator for Paragraphs<'_> {
    type Item = Result<Paragraph>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_paragraph() {
            Ok(Some(paragraph)) => Some(Ok(paragraph)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl Paragraphs<'_> {
    /// Read events up to the end of the next top-level paragraph.
    ///
    /// Paragraphs nested inside another (text boxes) contribute their runs to the enclosing one.
    fn next_paragraph(&mut self) -> Result<Option<Paragraph>> {
        let mut depth = 0usize;
        let mut text = String::new();
        let mut style_id: Option<String> = None;
        let mut in_props = false;
        let mut in_text = false;

        loop {
            match self.reader.read_event()? {
                Event::Empty(e) if depth == 0 && e.name().as_ref() == b"w:p" => {
                    return Ok(Some(self.resolve(String::new(), None)));
                }
                Event::Start(e) => match e.name().as_ref() {
                    b"w:p" => depth += 1,
                    b"w:pPr" if depth == 1 => in_props = true,
                    b"w:pStyle" if in_props && style_id.is_none() => {
                        style_id = attr(&e, b"w:val")?;
                    }
                    b"w:t" if depth > 0 => in_text = true,
                    _ => {}
                },
                // First wins: a tracked change (w:pPrChange) repeats the old style afterwards.
                Event::Empty(e)
                    if in_props && style_id.is_none() && e.name().as_ref() == b"w:pStyle" =>
                {
                    style_id = attr(&e, b"w:val")?;
                }
                Event::Text(t) if in_text => text.push_str(&t.unescape()?),
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:pPr" => in_props = false,
                    b"w:p" if depth > 0 => {
                        depth -= 1;
                        if depth == 0 {
                            return Ok(Some(self.resolve(text, style_id)));
                        }
                    }
                    _ => {}
                },
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    fn resolve(&self, text: String, style_id: Option<String>) -> Paragraph {
        let style = style_id
            .map(|id| self.source.style_name(&id).to_string())
            .unwrap_or_default();
        Paragraph { text, style }
    }
}

/// Read a part of the archive as UTF-8, or `None` if the archive has no such part.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    part.read_to_string(&mut xml).map_err(ZipError::from)?;
    Ok(Some(xml))
}

/// Map each `w:styleId` in `styles.xml` to the `w:val` of its `w:name`.
fn parse_style_names(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut names = HashMap::new();
    let mut current_id: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:style" => {
                current_id = attr(&e, b"w:styleId")?;
            }
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"w:name" => {
                if let (Some(id), Some(name)) = (&current_id, attr(&e, b"w:val")?) {
                    names.insert(id.clone(), name);
                }
            }
            Event::End(e) if e.name().as_ref() == b"w:style" => current_id = None,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(names)
}

/// Unescaped value of the attribute with the given qualified name.
fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().with_checks(false).flatten() {
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "../tests/docx.rs"]
mod tests;
