//! In-memory DOCX fixtures shared by the unit tests.

use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Zip the given `(part name, contents)` pairs into a container.
pub fn zip_parts(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Wrap paragraph markup in a `word/document.xml` body.
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{NS_W}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

/// A `word/styles.xml` declaring `(style id, display name)` pairs.
pub fn styles_xml(styles: &[(&str, &str)]) -> String {
    let mut xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:styles xmlns:w="{NS_W}">"#
    );
    for (id, name) in styles {
        xml.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="{name}"/><w:qFormat/></w:style>"#
        ));
    }
    xml.push_str("</w:styles>");
    xml
}

/// One paragraph with a single run, optionally styled by id.
pub fn para(text: &str, style_id: Option<&str>) -> String {
    let props = style_id
        .map(|id| format!(r#"<w:pPr><w:pStyle w:val="{id}"/></w:pPr>"#))
        .unwrap_or_default();
    if text.is_empty() {
        format!("<w:p>{props}</w:p>")
    } else {
        format!(r#"<w:p>{props}<w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
    }
}

/// A complete DOCX with Word's built-in heading styles and the given body.
pub fn docx(body: &str) -> Vec<u8> {
    let styles = styles_xml(&[
        ("Normal", "Normal"),
        ("Heading1", "heading 1"),
        ("Heading2", "heading 2"),
        ("Heading3", "heading 3"),
    ]);
    let document = document_xml(body);
    zip_parts(&[
        ("word/document.xml", document.as_str()),
        ("word/styles.xml", styles.as_str()),
    ])
}

/// Shared buffer that a test subscriber writes formatted events into.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber using `filter`, returning its result and the log text.
pub fn capture_logs<T>(filter: EnvFilter, f: impl FnOnce() -> T) -> (T, String) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&capture.0.lock().unwrap()).into_owned();
    (result, logs)
}
