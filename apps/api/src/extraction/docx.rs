//! DOCX text extraction.
//!
//! A DOCX file is a ZIP package; the body lives in `word/document.xml`.
//! Only run text (`<w:t>`) is collected. Paragraph ends and `<w:br/>`/`<w:cr/>`
//! become newlines, `<w:tab/>` becomes a tab, and `<w:br w:type="page"/>`
//! starts a new segment.

use std::io::{Cursor, Read, Seek};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(format!("not a DOCX package: {e}")))?;

    let xml = read_document_part(&mut archive)?;
    parse_document_xml(&xml)
}

fn read_document_part<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String, ExtractError> {
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Docx(format!("missing {DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(format!("failed to read {DOCUMENT_PART}: {e}")))?;
    Ok(xml)
}

/// Walks `word/document.xml` and returns its text split at explicit page breaks.
pub fn parse_document_xml(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut pages = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = true,
                b"br" | b"cr" => line_break(e, &mut current, &mut pages),
                b"tab" => current.push('\t'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"br" | b"cr" => line_break(e, &mut current, &mut pages),
                b"tab" => current.push('\t'),
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|err| ExtractError::Docx(format!("bad text run: {err}")))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::Docx(format!(
                    "malformed XML at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    Ok(pages)
}

fn line_break(e: &BytesStart<'_>, current: &mut String, pages: &mut Vec<String>) {
    current.push('\n');
    if is_page_break(e) {
        pages.push(std::mem::take(current));
    }
}

fn is_page_break(e: &BytesStart<'_>) -> bool {
    e.attributes()
        .flatten()
        .any(|attr| attr.key.local_name().as_ref() == b"type" && attr.value.as_ref() == b"page")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    /// Wraps paragraph XML in a minimal `word/document.xml` body.
    pub(crate) fn document_xml(body: &str) -> String {
        format!(r#"<?xml version="1.0" encoding="UTF-8"?><w:document {NS}><w:body>{body}</w:body></w:document>"#)
    }

    /// One `<w:p>` per line, each with a single run.
    pub(crate) fn paragraphs(lines: &[&str]) -> String {
        lines
            .iter()
            .map(|l| format!(r#"<w:p><w:r><w:t xml:space="preserve">{l}</w:t></w:r></w:p>"#))
            .collect()
    }

    fn stored() -> SimpleFileOptions {
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored)
    }

    /// Builds an in-memory DOCX package around the given document XML.
    pub(crate) fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("[Content_Types].xml", stored()).unwrap();
        writer.write_all(b"<Types/>").unwrap();
        writer.start_file(DOCUMENT_PART, stored()).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let xml = document_xml(&paragraphs(&["Jane Doe", "Rust &amp; Python"]));
        let pages = parse_document_xml(&xml).unwrap();
        assert_eq!(pages, vec!["Jane Doe\nRust & Python\n".to_string()]);
    }

    #[test]
    fn test_runs_in_one_paragraph_are_joined() {
        let xml = document_xml(
            r#"<w:p><w:r><w:t xml:space="preserve">John </w:t></w:r><w:r><w:t>Smith</w:t></w:r></w:p>"#,
        );
        let pages = parse_document_xml(&xml).unwrap();
        assert_eq!(pages[0], "John Smith\n");
    }

    #[test]
    fn test_tabs_and_line_breaks() {
        let xml = document_xml(
            r#"<w:p><w:r><w:t>AWS</w:t><w:tab/><w:t>2021</w:t><w:br/><w:t>PMP</w:t></w:r></w:p>"#,
        );
        let pages = parse_document_xml(&xml).unwrap();
        assert_eq!(pages[0], "AWS\t2021\nPMP\n");
    }

    #[test]
    fn test_page_break_splits_segments() {
        let xml = document_xml(
            r#"<w:p><w:r><w:t>Page one</w:t></w:r></w:p><w:p><w:r><w:br w:type="page"/><w:t>Page two</w:t></w:r></w:p>"#,
        );
        let pages = parse_document_xml(&xml).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], "Page one\n\n");
        assert_eq!(pages[1], "Page two\n");
    }

    #[test]
    fn test_instruction_text_is_ignored() {
        let xml = document_xml(
            r#"<w:p><w:r><w:instrText>HYPERLINK "x"</w:instrText></w:r><w:r><w:t>Visible</w:t></w:r></w:p>"#,
        );
        let pages = parse_document_xml(&xml).unwrap();
        assert_eq!(pages[0], "Visible\n");
    }

    #[test]
    fn test_empty_body_yields_one_empty_segment() {
        let pages = parse_document_xml(&document_xml("")).unwrap();
        assert_eq!(pages, vec![String::new()]);
    }

    #[test]
    fn test_extract_from_package() {
        let bytes = build_docx(&document_xml(&paragraphs(&["Jane Doe", "Kubernetes"])));
        let pages = extract_pages(&bytes).unwrap();
        assert_eq!(pages[0], "Jane Doe\nKubernetes\n");
    }

    #[test]
    fn test_non_zip_bytes_are_rejected() {
        let err = extract_pages(b"plain text pretending to be docx").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(ref m) if m.contains("not a DOCX package")));
    }

    #[test]
    fn test_package_without_document_part_is_rejected() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", stored())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_pages(&bytes).unwrap_err();
        assert!(matches!(err, ExtractError::Docx(ref m) if m.contains(DOCUMENT_PART)));
    }
}
