//! Placeholder substitution over docx templates.
//!
//! A `.docx` file is a ZIP archive of XML parts. Rendering walks the
//! archive, rewrites the document body and any header/footer parts with
//! the report's field values, and copies every other entry through
//! byte-for-byte, so the template's formatting and structure survive
//! untouched. Substitution is literal token matching only; there is no
//! templating grammar.

use std::io::{Cursor, Read, Write};

use common::model::report::Report;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::error::Error;

/// The document part every docx archive must carry.
const DOCUMENT_PART: &str = "word/document.xml";

/// Placeholder tokens recognized in template text, paired with the
/// report field each one expands to. Tokens are case-sensitive.
fn placeholder_values(report: &Report) -> [(&'static str, &str); 4] {
    [
        ("{{NAME}}", report.name.as_str()),
        ("{{DATE}}", report.date.as_str()),
        ("{{SUMMARY}}", report.summary.as_str()),
        ("{{PLAN}}", report.plan.as_str()),
    ]
}

/// Check that the bytes open as a docx archive with a document part,
/// without rendering anything.
pub fn validate(template: &[u8]) -> Result<(), Error> {
    let mut archive = open_archive(template)?;
    archive.by_name(DOCUMENT_PART).map_err(|_| {
        Error::InvalidTemplate("archive has no word/document.xml part".to_string())
    })?;
    Ok(())
}

/// Render a docx template against a report.
///
/// Every literal occurrence of the four placeholder tokens in the
/// document body, headers and footers is replaced with the corresponding
/// field value. Tokens absent from the template are left alone; tokens
/// appearing several times all receive the same value.
///
/// # Errors
///
/// `Error::InvalidTemplate` if the bytes are not a readable ZIP archive,
/// the archive has no `word/document.xml` part, or a text part is not
/// valid UTF-8.
pub fn render(template: &[u8], report: &Report) -> Result<Vec<u8>, Error> {
    let mut archive = open_archive(template)?;

    let mut out = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    let mut has_document = false;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| Error::InvalidTemplate(format!("unreadable archive entry: {e}")))?;
        let name = entry.name().to_string();

        if entry.is_dir() {
            out.add_directory(name, options).map_err(write_failure)?;
            continue;
        }

        let mut contents = Vec::new();
        entry
            .read_to_end(&mut contents)
            .map_err(|e| Error::InvalidTemplate(format!("unreadable archive entry: {e}")))?;

        if is_text_part(&name) {
            has_document |= name == DOCUMENT_PART;
            let xml = String::from_utf8(contents)
                .map_err(|_| Error::InvalidTemplate(format!("{name} is not valid UTF-8")))?;
            contents = substitute(&xml, report).into_bytes();
        }

        out.start_file(name, options).map_err(write_failure)?;
        out.write_all(&contents)?;
    }

    if !has_document {
        return Err(Error::InvalidTemplate(
            "archive has no word/document.xml part".to_string(),
        ));
    }

    let cursor = out.finish().map_err(write_failure)?;
    Ok(cursor.into_inner())
}

fn open_archive(template: &[u8]) -> Result<ZipArchive<Cursor<&[u8]>>, Error> {
    ZipArchive::new(Cursor::new(template))
        .map_err(|e| Error::InvalidTemplate(format!("not a docx archive: {e}")))
}

fn write_failure(e: zip::result::ZipError) -> Error {
    Error::Io(std::io::Error::other(e))
}

/// Parts subject to substitution: the body plus headers and footers,
/// matching where placeholders can appear in a Word template.
fn is_text_part(name: &str) -> bool {
    name == DOCUMENT_PART
        || (name.starts_with("word/header") && name.ends_with(".xml"))
        || (name.starts_with("word/footer") && name.ends_with(".xml"))
}

/// Replace every placeholder token in one XML part.
fn substitute(xml: &str, report: &Report) -> String {
    let mut text = xml.to_string();
    for (token, value) in placeholder_values(report) {
        if text.contains(token) {
            text = text.replace(token, &encode_field(value));
        }
    }
    text
}

/// Escape a field value for insertion into document XML.
///
/// Newlines become explicit `<w:br/>` elements and tabs `<w:tab/>`
/// elements, closing and reopening the surrounding text node, so
/// multi-line fields keep their shape when the document is opened.
fn encode_field(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => encoded.push_str("&amp;"),
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '\n' => encoded.push_str("</w:t><w:br/><w:t xml:space=\"preserve\">"),
            '\t' => encoded.push_str("</w:t><w:tab/><w:t xml:space=\"preserve\">"),
            '\r' => {}
            _ => encoded.push(ch),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC_PREFIX: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;
    const DOC_SUFFIX: &str = "</w:body></w:document>";

    fn paragraph(text: &str) -> String {
        format!("<w:p><w:r><w:t xml:space=\"preserve\">{text}</w:t></w:r></w:p>")
    }

    fn build_archive(parts: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, bytes) in parts {
            writer.start_file(*name, options).unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn docx_with_body(body: &str) -> Vec<u8> {
        let document = format!("{DOC_PREFIX}{body}{DOC_SUFFIX}");
        build_archive(&[("word/document.xml", document.as_bytes())])
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut text = String::new();
        entry.read_to_string(&mut text).unwrap();
        text
    }

    fn sample_report() -> Report {
        Report {
            id: 1,
            name: "Alice".to_string(),
            date: "2024-01-01".to_string(),
            summary: "Did X".to_string(),
            plan: "Do Y".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn substitutes_all_four_tokens() {
        let body = [
            paragraph("Name: {{NAME}}"),
            paragraph("Date: {{DATE}}"),
            paragraph("Summary: {{SUMMARY}}"),
            paragraph("Plan: {{PLAN}}"),
        ]
        .concat();
        let rendered = render(&docx_with_body(&body), &sample_report()).unwrap();
        let xml = read_part(&rendered, "word/document.xml");

        assert!(xml.contains("Name: Alice"));
        assert!(xml.contains("Date: 2024-01-01"));
        assert!(xml.contains("Summary: Did X"));
        assert!(xml.contains("Plan: Do Y"));
        for token in ["{{NAME}}", "{{DATE}}", "{{SUMMARY}}", "{{PLAN}}"] {
            assert!(!xml.contains(token), "token {token} survived rendering");
        }
    }

    #[test]
    fn repeated_tokens_all_receive_the_same_value() {
        let body = paragraph("{{NAME}} and {{NAME}} again");
        let rendered = render(&docx_with_body(&body), &sample_report()).unwrap();
        let xml = read_part(&rendered, "word/document.xml");
        assert!(xml.contains("Alice and Alice again"));
    }

    #[test]
    fn template_without_tokens_is_unchanged() {
        let body = paragraph("No placeholders here");
        let template = docx_with_body(&body);
        let rendered = render(&template, &sample_report()).unwrap();
        assert_eq!(
            read_part(&rendered, "word/document.xml"),
            read_part(&template, "word/document.xml"),
        );
    }

    #[test]
    fn header_and_footer_parts_are_substituted() {
        let document = format!("{DOC_PREFIX}{}{DOC_SUFFIX}", paragraph("Body"));
        let header = paragraph("Author: {{NAME}}");
        let footer = paragraph("Week of {{DATE}}");
        let template = build_archive(&[
            ("word/document.xml", document.as_bytes()),
            ("word/header1.xml", header.as_bytes()),
            ("word/footer1.xml", footer.as_bytes()),
        ]);

        let rendered = render(&template, &sample_report()).unwrap();
        assert!(read_part(&rendered, "word/header1.xml").contains("Author: Alice"));
        assert!(read_part(&rendered, "word/footer1.xml").contains("Week of 2024-01-01"));
    }

    #[test]
    fn non_text_parts_are_copied_verbatim() {
        let document = format!("{DOC_PREFIX}{}{DOC_SUFFIX}", paragraph("{{NAME}}"));
        let media: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, b'{', b'{'];
        let template = build_archive(&[
            ("word/document.xml", document.as_bytes()),
            ("word/media/image1.png", media),
        ]);

        let rendered = render(&template, &sample_report()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(rendered.as_slice())).unwrap();
        let mut entry = archive.by_name("word/media/image1.png").unwrap();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        assert_eq!(bytes, media);
    }

    #[test]
    fn multiline_field_becomes_line_breaks() {
        let mut report = sample_report();
        report.summary = "Did X\nDid Y".to_string();

        let body = paragraph("{{SUMMARY}}");
        let rendered = render(&docx_with_body(&body), &report).unwrap();
        let xml = read_part(&rendered, "word/document.xml");

        assert!(xml.contains("Did X</w:t><w:br/><w:t xml:space=\"preserve\">Did Y"));
    }

    #[test]
    fn field_values_are_xml_escaped() {
        let mut report = sample_report();
        report.name = "A & B <C>".to_string();

        let body = paragraph("{{NAME}}");
        let rendered = render(&docx_with_body(&body), &report).unwrap();
        let xml = read_part(&rendered, "word/document.xml");

        assert!(xml.contains("A &amp; B &lt;C&gt;"));
    }

    #[test]
    fn markdown_is_inserted_as_literal_text() {
        let mut report = sample_report();
        report.plan = "- item **bold**".to_string();

        let body = paragraph("{{PLAN}}");
        let rendered = render(&docx_with_body(&body), &report).unwrap();
        let xml = read_part(&rendered, "word/document.xml");

        assert!(xml.contains("- item **bold**"));
    }

    #[test]
    fn non_zip_bytes_are_invalid_template() {
        let err = render(b"not a zip archive", &sample_report()).unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate(_)));

        let err = validate(b"not a zip archive").unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate(_)));
    }

    #[test]
    fn archive_without_document_part_is_invalid_template() {
        let template = build_archive(&[("word/header1.xml", b"<w:hdr/>".as_slice())]);

        let err = render(&template, &sample_report()).unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate(_)));

        let err = validate(&template).unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate(_)));
    }
}
