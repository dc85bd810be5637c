//! word/document.xml
//!
//! Blocks are written in model order, then the section properties that
//! carry page size and margins. Run text is escaped here and nowhere else.

use crate::docx::error::DocxResult;
use crate::docx::namespaces;
use crate::docx::tables_writer::TableWriter;
use doc_model::{Alignment, Block, DocumentModel, PageSetup, Paragraph, RichRun};
use quick_xml::escape::escape;

/// Serializes a [`DocumentModel`] body
pub struct DocumentWriter;

impl DocumentWriter {
    pub fn new() -> Self {
        Self
    }

    /// Produce the complete document part
    pub fn write(&self, model: &DocumentModel) -> DocxResult<String> {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');

        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        xml.push_str("<w:body>");

        for block in &model.blocks {
            match block {
                Block::Heading(para) => write_paragraph(&mut xml, para),
                Block::Table(table) => {
                    TableWriter::new().write_table(&mut xml, table)?;
                    // Word requires a paragraph between a table and sectPr
                    xml.push_str("<w:p/>");
                }
            }
        }

        write_section_properties(&mut xml, &model.page);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");

        Ok(xml)
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a paragraph element
pub(crate) fn write_paragraph(xml: &mut String, para: &Paragraph) {
    xml.push_str("<w:p>");

    if para.alignment != Alignment::Left {
        xml.push_str("<w:pPr>");
        xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment_value(para.alignment)));
        xml.push_str("</w:pPr>");
    }

    for run in &para.runs {
        write_run(xml, run);
    }

    xml.push_str("</w:p>");
}

fn alignment_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}

/// Write a run element. Embedded newlines (`\n`, `\r\n` or a lone `\r`)
/// become `w:br`, tabs `w:tab`.
pub(crate) fn write_run(xml: &mut String, run: &RichRun) {
    if run.text.is_empty() {
        return;
    }

    xml.push_str("<w:r>");

    if run.bold || run.underline {
        xml.push_str("<w:rPr>");
        if run.bold {
            xml.push_str("<w:b/><w:bCs/>");
        }
        if run.underline {
            xml.push_str(r#"<w:u w:val="single"/>"#);
        }
        xml.push_str("</w:rPr>");
    }

    let text = run.text.replace("\r\n", "\n").replace('\r', "\n");
    for (line_idx, line) in text.split('\n').enumerate() {
        if line_idx > 0 {
            xml.push_str("<w:br/>");
        }
        for (seg_idx, segment) in line.split('\t').enumerate() {
            if seg_idx > 0 {
                xml.push_str("<w:tab/>");
            }
            if segment.is_empty() {
                continue;
            }
            // Preserve leading/trailing spaces
            if segment.starts_with(' ') || segment.ends_with(' ') {
                xml.push_str(r#"<w:t xml:space="preserve">"#);
            } else {
                xml.push_str("<w:t>");
            }
            xml.push_str(&escape(strip_invalid_chars(segment).as_str()));
            xml.push_str("</w:t>");
        }
    }

    xml.push_str("</w:r>");
}

/// Drop characters XML 1.0 cannot carry (most C0 controls). Line breaks
/// and tabs are already split out by the caller.
fn strip_invalid_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| c >= '\u{20}')
        .filter(|&c| !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        .collect()
}

/// Write the body-level section properties (page size and margins)
fn write_section_properties(xml: &mut String, page: &PageSetup) {
    let m = &page.margins;
    xml.push_str("<w:sectPr>");
    xml.push_str(&format!(
        r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
        page.size.width.get(),
        page.size.height.get()
    ));
    xml.push_str(&format!(
        r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
        m.top.get(),
        m.right.get(),
        m.bottom.get(),
        m.left.get(),
        m.header.get(),
        m.footer.get(),
    ));
    xml.push_str("</w:sectPr>");
}
