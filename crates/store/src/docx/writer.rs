//! DOCX package writer
//!
//! Streams the package parts into a ZIP container in manifest order.

use crate::docx::document_writer::DocumentWriter;
use crate::docx::error::DocxResult;
use crate::docx::package::{
    self, RelsOwner, CONTENT_TYPES_PATH, DOCUMENT_PART, SETTINGS_PART, STYLES_PART,
};
use crate::docx::styles_writer::StylesWriter;
use doc_model::DocumentModel;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{DateTime, ZipWriter};

/// Writes one document model as a DOCX package
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
}

impl<W: Write + Seek> DocxWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
        }
    }

    /// Write the complete package and hand back the underlying writer.
    ///
    /// The model is validated first; nothing is written for a model that
    /// breaks its structural invariants.
    pub fn write(mut self, model: &DocumentModel) -> DocxResult<W> {
        model.validate()?;

        // Content types first, so streaming readers see it before any part
        self.write_part(CONTENT_TYPES_PATH, &package::content_types_xml())?;
        self.write_part(RelsOwner::Package.rels_path(), &package::rels_xml(RelsOwner::Package))?;

        self.write_part(DOCUMENT_PART.path, &DocumentWriter::new().write(model)?)?;
        self.write_part(STYLES_PART.path, &StylesWriter::new().write(model)?)?;
        self.write_part(SETTINGS_PART.path, &settings_xml())?;
        self.write_part(
            RelsOwner::Document.rels_path(),
            &package::rels_xml(RelsOwner::Document),
        )?;

        Ok(self.zip.finish()?)
    }

    fn write_part(&mut self, path: &str, content: &str) -> DocxResult<()> {
        // Fixed timestamp keeps the archive byte-for-byte reproducible
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;

        tracing::debug!(part = path, bytes = content.len(), "wrote docx part");
        Ok(())
    }
}

/// settings.xml: Word 2013+ compatibility, no document protection or
/// tracking flags
fn settings_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:defaultTabStop w:val="720"/>
    <w:characterSpacingControl w:val="doNotCompress"/>
    <w:compat>
        <w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/>
    </w:compat>
</w:settings>"#.to_string()
}
