//! word/styles.xml
//!
//! Generates styles.xml: document defaults from the model's font, the
//! Normal paragraph style, and the two table styles Word expects for a
//! bordered grid.

use crate::docx::error::DocxResult;
use crate::docx::namespaces;
use doc_model::{DocumentModel, FontSpec, TABLE_GRID_STYLE};
use quick_xml::escape::escape;

/// Border width of the grid lines, in eighths of a point
const GRID_BORDER_SIZE: u32 = 4;

/// Serializes the style sheet for a [`DocumentModel`]
pub struct StylesWriter;

impl StylesWriter {
    pub fn new() -> Self {
        Self
    }

    /// Produce the complete styles part
    pub fn write(&self, model: &DocumentModel) -> DocxResult<String> {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');

        xml.push_str(&format!(
            r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_doc_defaults(&mut xml, &model.font);
        self.write_normal_style(&mut xml);
        self.write_table_normal_style(&mut xml);
        self.write_table_grid_style(&mut xml);

        xml.push_str("</w:styles>");
        Ok(xml)
    }

    /// Write document defaults
    fn write_doc_defaults(&self, xml: &mut String, font: &FontSpec) {
        let family = escape(font.family.as_str());

        xml.push_str("<w:docDefaults>");

        // Run properties defaults
        xml.push_str("<w:rPrDefault>");
        xml.push_str("<w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:eastAsia="{0}" w:cs="{0}"/>"#,
            family
        ));
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, font.half_points));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, font.half_points));
        xml.push_str(r#"<w:lang w:val="en-IN"/>"#);
        xml.push_str("</w:rPr>");
        xml.push_str("</w:rPrDefault>");

        // Paragraph properties defaults. No space after, so text fits the
        // exact-height rows.
        xml.push_str("<w:pPrDefault>");
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:spacing w:after="0" w:line="240" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr>");
        xml.push_str("</w:pPrDefault>");

        xml.push_str("</w:docDefaults>");
    }

    fn write_normal_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#);
        xml.push_str(r#"<w:name w:val="Normal"/>"#);
        xml.push_str("<w:qFormat/>");
        xml.push_str("</w:style>");
    }

    fn write_table_normal_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal">"#);
        xml.push_str(r#"<w:name w:val="Normal Table"/>"#);
        xml.push_str(r#"<w:uiPriority w:val="99"/>"#);
        xml.push_str("<w:semiHidden/>");
        xml.push_str("<w:tblPr>");
        xml.push_str(r#"<w:tblInd w:w="0" w:type="dxa"/>"#);
        xml.push_str("<w:tblCellMar>");
        xml.push_str(r#"<w:top w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:left w:w="108" w:type="dxa"/>"#);
        xml.push_str(r#"<w:bottom w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:right w:w="108" w:type="dxa"/>"#);
        xml.push_str("</w:tblCellMar>");
        xml.push_str("</w:tblPr>");
        xml.push_str("</w:style>");
    }

    /// Single borders on every edge, including between cells
    fn write_table_grid_style(&self, xml: &mut String) {
        xml.push_str(&format!(
            r#"<w:style w:type="table" w:styleId="{}">"#,
            TABLE_GRID_STYLE
        ));
        xml.push_str(r#"<w:name w:val="Table Grid"/>"#);
        xml.push_str(r#"<w:basedOn w:val="TableNormal"/>"#);
        xml.push_str(r#"<w:uiPriority w:val="39"/>"#);
        xml.push_str("<w:tblPr>");
        xml.push_str("<w:tblBorders>");
        for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            xml.push_str(&format!(
                r#"<w:{} w:val="single" w:sz="{}" w:space="0" w:color="auto"/>"#,
                edge, GRID_BORDER_SIZE
            ));
        }
        xml.push_str("</w:tblBorders>");
        xml.push_str("</w:tblPr>");
        xml.push_str("</w:style>");
    }
}

impl Default for StylesWriter {
    fn default() -> Self {
        Self::new()
    }
}
