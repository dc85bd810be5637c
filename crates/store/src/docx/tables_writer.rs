//! `w:tbl` serialization
//!
//! Tables are written with a fixed layout: the grid carries the column
//! widths, every cell states its own width and merge span, and fixed rows
//! carry their height rule. Word never has to guess.

use crate::docx::document_writer::write_paragraph;
use crate::docx::error::DocxResult;
use doc_model::{Cell, CellVerticalAlign, HeightRule, Table, TableAlignment, TableRow};

/// Serializes [`Table`]s into document.xml
pub struct TableWriter;

impl TableWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write a table element
    pub fn write_table(&self, xml: &mut String, table: &Table) -> DocxResult<()> {
        xml.push_str("<w:tbl>");

        self.write_table_properties(xml, table);
        self.write_table_grid(xml, table);

        for row in &table.rows {
            self.write_table_row(xml, row);
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }

    /// Write table properties
    fn write_table_properties(&self, xml: &mut String, table: &Table) {
        xml.push_str("<w:tblPr>");

        // Table style
        if let Some(ref style) = table.style_id {
            xml.push_str(&format!(r#"<w:tblStyle w:val="{}"/>"#, style));
        }

        // Table width
        xml.push_str(&format!(r#"<w:tblW w:w="{}" w:type="dxa"/>"#, table.width().get()));

        // Alignment
        let jc = match table.alignment {
            TableAlignment::Left => "left",
            TableAlignment::Center => "center",
            TableAlignment::Right => "right",
        };
        xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, jc));

        // Column widths are final, auto-fit stays off
        xml.push_str(r#"<w:tblLayout w:type="fixed"/>"#);

        // Word's default cell padding, stated so other readers agree
        xml.push_str("<w:tblCellMar>");
        xml.push_str(r#"<w:top w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:left w:w="108" w:type="dxa"/>"#);
        xml.push_str(r#"<w:bottom w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:right w:w="108" w:type="dxa"/>"#);
        xml.push_str("</w:tblCellMar>");

        xml.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);

        xml.push_str("</w:tblPr>");
    }

    /// Write table grid
    fn write_table_grid(&self, xml: &mut String, table: &Table) {
        xml.push_str("<w:tblGrid>");
        for width in &table.grid {
            xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, width.get()));
        }
        xml.push_str("</w:tblGrid>");
    }

    /// Write a table row
    fn write_table_row(&self, xml: &mut String, row: &TableRow) {
        xml.push_str("<w:tr>");

        if !row.height.is_auto() {
            let rule = match row.height.rule {
                HeightRule::Auto => "auto",
                HeightRule::AtLeast => "atLeast",
                HeightRule::Exact => "exact",
            };
            xml.push_str("<w:trPr>");
            xml.push_str(&format!(
                r#"<w:trHeight w:val="{}" w:hRule="{}"/>"#,
                row.height.value.get(),
                rule
            ));
            xml.push_str("</w:trPr>");
        }

        for cell in &row.cells {
            self.write_table_cell(xml, cell);
        }

        xml.push_str("</w:tr>");
    }

    /// Write a table cell
    fn write_table_cell(&self, xml: &mut String, cell: &Cell) {
        xml.push_str("<w:tc>");

        xml.push_str("<w:tcPr>");

        // Cell width
        match cell.width {
            Some(width) => xml.push_str(&format!(r#"<w:tcW w:w="{}" w:type="dxa"/>"#, width.get())),
            None => xml.push_str(r#"<w:tcW w:w="0" w:type="auto"/>"#),
        }

        // Grid span (horizontal merge)
        if cell.grid_span > 1 {
            xml.push_str(&format!(r#"<w:gridSpan w:val="{}"/>"#, cell.grid_span));
        }

        let valign = match cell.vertical_align {
            CellVerticalAlign::Top => "top",
            CellVerticalAlign::Center => "center",
            CellVerticalAlign::Bottom => "bottom",
        };
        xml.push_str(&format!(r#"<w:vAlign w:val="{}"/>"#, valign));

        xml.push_str("</w:tcPr>");

        // A cell always holds at least one paragraph, even when blank
        write_paragraph(xml, &cell.content);

        xml.push_str("</w:tc>");
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Alignment, RichRun, RowHeight, Twips};

    fn table() -> Table {
        let mut table = Table::new(3);
        table.alignment = TableAlignment::Center;
        table.style_id = Some("TableGrid".to_string());
        table.push_row(
            TableRow::new(vec![Cell::label("HEADER").span(3)])
                .with_height(RowHeight::exact(Twips(510))),
        );
        table.push_row(TableRow::new(vec![
            Cell::empty(),
            Cell::from_runs(vec![RichRun::plain("free text")]).align(Alignment::Center).span(2),
        ]));
        table
            .apply_column_widths(&[Twips(680), Twips(2722), Twips(6237)])
            .unwrap();
        table
    }

    fn write(table: &Table) -> String {
        let mut xml = String::new();
        TableWriter::new().write_table(&mut xml, table).unwrap();
        xml
    }

    #[test]
    fn test_table_properties() {
        let xml = write(&table());
        assert!(xml.contains(r#"<w:tblStyle w:val="TableGrid"/>"#));
        assert!(xml.contains(r#"<w:tblW w:w="9639" w:type="dxa"/>"#));
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains(r#"<w:tblLayout w:type="fixed"/>"#));
    }

    #[test]
    fn test_grid_columns() {
        let xml = write(&table());
        assert!(xml.contains(
            r#"<w:tblGrid><w:gridCol w:w="680"/><w:gridCol w:w="2722"/><w:gridCol w:w="6237"/></w:tblGrid>"#
        ));
    }

    #[test]
    fn test_exact_row_height() {
        let xml = write(&table());
        assert!(xml.contains(r#"<w:trHeight w:val="510" w:hRule="exact"/>"#));
        // Auto rows carry no trHeight
        assert_eq!(xml.matches("w:trHeight").count(), 1);
    }

    #[test]
    fn test_merged_cells() {
        let xml = write(&table());
        assert!(xml.contains(r#"<w:tcW w:w="9639" w:type="dxa"/><w:gridSpan w:val="3"/>"#));
        assert!(xml.contains(r#"<w:tcW w:w="8959" w:type="dxa"/><w:gridSpan w:val="2"/>"#));
        assert!(xml.contains(r#"<w:tcW w:w="680" w:type="dxa"/><w:vAlign w:val="top"/>"#));
    }

    #[test]
    fn test_empty_cell_has_paragraph() {
        let xml = write(&table());
        assert!(xml.contains(r#"<w:vAlign w:val="top"/></w:tcPr><w:p></w:p></w:tc>"#));
    }
}
