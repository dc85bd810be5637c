//! Form A layout builder
//!
//! Produces the document model for one record: the caption paragraphs,
//! then one three-column table whose row sequence never varies with the
//! input. Only cell text comes from the record.

use crate::{ApplicationRecord, DisputeSpan, FormConfig, PartyInfo, PartySection};
use doc_model::{
    Alignment, Block, Cell, DocumentModel, Paragraph, Result, RichRun, Table, TableAlignment,
    TableRow, TABLE_GRID_STYLE,
};

/// Number of logical columns in the form table
pub const FORM_COLUMNS: usize = 3;

/// Builds the Form A document model from a record
#[derive(Debug, Clone, Copy)]
pub struct LayoutBuilder<'a> {
    config: &'a FormConfig,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(config: &'a FormConfig) -> Self {
        Self { config }
    }

    /// Lay out one record.
    ///
    /// The result is validated before it is returned; an invalid merge span
    /// or a column width budget that misses the usable page width is a
    /// construction error, never a half-built document.
    pub fn build(&self, record: &ApplicationRecord) -> Result<DocumentModel> {
        let mut model = DocumentModel::new(self.config.page).with_font(self.config.font.clone());

        for heading in self.heading() {
            model.push(Block::Heading(heading));
        }

        let mut table = Table::new(FORM_COLUMNS);
        table.alignment = TableAlignment::Center;
        table.style_id = Some(TABLE_GRID_STYLE.to_string());

        let labels = &self.config.labels;
        let heights = &self.config.heights;

        table.push_row(full_width(&labels.parties_header).with_height(heights.section_header));
        self.push_party(&mut table, &self.config.applicant, &record.applicant);
        self.push_party(&mut table, &self.config.opposite_party, &record.opposite_party);
        table.push_row(full_width(&labels.dispute_header).with_height(heights.section_header));
        table.push_row(self.citation_row());
        table.push_row(self.narrative_row(&record.dispute.nature));

        // Widths go on last so every row, merged or not, gets them.
        table.apply_column_widths(&self.config.columns)?;

        tracing::debug!(rows = table.rows.len(), "laid out form table");
        model.push(Block::Table(table));
        model.validate()?;

        Ok(model)
    }

    fn heading(&self) -> Vec<Paragraph> {
        let heading = &self.config.heading;
        let mut paragraphs = Vec::with_capacity(2);

        if !heading.title_lines.is_empty() {
            paragraphs.push(
                Paragraph::new(vec![RichRun::bold(heading.title_lines.join("\n"))])
                    .aligned(Alignment::Center),
            );
        }
        if !heading.authority_lines.is_empty() {
            paragraphs.push(
                Paragraph::new(vec![RichRun::plain(heading.authority_lines.join("\n"))])
                    .aligned(Alignment::Center),
            );
        }
        paragraphs
    }

    fn push_party(&self, table: &mut Table, section: &PartySection, party: &PartyInfo) {
        let labels = &self.config.labels;
        let heights = &self.config.heights;

        if let Some(header) = &section.header {
            table.push_row(full_width(header).with_height(heights.section_header));
        }

        table.push_row(
            TableRow::new(vec![
                Cell::text(section.ordinal.as_str()),
                Cell::label(section.name_label.as_str()),
                Cell::text(party.name.as_str()),
            ])
            .with_height(heights.name),
        );

        if let Some(contact_header) = &section.contact_header {
            table.push_row(
                TableRow::new(vec![
                    Cell::empty(),
                    Cell::label(contact_header.as_str()).span(2),
                ])
                .with_height(heights.contact_header),
            );
        }

        table.push_row(
            TableRow::new(vec![
                Cell::empty(),
                Cell::label(labels.address.as_str()),
                address_cell(section, party),
            ])
            .with_height(heights.address),
        );

        for (label, value) in [
            (&labels.telephone, &party.telephone),
            (&labels.mobile, &party.mobile),
            (&labels.email, &party.email),
        ] {
            table.push_row(
                TableRow::new(vec![
                    Cell::empty(),
                    Cell::label(label.as_str()),
                    Cell::text(value.as_str()),
                ])
                .with_height(heights.contact),
            );
        }
    }

    fn citation_row(&self) -> TableRow {
        let cell = Cell::from_runs(vec![RichRun::bold_underlined(
            self.config.labels.rule_citation.as_str(),
        )])
        .align(Alignment::Center)
        .span(FORM_COLUMNS as u16);

        TableRow::new(vec![cell]).with_height(self.config.heights.citation)
    }

    fn narrative_row(&self, nature: &str) -> TableRow {
        let narrative = Cell::from_runs(vec![
            RichRun::bold(format!("{}\n", self.config.labels.dispute_label)),
            RichRun::plain(nature),
        ]);

        let cells = match self.config.dispute_span {
            DisputeSpan::LabelColumns => vec![Cell::empty(), narrative.span(2)],
            DisputeSpan::FullRow => vec![narrative.span(FORM_COLUMNS as u16)],
        };
        TableRow::new(cells).with_height(self.config.heights.narrative)
    }
}

/// Lay out a record with the given configuration
pub fn build_document(record: &ApplicationRecord, config: &FormConfig) -> Result<DocumentModel> {
    LayoutBuilder::new(config).build(record)
}

/// A bold row merged across the whole table
fn full_width(text: &str) -> TableRow {
    TableRow::new(vec![Cell::label(text).span(FORM_COLUMNS as u16)])
}

/// Registered and correspondence addresses, each under a bold caption
fn address_cell(section: &PartySection, party: &PartyInfo) -> Cell {
    Cell::from_runs(vec![
        RichRun::bold(format!("{}\n", section.registered_caption)),
        RichRun::plain(format!("{}\n\n", party.registered_address)),
        RichRun::bold(format!("{}\n", section.correspondence_caption)),
        RichRun::plain(party.correspondence_address.as_str()),
    ])
}
