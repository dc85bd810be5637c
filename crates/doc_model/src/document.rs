//! Document model root

use crate::{DocModelError, PageSetup, Paragraph, Result, Table};
use serde::{Deserialize, Serialize};

/// A top-level document element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// A standalone paragraph such as a title or caption
    Heading(Paragraph),
    Table(Table),
}

/// Default font for all text in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    /// Size in half-points (24 = 12 pt)
    pub half_points: u16,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, points: u16) -> Self {
        Self {
            family: family.into(),
            half_points: points * 2,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Times New Roman", 12)
    }
}

/// An ordered sequence of blocks laid out on one page setup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    pub page: PageSetup,
    #[serde(default)]
    pub font: FontSpec,
    pub blocks: Vec<Block>,
}

impl DocumentModel {
    pub fn new(page: PageSetup) -> Self {
        Self {
            page,
            font: FontSpec::default(),
            blocks: Vec::new(),
        }
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Iterate over the tables in document order
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            Block::Heading(_) => None,
        })
    }

    /// Iterate over the heading paragraphs in document order
    pub fn headings(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading(p) => Some(p),
            Block::Table(_) => None,
        })
    }

    /// Check every structural invariant the serializer relies on:
    /// merge spans fit each table grid, and grid widths add up to the
    /// usable page width.
    pub fn validate(&self) -> Result<()> {
        let usable = self.page.usable_width();
        for (index, table) in self.tables().enumerate() {
            table.validate(index)?;
            let width = table.width();
            if width != usable {
                return Err(DocModelError::WidthMismatch {
                    expected: usable.get(),
                    found: width.get(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alignment, Cell, RichRun, TableRow, Twips};

    fn model_with_widths(widths: &[Twips]) -> DocumentModel {
        let mut model = DocumentModel::new(PageSetup::default());
        model.push(Block::Heading(
            Paragraph::new(vec![RichRun::bold("TITLE")]).aligned(Alignment::Center),
        ));
        let mut table = Table::new(3);
        table.push_row(TableRow::new(vec![Cell::label("H").span(3)]));
        table.apply_column_widths(widths).unwrap();
        model.push(Block::Table(table));
        model
    }

    #[test]
    fn test_validate_ok() {
        let model = model_with_widths(&[Twips(680), Twips(2722), Twips(6237)]);
        assert!(model.validate().is_ok());
        assert_eq!(model.tables().count(), 1);
        assert_eq!(model.headings().count(), 1);
    }

    #[test]
    fn test_validate_width_mismatch() {
        let model = model_with_widths(&[Twips(680), Twips(2722), Twips(6000)]);
        assert_eq!(
            model.validate(),
            Err(DocModelError::WidthMismatch { expected: 9639, found: 9402 })
        );
    }

    #[test]
    fn test_default_font() {
        let font = FontSpec::default();
        assert_eq!(font.family, "Times New Roman");
        assert_eq!(font.half_points, 24);
    }

    #[test]
    fn test_block_serializes_with_kind_tag() {
        let block = Block::Heading(Paragraph::new(vec![RichRun::plain("x")]));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["kind"], "heading");
    }
}
