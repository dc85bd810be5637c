//! Layout configuration
//!
//! Everything the builder writes that is not taken from the record lives
//! here: captions, labels, row heights, column widths and page geometry.
//! Two named presets cover the known shapes of the form; they differ only
//! in how the dispute narrative row is merged and sized.

use doc_model::{FontSpec, PageSetup, RowHeight, Twips};
use serde::{Deserialize, Serialize};

/// How the dispute narrative cell is merged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeSpan {
    /// Blank ordinal cell, narrative merged over columns 2-3
    #[default]
    LabelColumns,
    /// Narrative merged over all three columns
    FullRow,
}

/// Centered caption printed above the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingConfig {
    /// Bold title lines (form title, form name, rule reference)
    pub title_lines: Vec<String>,
    /// Plain lines naming the issuing authority
    pub authority_lines: Vec<String>,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            title_lines: vec![
                "FORM \u{2018}A\u{2019}".to_string(),
                "MEDIATION APPLICATION FORM".to_string(),
                "[REFER RULE 3(1)]".to_string(),
            ],
            authority_lines: vec![
                "Mumbai District Legal Services Authority".to_string(),
                "City Civil Court, Mumbai".to_string(),
            ],
        }
    }
}

/// Labels for one party block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySection {
    /// Full-width bold row opening the block, if any
    pub header: Option<String>,
    /// Text of the first column on the name row
    pub ordinal: String,
    pub name_label: String,
    /// Bold row spanning columns 2-3 above the address, if any
    pub contact_header: Option<String>,
    pub registered_caption: String,
    pub correspondence_caption: String,
}

impl PartySection {
    pub fn applicant() -> Self {
        Self {
            header: None,
            ordinal: "1".to_string(),
            name_label: "Name of Applicant".to_string(),
            contact_header: Some("Address and contact details of Applicant".to_string()),
            registered_caption: "REGISTERED ADDRESS:".to_string(),
            correspondence_caption: "CORRESPONDENCE BRANCH ADDRESS:".to_string(),
        }
    }

    pub fn opposite_party() -> Self {
        Self {
            header: Some("2  Name, Address and Contact details of Opposite Party:".to_string()),
            ordinal: String::new(),
            name_label: "Name".to_string(),
            contact_header: None,
            registered_caption: "REGISTERED ADDRESS:".to_string(),
            correspondence_caption: "CORRESPONDENCE ADDRESS:".to_string(),
        }
    }

    /// Rows this block adds to the table
    pub fn row_count(&self) -> usize {
        // name, address, telephone, mobile, email
        5 + usize::from(self.header.is_some()) + usize::from(self.contact_header.is_some())
    }
}

/// Fixed label text for the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub parties_header: String,
    pub address: String,
    pub telephone: String,
    pub mobile: String,
    pub email: String,
    pub dispute_header: String,
    pub rule_citation: String,
    pub dispute_label: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            parties_header: "DETAILS OF PARTIES:".to_string(),
            address: "Address".to_string(),
            telephone: "Telephone No.".to_string(),
            mobile: "Mobile No.".to_string(),
            email: "Email ID".to_string(),
            dispute_header: "DETAILS OF DISPUTE:".to_string(),
            rule_citation: "THE COMMERCIAL COURTS (PRE-INSTITUTION SETTLEMENT) RULES, 2018"
                .to_string(),
            dispute_label: "Nature of disputes as per section 2(1)(c) of the Commercial Courts \
                            Act, 2015 (4 of 2016):"
                .to_string(),
        }
    }
}

/// Height policy per kind of row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowHeights {
    pub section_header: RowHeight,
    pub name: RowHeight,
    pub contact_header: RowHeight,
    pub address: RowHeight,
    pub contact: RowHeight,
    pub citation: RowHeight,
    pub narrative: RowHeight,
}

impl Default for RowHeights {
    fn default() -> Self {
        Self {
            section_header: RowHeight::exact(Twips::from_cm(0.9)),
            name: RowHeight::exact(Twips::from_cm(0.9)),
            contact_header: RowHeight::exact(Twips::from_cm(0.9)),
            address: RowHeight::exact(Twips::from_cm(3.0)),
            contact: RowHeight::exact(Twips::from_cm(0.8)),
            citation: RowHeight::exact(Twips::from_cm(0.9)),
            narrative: RowHeight::auto(),
        }
    }
}

/// Complete layout configuration for Form A
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    pub page: PageSetup,
    pub font: FontSpec,
    /// Widths of the ordinal, label and value columns
    pub columns: [Twips; 3],
    pub heading: HeadingConfig,
    pub applicant: PartySection,
    pub opposite_party: PartySection,
    pub labels: Labels,
    pub heights: RowHeights,
    pub dispute_span: DisputeSpan,
}

impl FormConfig {
    /// The layout of the current paper form: narrative over columns 2-3,
    /// sized to its content.
    pub fn standard() -> Self {
        Self {
            page: PageSetup::default(),
            font: FontSpec::default(),
            columns: [
                Twips::from_cm(1.2),
                Twips::from_cm(4.8),
                Twips::from_cm(11.0),
            ],
            heading: HeadingConfig::default(),
            applicant: PartySection::applicant(),
            opposite_party: PartySection::opposite_party(),
            labels: Labels::default(),
            heights: RowHeights::default(),
            dispute_span: DisputeSpan::LabelColumns,
        }
    }

    /// The alternative layout: narrative across the full row with a
    /// minimum height reserving writing space.
    pub fn full_width_dispute() -> Self {
        let mut config = Self::standard();
        config.dispute_span = DisputeSpan::FullRow;
        config.heights.narrative = RowHeight::at_least(Twips::from_cm(6.0));
        config
    }

    /// Number of rows the table will have
    pub fn row_count(&self) -> usize {
        // parties header + dispute header, citation, narrative
        1 + self.applicant.row_count() + self.opposite_party.row_count() + 3
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::HeightRule;

    #[test]
    fn test_standard_columns_fill_usable_width() {
        let config = FormConfig::standard();
        let total: Twips = config.columns.iter().sum();
        assert_eq!(total, config.page.usable_width());
    }

    #[test]
    fn test_standard_row_count() {
        assert_eq!(FormConfig::standard().row_count(), 16);
        assert_eq!(FormConfig::full_width_dispute().row_count(), 16);
    }

    #[test]
    fn test_presets_differ_only_in_dispute_row() {
        let standard = FormConfig::standard();
        let full = FormConfig::full_width_dispute();

        assert_eq!(standard.dispute_span, DisputeSpan::LabelColumns);
        assert_eq!(full.dispute_span, DisputeSpan::FullRow);
        assert!(standard.heights.narrative.is_auto());
        assert_eq!(full.heights.narrative.rule, HeightRule::AtLeast);

        assert_eq!(standard.labels, full.labels);
        assert_eq!(standard.columns, full.columns);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = FormConfig::full_width_dispute();
        let json = serde_json::to_string(&config).unwrap();
        let back: FormConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
