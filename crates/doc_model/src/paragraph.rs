//! Paragraph - an aligned sequence of rich runs

use crate::RichRun;
use serde::{Deserialize, Serialize};

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// A paragraph of runs with a single alignment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<RichRun>,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Paragraph {
    pub fn new(runs: Vec<RichRun>) -> Self {
        Self {
            runs,
            alignment: Alignment::Left,
        }
    }

    /// Builder-style alignment setter
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// True when there is no visible text
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(RichRun::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_concatenates_runs() {
        let para = Paragraph::new(vec![RichRun::bold("Name: "), RichRun::plain("Jane")]);
        assert_eq!(para.plain_text(), "Name: Jane");
        assert!(!para.is_empty());
    }

    #[test]
    fn test_empty_paragraph() {
        assert!(Paragraph::default().is_empty());
        assert!(Paragraph::new(vec![RichRun::plain("")]).is_empty());
    }
}
