//! Rich text run - a contiguous span of text with one styling configuration
//!
//! Styling is fixed when the run is created. There is no pass that walks a
//! paragraph afterwards and flips runs to bold.

use serde::{Deserialize, Serialize};

/// A span of text sharing bold/underline styling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichRun {
    /// Text content; `\n` marks a line break inside the paragraph
    pub text: String,
    /// Bold weight
    #[serde(default)]
    pub bold: bool,
    /// Single underline
    #[serde(default)]
    pub underline: bool,
}

impl RichRun {
    /// Create a run with no styling
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            underline: false,
        }
    }

    /// Create a bold run
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            underline: false,
        }
    }

    /// Create a bold, underlined run
    pub fn bold_underlined(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            underline: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
