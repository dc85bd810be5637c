//! Page setup - paper size and margins
//!
//! The usable width (page width minus left and right margins) is the
//! budget that table column widths must add up to.

use crate::Twips;
use serde::{Deserialize, Serialize};

// =============================================================================
// Page Size
// =============================================================================

/// Page dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: Twips,
    pub height: Twips,
}

impl PageSize {
    /// A4 portrait, 21.0 cm x 29.7 cm
    pub fn a4() -> Self {
        Self {
            width: Twips::from_cm(21.0),
            height: Twips::from_cm(29.7),
        }
    }

}

impl Default for PageSize {
    fn default() -> Self {
        Self::a4()
    }
}

// =============================================================================
// Page Margins
// =============================================================================

/// Page margin settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMargins {
    pub top: Twips,
    pub bottom: Twips,
    pub left: Twips,
    pub right: Twips,
    /// Distance from page edge to header content
    pub header: Twips,
    /// Distance from page edge to footer content
    pub footer: Twips,
}

impl PageMargins {
    /// The same margin on all four sides
    pub fn uniform(margin: Twips) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
            header: Twips(708),
            footer: Twips(708),
        }
    }

    /// 2 cm on every side
    pub fn form() -> Self {
        Self::uniform(Twips::from_cm(2.0))
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::form()
    }
}

// =============================================================================
// Page Setup
// =============================================================================

/// Size and margins of every page in the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSetup {
    pub size: PageSize,
    pub margins: PageMargins,
}

impl PageSetup {
    pub fn new(size: PageSize, margins: PageMargins) -> Self {
        Self { size, margins }
    }

    /// Page width minus left and right margins
    pub fn usable_width(&self) -> Twips {
        self.size
            .width
            .saturating_sub(self.margins.left + self.margins.right)
    }
}
