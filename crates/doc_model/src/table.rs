//! Table model - Tables, rows, cells, and grid definitions
//!
//! A table owns a grid of logical columns. Each row holds cells, and each
//! cell covers `grid_span` consecutive grid columns (horizontal merge).
//! Column widths are applied to the grid and every cell after the rows
//! exist, so the final widths never depend on the order rows were added.

use crate::{Alignment, DocModelError, Paragraph, Result, RichRun, Twips};
use serde::{Deserialize, Serialize};

// =============================================================================
// Height Rules
// =============================================================================

/// How row height is determined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightRule {
    /// Height is automatically determined by content
    #[default]
    Auto,
    /// Height is exactly as specified
    Exact,
    /// Height is at least as specified (can grow)
    AtLeast,
}

/// Row height policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowHeight {
    pub rule: HeightRule,
    pub value: Twips,
}

impl RowHeight {
    /// Content-sized row
    pub fn auto() -> Self {
        Self::default()
    }

    /// Row locked to an exact height
    pub fn exact(value: Twips) -> Self {
        Self {
            rule: HeightRule::Exact,
            value,
        }
    }

    pub fn at_least(value: Twips) -> Self {
        Self {
            rule: HeightRule::AtLeast,
            value,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.rule == HeightRule::Auto
    }
}

// =============================================================================
// Alignment
// =============================================================================

/// Vertical alignment within a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellVerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Horizontal placement of the whole table on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableAlignment {
    #[default]
    Left,
    Center,
    Right,
}

// =============================================================================
// Cell
// =============================================================================

/// A table cell holding one paragraph of rich runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: Paragraph,
    /// Number of grid columns this cell covers (1 = no merge)
    pub grid_span: u16,
    pub vertical_align: CellVerticalAlign,
    /// Resolved width; set by [`Table::apply_column_widths`]
    pub width: Option<Twips>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: Paragraph::default(),
            grid_span: 1,
            vertical_align: CellVerticalAlign::Top,
            width: None,
        }
    }
}

impl Cell {
    /// A cell with no text. Still present in the row, just blank.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A cell holding plain text
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_runs(vec![RichRun::plain(text)])
    }

    /// A cell holding a bold label
    pub fn label(text: impl Into<String>) -> Self {
        Self::from_runs(vec![RichRun::bold(text)])
    }

    /// A cell composed of several differently styled runs
    pub fn from_runs(runs: Vec<RichRun>) -> Self {
        Self {
            content: Paragraph::new(runs),
            ..Self::default()
        }
    }

    /// Merge this cell across `span` grid columns
    pub fn span(mut self, span: u16) -> Self {
        self.grid_span = span;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.content.alignment = alignment;
        self
    }

    pub fn runs(&self) -> &[RichRun] {
        &self.content.runs
    }

    pub fn plain_text(&self) -> String {
        self.content.plain_text()
    }

    /// True when the cell has text and every non-empty run is bold
    pub fn is_bold(&self) -> bool {
        let mut visible = self.runs().iter().filter(|r| !r.is_empty()).peekable();
        visible.peek().is_some() && visible.all(|r| r.bold)
    }

    /// True when the cell has text and every non-empty run is underlined
    pub fn is_underlined(&self) -> bool {
        let mut visible = self.runs().iter().filter(|r| !r.is_empty()).peekable();
        visible.peek().is_some() && visible.all(|r| r.underline)
    }
}

// =============================================================================
// Row
// =============================================================================

/// A table row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<Cell>,
    pub height: RowHeight,
}

impl TableRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            height: RowHeight::auto(),
        }
    }

    pub fn with_height(mut self, height: RowHeight) -> Self {
        self.height = height;
        self
    }

    /// Number of grid columns covered after merge expansion
    pub fn logical_columns(&self) -> usize {
        self.cells.iter().map(|c| c.grid_span as usize).sum()
    }

    /// Sum of resolved cell widths (zero for cells not yet sized)
    pub fn total_width(&self) -> Twips {
        self.cells.iter().filter_map(|c| c.width).sum()
    }

    /// Find the cell that covers grid column `column`
    pub fn cell_at_column(&self, column: usize) -> Option<&Cell> {
        let mut start = 0;
        for cell in &self.cells {
            let end = start + cell.grid_span as usize;
            if column < end {
                return Some(cell);
            }
            start = end;
        }
        None
    }
}

// =============================================================================
// Table
// =============================================================================

/// Style id for a plain bordered grid
pub const TABLE_GRID_STYLE: &str = "TableGrid";

/// A table with a fixed column grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Width of each logical column
    pub grid: Vec<Twips>,
    pub rows: Vec<TableRow>,
    pub alignment: TableAlignment,
    pub style_id: Option<String>,
}

impl Table {
    /// Create an empty table with `columns` logical columns of unset width
    pub fn new(columns: usize) -> Self {
        Self {
            grid: vec![Twips::ZERO; columns],
            rows: Vec::new(),
            alignment: TableAlignment::Left,
            style_id: None,
        }
    }

    pub fn column_count(&self) -> usize {
        self.grid.len()
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Total width of the grid
    pub fn width(&self) -> Twips {
        self.grid.iter().sum()
    }

    /// Check merge spans against the grid. `index` is only used for error
    /// reporting.
    pub fn validate(&self, index: usize) -> Result<()> {
        let columns = self.column_count();
        if columns == 0 || self.rows.is_empty() {
            return Err(DocModelError::EmptyTable(index));
        }

        for (row_idx, row) in self.rows.iter().enumerate() {
            let mut covered = 0usize;
            for (cell_idx, cell) in row.cells.iter().enumerate() {
                let span = cell.grid_span;
                if span == 0 || covered + span as usize > columns {
                    return Err(DocModelError::InvalidSpan {
                        row: row_idx,
                        cell: cell_idx,
                        span,
                    });
                }
                covered += span as usize;
            }
            if covered != columns {
                return Err(DocModelError::ColumnCountMismatch {
                    row: row_idx,
                    expected: columns,
                    found: covered,
                });
            }
        }
        Ok(())
    }

    /// Set the grid widths and resize every cell to the columns it spans.
    ///
    /// Must run after all rows are added; rows pushed afterwards keep
    /// unset widths.
    pub fn apply_column_widths(&mut self, widths: &[Twips]) -> Result<()> {
        if widths.len() != self.column_count() {
            return Err(DocModelError::ColumnCountMismatch {
                row: 0,
                expected: self.column_count(),
                found: widths.len(),
            });
        }
        self.grid = widths.to_vec();

        for (row_idx, row) in self.rows.iter_mut().enumerate() {
            let mut column = 0usize;
            for (cell_idx, cell) in row.cells.iter_mut().enumerate() {
                let end = column + cell.grid_span as usize;
                let Some(spanned) = widths.get(column..end) else {
                    return Err(DocModelError::InvalidSpan {
                        row: row_idx,
                        cell: cell_idx,
                        span: cell.grid_span,
                    });
                };
                cell.width = Some(spanned.iter().sum());
                column = end;
            }
        }
        Ok(())
    }
}
