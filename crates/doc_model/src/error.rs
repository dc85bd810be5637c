//! Error types for document model construction

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocModelError {
    #[error("Invalid merge span in row {row}, cell {cell}: span {span}")]
    InvalidSpan { row: usize, cell: usize, span: u16 },

    #[error("Row {row} covers {found} columns, table grid has {expected}")]
    ColumnCountMismatch { row: usize, expected: usize, found: usize },

    #[error("Column widths sum to {found} twips, usable page width is {expected}")]
    WidthMismatch { expected: u32, found: u32 },

    #[error("Table {0} has no rows or no grid columns")]
    EmptyTable(usize),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
