//! Store - Document file output
//!
//! This crate serializes a [`doc_model::DocumentModel`] into a WordprocessingML
//! (DOCX) package, either in memory or on disk.

pub mod docx;

// Re-export DOCX functionality
pub use docx::{export_docx, export_docx_bytes, DocxError, DocxResult, DOCX_MIME_TYPE};
