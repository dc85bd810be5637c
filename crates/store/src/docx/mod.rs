//! WordprocessingML output
//!
//! The package is a ZIP archive with six entries: the content types part,
//! the root relationships, `word/document.xml`, `word/styles.xml`,
//! `word/settings.xml` and the document relationships. [`package`] lists
//! them; the `*_writer` modules produce their XML as plain strings.
//!
//! The same model always produces the same bytes. Part order is fixed,
//! every ZIP entry carries the DOS epoch timestamp and no core properties
//! (and so no creation date) are written.

mod error;
pub mod package;
mod writer;
mod document_writer;
mod styles_writer;
mod tables_writer;
mod api;

pub use error::{DocxError, DocxResult};
pub use api::{export_docx, export_docx_bytes};
pub use writer::DocxWriter;

/// MIME type of a WordprocessingML package, as served to a client
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Namespaces declared on the document and styles root elements
pub(crate) mod namespaces {
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
}
