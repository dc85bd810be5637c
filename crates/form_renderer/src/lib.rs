//! Form Renderer - Form A mediation application as a DOCX download
//!
//! One operation: [`render`] turns an [`ApplicationRecord`] into the bytes
//! of a WordprocessingML document. It lays the record out with
//! [`form_layout`] and serializes the result with [`store`]. There is no
//! state between calls, so independent renders can run in parallel.
//!
//! # Example
//!
//! ```rust
//! use form_renderer::{render, ApplicationRecord, FieldPolicy};
//!
//! let record = ApplicationRecord::from_pairs(
//!     [("client_name", "Jane Doe"), ("dispute_nature", "Unpaid invoices")],
//!     &FieldPolicy::Empty,
//! );
//! let bytes = render(&record).unwrap();
//! assert!(bytes.starts_with(b"PK"));
//! ```

use std::collections::HashMap;

pub use form_layout::{
    keys, ApplicationRecord, DisputeInfo, DisputeSpan, FieldPolicy, FormConfig, PartyInfo,
};
pub use store::{DocxError, DocxResult};

/// MIME type the document is served with
pub const CONTENT_TYPE: &str = store::DOCX_MIME_TYPE;

/// Suggested attachment filename
pub const FILENAME: &str = "FORM_A_Mediation_Application.docx";

/// Render a record with the standard Form A layout
pub fn render(record: &ApplicationRecord) -> DocxResult<Vec<u8>> {
    render_with(record, &FormConfig::standard())
}

/// Render a record with an explicit layout configuration
pub fn render_with(record: &ApplicationRecord, config: &FormConfig) -> DocxResult<Vec<u8>> {
    let model = form_layout::build_document(record, config)?;
    let bytes = store::export_docx_bytes(&model)?;
    tracing::debug!(bytes = bytes.len(), "rendered form");
    Ok(bytes)
}

/// Extract a record from submitted fields and render it
pub fn render_fields(
    fields: &HashMap<String, String>,
    policy: &FieldPolicy,
    config: &FormConfig,
) -> DocxResult<Vec<u8>> {
    let record = ApplicationRecord::from_fields(fields, policy);
    render_with(&record, config)
}

/// `Content-Disposition` header value for the download
pub fn content_disposition() -> String {
    format!("attachment; filename={}", FILENAME)
}
