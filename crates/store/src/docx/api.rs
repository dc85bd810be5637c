//! Entry points: serialize a model to a file or to memory

use crate::docx::error::DocxResult;
use crate::docx::writer::DocxWriter;
use doc_model::DocumentModel;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Write `model` as a DOCX file at `path`.
///
/// Missing parent directories are created. The model is validated before
/// the file is created, so an invalid model leaves nothing on disk.
pub fn export_docx(model: &DocumentModel, path: &Path) -> DocxResult<()> {
    model.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = DocxWriter::new(BufWriter::new(file)).write(model)?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), "exported docx");
    Ok(())
}

/// Serialize `model` to an in-memory DOCX package
pub fn export_docx_bytes(model: &DocumentModel) -> DocxResult<Vec<u8>> {
    let cursor = DocxWriter::new(Cursor::new(Vec::new())).write(model)?;
    Ok(cursor.into_inner())
}
