use std::path::Path;

use anyhow::{Context, Result};

use crate::record::Document;

/// MIME type guessed from the file extension, the way a browser file picker
/// reports it.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Builds a document candidate from file metadata. Contents are not read.
pub fn document_from_path(path: &Path) -> Result<Document> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to read metadata for '{}'", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("'{}' is not a file", path.display());
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::new(name, mime_for_path(path), metadata.len()))
}
