//! File I/O for conversion inputs and outputs

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// MIME type for a path, from its extension
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageFormat::from_extension)
        .map(ImageFormat::mime_type)
        .unwrap_or("application/octet-stream")
}

/// Load a single image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<ImageInput> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let mut input = ImageInput::new(bytes, mime_for_path(path));
    if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
        input = input.with_name(name);
    }
    Ok(input)
}

/// Load multiple image files, in order
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageInput>> {
    let mut inputs = Vec::with_capacity(paths.len());
    for path in paths {
        inputs.push(load_image(path).await?);
    }
    Ok(inputs)
}

/// Serialize a document to bytes
pub async fn save_to_bytes(mut doc: Document) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ConvertError>(writer)
    })
    .await?
}

/// Write a finished PDF to disk
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
