//! Image to PDF conversion
//!
//! This module drives a conversion run:
//! 1. Decode each input in order, one at a time, and embed it
//! 2. Plan pages for the images that decoded
//! 3. Render the pages and serialize the document

mod decode;
mod io;
mod render;
mod session;

pub use decode::{DecodedImage, decode_image, embed_image, sniff_format};
pub use io::{load_image, load_images, mime_for_path, save_pdf, save_to_bytes};
pub use render::{render_document, render_page};
pub use session::ConversionSession;

use crate::config::LayoutConfig;
use crate::filename::resolve_filename_now;
use crate::layout::{ImageAsset, ImageId, plan_document};
use crate::types::*;
use log::info;
use lopdf::Document;
use std::collections::HashMap;

/// Convert `inputs` into a single PDF.
///
/// Inputs are decoded strictly in sequence; each decode is awaited before the
/// next one starts, so at most one decoded image is held in memory. Inputs
/// that fail to decode are reported in [`ConversionOutput::skipped`] and the
/// run carries on without them.
pub async fn convert(
    inputs: &[ImageInput],
    config: &LayoutConfig,
    output_name: Option<&str>,
) -> Result<ConversionOutput> {
    let mut output = Document::with_version("1.7");
    let mut assets = Vec::with_capacity(inputs.len());
    let mut xobjects = HashMap::with_capacity(inputs.len());
    let mut skipped = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        let bytes = input.bytes.clone();
        let mime = input.mime.clone();
        let decoded = tokio::task::spawn_blocking(move || decode_image(&bytes, &mime)).await?;

        match decoded {
            Ok(decoded) => {
                let id = ImageId(index);
                assets.push(ImageAsset::new(
                    id,
                    decoded.width,
                    decoded.height,
                    decoded.format,
                ));
                xobjects.insert(id, embed_image(&mut output, decoded));
            }
            Err(reason) => {
                info!(
                    "Skipping image {} ({}): {}",
                    index + 1,
                    input.label(),
                    reason
                );
                skipped.push(SkippedImage {
                    index,
                    name: input.name.clone(),
                    mime: input.mime.clone(),
                    reason,
                });
            }
        }
    }

    if assets.is_empty() {
        return Err(ConvertError::NoImages {
            skipped: skipped.len(),
        });
    }

    let layout = plan_document(&assets, config);
    render_document(&mut output, &layout, &xobjects)?;
    let pdf = save_to_bytes(output).await?;

    info!(
        "Converted {} image(s) into {} page(s), {} skipped",
        assets.len(),
        layout.page_count(),
        skipped.len()
    );

    Ok(ConversionOutput {
        pdf,
        filename: resolve_filename_now(output_name),
        page_count: layout.page_count(),
        skipped,
    })
}
