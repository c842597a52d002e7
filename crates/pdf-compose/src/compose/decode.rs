//! Image decoding and conversion into PDF image XObjects
//!
//! Decoding is CPU-bound and runs on a blocking task. The pixels only live
//! for the duration of one call: what comes out is a ready-to-embed stream.

use crate::types::{DecodeError, ImageFormat};
use image::{DynamicImage, GenericImageView};
use log::{debug, warn};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// An image converted to PDF form, not yet added to a document
#[derive(Debug)]
pub struct DecodedImage {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    /// The image XObject stream
    pub image: Stream,
    /// Alpha channel as a grayscale soft mask
    pub soft_mask: Option<Stream>,
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

/// Determine the format from the byte signature.
///
/// The declared MIME type is not trusted: a mismatch is logged and the
/// signature wins. Anything that is neither JPEG nor PNG is rejected.
pub fn sniff_format(bytes: &[u8], declared_mime: &str) -> Result<ImageFormat, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let sniffed = match image::guess_format(bytes) {
        Ok(image::ImageFormat::Jpeg) => ImageFormat::Jpeg,
        Ok(image::ImageFormat::Png) => ImageFormat::Png,
        _ => {
            return Err(DecodeError::UnsupportedFormat {
                declared: declared_mime.to_string(),
            });
        }
    };

    if let Some(declared) = ImageFormat::from_mime(declared_mime) {
        if declared != sniffed {
            warn!(
                "Image declared as {} is actually {}",
                declared.mime_type(),
                sniffed.mime_type()
            );
        }
    }

    Ok(sniffed)
}

/// Decode `bytes` and build the PDF streams for it
pub fn decode_image(bytes: &[u8], declared_mime: &str) -> Result<DecodedImage, DecodeError> {
    let format = sniff_format(bytes, declared_mime)?;
    let decoded = image::load_from_memory_with_format(bytes, format.into())?;
    let (width, height) = decoded.dimensions();

    debug!(
        "Decoded {} image {}x{} ({:?})",
        format.mime_type(),
        width,
        height,
        decoded.color()
    );

    let (image, soft_mask) = match format {
        ImageFormat::Jpeg => match jpeg_passthrough(bytes, &decoded) {
            Some(stream) => (stream, None),
            None => raster_streams(&decoded)?,
        },
        ImageFormat::Png => raster_streams(&decoded)?,
    };

    Ok(DecodedImage {
        format,
        width,
        height,
        image,
        soft_mask,
    })
}

/// Add a decoded image (and its soft mask) to `output`, returning the
/// XObject id to reference from page resources
pub fn embed_image(output: &mut Document, decoded: DecodedImage) -> ObjectId {
    let DecodedImage {
        mut image,
        soft_mask,
        ..
    } = decoded;

    if let Some(mask) = soft_mask {
        let mask_id = output.add_object(mask);
        image.dict.set("SMask", Object::Reference(mask_id));
    }

    output.add_object(image)
}

fn image_dict(width: u32, height: u32, color_space: &str) -> Dictionary {
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(width as i64)),
        ("Height", Object::Integer(height as i64)),
        ("ColorSpace", Object::Name(color_space.as_bytes().to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
    ])
}

/// Embed JPEG data untouched (`DCTDecode`) when it is gray or RGB.
///
/// CMYK and other layouts return `None` and go through re-encoding instead.
fn jpeg_passthrough(bytes: &[u8], decoded: &DynamicImage) -> Option<Stream> {
    let color_space = match jpeg_component_count(bytes)? {
        1 => "DeviceGray",
        3 => "DeviceRGB",
        _ => return None,
    };

    let mut dict = image_dict(decoded.width(), decoded.height(), color_space);
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    // Already compressed
    Some(Stream::new(dict, bytes.to_vec()).with_compression(false))
}

/// Number of color components declared in the JPEG frame header
fn jpeg_component_count(bytes: &[u8]) -> Option<u8> {
    // Skip SOI
    let mut pos = 2;
    while pos + 4 <= bytes.len() {
        if bytes[pos] != 0xFF {
            return None;
        }
        let marker = bytes[pos + 1];
        if marker == 0xFF {
            // Fill byte
            pos += 1;
            continue;
        }

        let is_frame = (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_frame {
            // marker(2) length(2) precision(1) height(2) width(2) components(1)
            return bytes.get(pos + 9).copied();
        }

        let length = u16::from_be_bytes([bytes[pos + 2], bytes[pos + 3]]) as usize;
        pos += 2 + length;
    }
    None
}

/// Re-encode as Flate-compressed 8-bit RGB, alpha split into a soft mask
fn raster_streams(decoded: &DynamicImage) -> Result<(Stream, Option<Stream>), DecodeError> {
    let (width, height) = decoded.dimensions();

    let soft_mask = if decoded.color().has_alpha() {
        let alpha: Vec<u8> = decoded.to_rgba8().pixels().map(|pixel| pixel[3]).collect();
        let mut mask = Stream::new(image_dict(width, height, "DeviceGray"), alpha);
        compress(&mut mask)?;
        Some(mask)
    } else {
        None
    };

    let rgb = decoded.to_rgb8().into_raw();
    let mut image = Stream::new(image_dict(width, height, "DeviceRGB"), rgb);
    compress(&mut image)?;

    Ok((image, soft_mask))
}

fn compress(stream: &mut Stream) -> Result<(), DecodeError> {
    stream
        .compress()
        .map_err(|e| DecodeError::Embed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb, Rgba};
    use std::io::Cursor;

    fn encode(image: DynamicImage, format: image::ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_sniff_ignores_declared_mime() {
        let png = encode(
            DynamicImage::ImageRgb8(ImageBuffer::from_pixel(4, 4, Rgb([1, 2, 3]))),
            image::ImageFormat::Png,
        );
        assert_eq!(sniff_format(&png, "image/jpeg").unwrap(), ImageFormat::Png);
        assert_eq!(sniff_format(&png, "").unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_sniff_rejects_other_formats() {
        let gif_header = b"GIF89a\x01\x00\x01\x00";
        assert!(matches!(
            sniff_format(gif_header, "image/gif"),
            Err(DecodeError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            sniff_format(b"not an image", "image/png"),
            Err(DecodeError::UnsupportedFormat { .. })
        ));
        assert!(matches!(sniff_format(&[], "image/png"), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_jpeg_is_passed_through() {
        let jpeg = encode(
            DynamicImage::ImageRgb8(ImageBuffer::from_pixel(16, 8, Rgb([200, 10, 10]))),
            image::ImageFormat::Jpeg,
        );
        assert_eq!(jpeg_component_count(&jpeg), Some(3));

        let decoded = decode_image(&jpeg, "image/jpeg").unwrap();
        assert_eq!((decoded.width, decoded.height), (16, 8));
        assert_eq!(decoded.image.content, jpeg);
        assert!(decoded.soft_mask.is_none());
    }

    #[test]
    fn test_gray_jpeg_component_count() {
        let jpeg = encode(
            DynamicImage::ImageLuma8(ImageBuffer::from_pixel(8, 8, Luma([128]))),
            image::ImageFormat::Jpeg,
        );
        assert_eq!(jpeg_component_count(&jpeg), Some(1));
    }

    #[test]
    fn test_png_alpha_becomes_soft_mask() {
        let png = encode(
            DynamicImage::ImageRgba8(ImageBuffer::from_pixel(3, 2, Rgba([0, 0, 255, 64]))),
            image::ImageFormat::Png,
        );
        let decoded = decode_image(&png, "image/png").unwrap();

        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!((decoded.width, decoded.height), (3, 2));
        assert!(decoded.soft_mask.is_some());
    }

    #[test]
    fn test_truncated_png_fails() {
        let png = encode(
            DynamicImage::ImageRgb8(ImageBuffer::from_pixel(32, 32, Rgb([9, 9, 9]))),
            image::ImageFormat::Png,
        );
        let truncated = &png[..png.len() / 2];
        assert!(matches!(
            decode_image(truncated, "image/png"),
            Err(DecodeError::Image(_))
        ));
    }

    #[test]
    fn test_embed_links_soft_mask() {
        let png = encode(
            DynamicImage::ImageRgba8(ImageBuffer::from_pixel(2, 2, Rgba([1, 2, 3, 4]))),
            image::ImageFormat::Png,
        );
        let decoded = decode_image(&png, "image/png").unwrap();

        let mut output = Document::with_version("1.7");
        let id = embed_image(&mut output, decoded);
        let stream = output.get_object(id).unwrap().as_stream().unwrap();
        assert!(stream.dict.get(b"SMask").is_ok());
    }
}
