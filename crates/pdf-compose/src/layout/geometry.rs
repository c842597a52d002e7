//! Page size and content area calculation

use crate::config::LayoutConfig;
use crate::constants::mm_to_pt;

use super::{ImageAsset, Rect};

/// Resolve the page dimensions in points for one page.
///
/// `image` is the page's first image. It is only consulted when the preset is
/// [`crate::types::PageSizePreset::Auto`], where the page takes the image's pixel size
/// (1px = 1pt). An `Auto` page without an image is zero-sized.
pub fn page_size(config: &LayoutConfig, image: Option<&ImageAsset>) -> (f32, f32) {
    let base = match config.page_size.dimensions_pt() {
        Some(dims) => dims,
        None => image.map(ImageAsset::size_pt).unwrap_or((0.0, 0.0)),
    };
    config.orientation.apply(base)
}

/// The page rectangle for one page, anchored at the origin
pub fn page_rect(config: &LayoutConfig, image: Option<&ImageAsset>) -> Rect {
    let (width, height) = page_size(config, image);
    Rect::from_size(width, height)
}

/// The content area: `page` inset by the margin on all four sides
pub fn content_rect(page: &Rect, margin_mm: f32) -> Rect {
    page.inset(mm_to_pt(margin_mm))
}
