//! Page planning: from a sequence of images to page descriptors

use crate::config::LayoutConfig;
use crate::types::SpreadMode;

use super::{
    DocumentLayout, ImageAsset, PageDescriptor, content_rect, page_border, page_rect,
    pair_spreads, place_asset,
};

/// Plan every page of a document.
///
/// Images are grouped per page according to the spread mode, then each group
/// becomes one [`PageDescriptor`]. Pages keep the order of `images`.
pub fn plan_document(images: &[ImageAsset], config: &LayoutConfig) -> DocumentLayout {
    let pages = pair_spreads(images, config.spread_mode)
        .into_iter()
        .map(|group| plan_page(group, config))
        .collect();

    DocumentLayout { pages }
}

/// Plan a single page for a group of one or two images.
///
/// With an `Auto` page size the first image decides the page dimensions.
/// In single mode the image gets the whole content area. In double mode the
/// content area is split into equal left and right halves, and a lone image
/// at the end of the document takes the left one. The border always follows
/// the whole content area.
pub fn plan_page(group: &[ImageAsset], config: &LayoutConfig) -> PageDescriptor {
    let page = page_rect(config, group.first());
    let content = content_rect(&page, config.margin_mm);

    let placements = match config.spread_mode {
        SpreadMode::Single => group
            .iter()
            .map(|image| place_asset(&content, image, config.image_fit))
            .collect(),
        SpreadMode::Double => {
            // A trailing odd image keeps the left half; the right stays blank
            let (left_half, right_half) = content.split_halves();
            group
                .iter()
                .zip([left_half, right_half])
                .map(|(image, half)| place_asset(&half, image, config.image_fit))
                .collect()
        }
    };

    PageDescriptor {
        page_rect: page,
        content_rect: content,
        placements,
        border: page_border(&content, config),
    }
}
