use crate::config::LayoutConfig;
use crate::layout::page_count;
use crate::types::*;

/// Calculate statistics for converting `image_count` images, assuming every
/// image decodes
pub fn calculate_statistics(image_count: usize, config: &LayoutConfig) -> ConversionStatistics {
    let pages = page_count(image_count, config.spread_mode);

    let (spreads, trailing_single) = match config.spread_mode {
        SpreadMode::Single => (0, false),
        SpreadMode::Double => (image_count / 2, image_count % 2 == 1),
    };

    ConversionStatistics {
        images: image_count,
        pages,
        spreads,
        trailing_single,
    }
}
