//! Image placement within a target rectangle
//!
//! The target is either the whole content area of a page or, for two-image
//! spreads, one half of it.

use crate::types::ImageFit;

use super::{ImageAsset, Placement, Rect};

/// Calculate the destination rectangle of an image with aspect ratio
/// `aspect_ratio` (width / height) inside `target`.
///
/// * `Fit` scales uniformly until the image is fully contained and centers
///   it on both axes.
/// * `Fill` and `Stretch` cover `target` exactly. The aspect ratio is not
///   preserved and nothing is cropped, so the two modes are identical.
///
/// A degenerate ratio (zero, negative or not finite) yields an empty
/// rectangle at the center of `target`.
pub fn place_image(target: &Rect, aspect_ratio: f32, fit: ImageFit) -> Rect {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Rect::new(target.center_x(), target.center_y(), 0.0, 0.0);
    }

    match fit {
        ImageFit::Fit => {
            let scaled_width = target.width.min(target.height * aspect_ratio);
            let scaled_height = scaled_width / aspect_ratio;
            Rect::new(
                target.x + (target.width - scaled_width) / 2.0,
                target.y + (target.height - scaled_height) / 2.0,
                scaled_width,
                scaled_height,
            )
        }
        ImageFit::Fill | ImageFit::Stretch => *target,
    }
}

/// Place `image` into `target`
pub fn place_asset(target: &Rect, image: &ImageAsset, fit: ImageFit) -> Placement {
    Placement {
        image: *image,
        rect: place_image(target, image.aspect_ratio().unwrap_or(0.0), fit),
    }
}
