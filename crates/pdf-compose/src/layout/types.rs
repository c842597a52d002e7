//! Layout data types for page composition
//!
//! These types are the output of the layout engine and the input of the
//! PDF renderer. They carry geometry only, never pixel data.

use crate::types::{ImageFormat, Rgb};

/// Handle to a decoded image: the index of the input it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub usize);

/// An image as the layout engine sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageAsset {
    pub id: ImageId,
    /// Intrinsic width in pixels
    pub width_px: u32,
    /// Intrinsic height in pixels
    pub height_px: u32,
    pub format: ImageFormat,
}

impl ImageAsset {
    pub fn new(id: ImageId, width_px: u32, height_px: u32, format: ImageFormat) -> Self {
        Self {
            id,
            width_px,
            height_px,
            format,
        }
    }

    /// Width / height, or `None` for a degenerate image
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width_px == 0 || self.height_px == 0 {
            None
        } else {
            Some(self.width_px as f32 / self.height_px as f32)
        }
    }

    /// Pixel size read as points (1px = 1pt)
    pub fn size_pt(&self) -> (f32, f32) {
        (self.width_px as f32, self.height_px as f32)
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Shrink by `amount` on all four sides.
    ///
    /// An inset larger than half a dimension collapses that dimension to zero
    /// at the center, so the result always lies inside `self`.
    pub fn inset(&self, amount: f32) -> Rect {
        let dx = amount.min(self.width / 2.0);
        let dy = amount.min(self.height / 2.0);
        Rect::new(
            self.x + dx,
            self.y + dy,
            self.width - 2.0 * dx,
            self.height - 2.0 * dy,
        )
    }

    /// Move by `(dx, dy)` without resizing
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Split into equal left and right halves of full height
    pub fn split_halves(&self) -> (Rect, Rect) {
        let half = self.width / 2.0;
        (
            Rect::new(self.x, self.y, half, self.height),
            Rect::new(self.x + half, self.y, half, self.height),
        )
    }

    /// Whether `other` lies within `self`, allowing `tolerance` points of slack
    pub fn contains(&self, other: &Rect, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.top() <= self.top() + tolerance
    }
}

/// A stroked rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStroke {
    pub rect: Rect,
    pub width_pt: f32,
    pub color: Rgb,
    /// Dash on/off lengths; `None` for a solid line
    pub dash: Option<[f32; 2]>,
}

/// A filled, borderless rectangle drawn beneath the stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderShadow {
    pub rect: Rect,
    /// Gray level, 0.0 (black) to 1.0 (white)
    pub gray: f32,
}

/// Border geometry for one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSpec {
    /// Drawn first, when present
    pub shadow: Option<BorderShadow>,
    pub stroke: BorderStroke,
}

/// One image placed on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub image: ImageAsset,
    /// Destination rectangle the image is drawn into
    pub rect: Rect,
}

/// Everything needed to render one output page
#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    /// Full page, anchored at the origin
    pub page_rect: Rect,
    /// Page inset by the margin
    pub content_rect: Rect,
    /// Images in drawing order (left to right for spreads)
    pub placements: Vec<Placement>,
    pub border: Option<BorderSpec>,
}

/// The ordered pages of one conversion run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentLayout {
    pub pages: Vec<PageDescriptor>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Every placed image, in page order
    pub fn images(&self) -> impl Iterator<Item = &ImageAsset> {
        self.pages
            .iter()
            .flat_map(|page| page.placements.iter().map(|p| &p.image))
    }
}
