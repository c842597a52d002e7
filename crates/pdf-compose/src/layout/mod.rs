//! Layout calculation modules for page composition
//!
//! This module handles all the geometric calculations:
//! - Page size (presets, auto size, orientation)
//! - Content placement (margins, fit modes, centering)
//! - Border and shadow geometry
//! - Grouping images into single pages or two-image spreads

mod border;
mod geometry;
mod page;
mod placement;
mod spread;
mod types;

pub use border::*;
pub use geometry::*;
pub use page::*;
pub use placement::*;
pub use spread::*;
pub use types::*;
