//! Shared constants for page composition
//!
//! This module centralizes magic numbers and constants used throughout
//! the layout and rendering process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter, as used for margins (72 / 25.4 rounded)
pub const POINTS_PER_MM: f32 = 2.83465;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Page Presets (points, portrait)
// =============================================================================

/// ISO A4: 210mm × 297mm
pub const A4_PT: (f32, f32) = (595.28, 841.89);

/// US Letter: 8.5" × 11"
pub const LETTER_PT: (f32, f32) = (612.0, 792.0);

/// US Legal: 8.5" × 14"
pub const LEGAL_PT: (f32, f32) = (612.0, 1008.0);

// =============================================================================
// Borders
// =============================================================================

/// Dash pattern for dashed borders: 3pt dash, 3pt gap
pub const DASH_PATTERN: [f32; 2] = [3.0, 3.0];

/// Offset of the drop shadow from the content rectangle (x right, y down)
pub const SHADOW_OFFSET: (f32, f32) = (3.0, -3.0);

/// Gray level of the drop shadow fill
pub const SHADOW_GRAY: f32 = 0.8;

// =============================================================================
// Output
// =============================================================================

/// Prefix of the generated name when no output filename is given
pub const DEFAULT_FILENAME_PREFIX: &str = "converted_images_";

/// Extension appended to output filenames
pub const PDF_EXTENSION: &str = ".pdf";
