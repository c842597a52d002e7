use crate::constants::{A4_PT, LEGAL_PT, LETTER_PT};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Invalid layout settings. Raised before any page is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {field}: {value:?} is not a number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Invalid {field}: {value} must not be negative")]
    Negative { field: &'static str, value: f32 },
    #[error("Unknown {field}: {value:?}")]
    UnknownValue { field: &'static str, value: String },
    #[error("Invalid border color: {0:?}")]
    InvalidColor(String),
    #[error("Failed to load settings: {0}")]
    Load(String),
    #[error("Failed to save settings: {0}")]
    Save(String),
}

/// An input that could not be turned into an image. The image is skipped.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Empty image data")]
    Empty,
    #[error("Unsupported image format (declared as {declared:?})")]
    UnsupportedFormat { declared: String },
    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to embed image: {0}")]
    Embed(String),
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to assemble document: {0}")]
    Assembly(String),
    #[error("No images to convert ({skipped} skipped)")]
    NoImages { skipped: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl From<lopdf::Error> for ConvertError {
    fn from(err: lopdf::Error) -> Self {
        ConvertError::Assembly(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Page size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSizePreset {
    #[default]
    A4,
    Letter,
    Legal,
    /// Page takes the pixel size of the page's first image (1px = 1pt)
    Auto,
}

impl PageSizePreset {
    /// Base dimensions in points (portrait). `None` for `Auto`.
    pub fn dimensions_pt(self) -> Option<(f32, f32)> {
        match self {
            PageSizePreset::A4 => Some(A4_PT),
            PageSizePreset::Letter => Some(LETTER_PT),
            PageSizePreset::Legal => Some(LEGAL_PT),
            PageSizePreset::Auto => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSizePreset::A4 => "a4",
            PageSizePreset::Letter => "letter",
            PageSizePreset::Legal => "legal",
            PageSizePreset::Auto => "auto",
        }
    }
}

impl FromStr for PageSizePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSizePreset::A4),
            "letter" => Ok(PageSizePreset::Letter),
            "legal" => Ok(PageSizePreset::Legal),
            "auto" => Ok(PageSizePreset::Auto),
            _ => Err(ConfigError::UnknownValue {
                field: "page size",
                value: s.to_string(),
            }),
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height >= width
    #[default]
    Portrait,
    /// Landscape: width >= height
    Landscape,
    /// Keep the base dimensions as they are
    Auto,
}

impl Orientation {
    /// Apply the orientation to base `(width, height)` dimensions
    pub fn apply(self, (w, h): (f32, f32)) -> (f32, f32) {
        match self {
            Orientation::Landscape => (w.max(h), w.min(h)),
            Orientation::Portrait => (w.min(h), w.max(h)),
            Orientation::Auto => (w, h),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
            Orientation::Auto => "auto",
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            "auto" => Ok(Orientation::Auto),
            _ => Err(ConfigError::UnknownValue {
                field: "orientation",
                value: s.to_string(),
            }),
        }
    }
}

/// Border drawn around the content rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    /// Solid border over a gray drop shadow
    Shadow,
}

impl BorderStyle {
    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Shadow => "shadow",
        }
    }
}

impl FromStr for BorderStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(BorderStyle::None),
            "solid" => Ok(BorderStyle::Solid),
            "dashed" => Ok(BorderStyle::Dashed),
            "shadow" => Ok(BorderStyle::Shadow),
            _ => Err(ConfigError::UnknownValue {
                field: "border style",
                value: s.to_string(),
            }),
        }
    }
}

/// How an image is fitted into its target rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageFit {
    /// Scale uniformly until contained, then center
    #[default]
    Fit,
    /// Cover the target. No cropping: same geometry as `Stretch`
    Fill,
    /// Cover the target, ignoring aspect ratio
    Stretch,
}

impl ImageFit {
    pub fn name(self) -> &'static str {
        match self {
            ImageFit::Fit => "fit",
            ImageFit::Fill => "fill",
            ImageFit::Stretch => "stretch",
        }
    }
}

impl FromStr for ImageFit {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fit" => Ok(ImageFit::Fit),
            "fill" => Ok(ImageFit::Fill),
            "stretch" => Ok(ImageFit::Stretch),
            _ => Err(ConfigError::UnknownValue {
                field: "image fit",
                value: s.to_string(),
            }),
        }
    }
}

/// One or two images per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpreadMode {
    #[default]
    Single,
    /// Two images side by side
    Double,
}

impl SpreadMode {
    pub fn images_per_page(self) -> usize {
        match self {
            SpreadMode::Single => 1,
            SpreadMode::Double => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpreadMode::Single => "single",
            SpreadMode::Double => "double",
        }
    }
}

impl FromStr for SpreadMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(SpreadMode::Single),
            "double" => Ok(SpreadMode::Double),
            _ => Err(ConfigError::UnknownValue {
                field: "spread mode",
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

display_by_name!(PageSizePreset, Orientation, BorderStyle, ImageFit, SpreadMode);

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to 0.0..=1.0, as PDF color operators expect
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `r,g,b`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let trimmed = s.trim();

        if trimmed.contains(',') {
            let parts = trimmed
                .split(',')
                .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
                .collect::<std::result::Result<Vec<u8>, _>>()?;
            return match parts.as_slice() {
                [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
                _ => Err(invalid()),
            };
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Rgb::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Rgb::new(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Image encodings the converter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageFormat::Jpeg),
            "image/png" | "image/x-png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "jpe" | "jfif" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

/// Statistics about a planned conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionStatistics {
    /// Number of images going into the document
    pub images: usize,
    /// Number of output pages
    pub pages: usize,
    /// Pages holding two images side by side
    pub spreads: usize,
    /// Whether the last page of a double spread holds a single image
    pub trailing_single: bool,
}

/// One input image: raw bytes plus the MIME type the caller declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub bytes: Vec<u8>,
    /// Declared MIME type. The byte signature wins when they disagree
    pub mime: String,
    /// Display name, usually the file name
    pub name: Option<String>,
}

impl ImageInput {
    pub fn new(bytes: impl Into<Vec<u8>>, mime: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime: mime.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for log and report lines
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// An input left out of the document because it could not be decoded
#[derive(Debug)]
pub struct SkippedImage {
    /// Position in the input list
    pub index: usize,
    pub name: Option<String>,
    pub mime: String,
    pub reason: DecodeError,
}

/// Result of a conversion run, ready to be saved
#[derive(Debug)]
pub struct ConversionOutput {
    /// The serialized PDF
    pub pdf: Vec<u8>,
    /// Resolved output filename
    pub filename: String,
    pub page_count: usize,
    pub skipped: Vec<SkippedImage>,
}
