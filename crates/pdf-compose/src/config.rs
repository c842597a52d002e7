use crate::constants::mm_to_pt;
use crate::types::*;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout settings as entered by a user: every field optional and unparsed.
///
/// This is what forms, command lines and settings files produce. Turn it into
/// a [`LayoutConfig`] with [`RawLayoutSettings::resolve`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawLayoutSettings {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_or_number"))]
    pub page_size: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_or_number"))]
    pub orientation: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_or_number"))]
    pub margin_mm: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_or_number"))]
    pub border_style: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_or_number"))]
    pub border_color: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_or_number"))]
    pub border_width_pt: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_or_number"))]
    pub image_fit: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_or_number"))]
    pub spread_mode: Option<String>,
}

/// Validated layout configuration. Read-only for a whole conversion run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutConfig {
    pub page_size: PageSizePreset,
    pub orientation: Orientation,
    pub margin_mm: f32,
    pub border_style: BorderStyle,
    pub border_color: Rgb,
    pub border_width_pt: f32,
    pub image_fit: ImageFit,
    pub spread_mode: SpreadMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSizePreset::A4,
            orientation: Orientation::Portrait,
            margin_mm: 0.0,
            border_style: BorderStyle::None,
            border_color: Rgb::BLACK,
            border_width_pt: 0.0,
            image_fit: ImageFit::Fit,
            spread_mode: SpreadMode::Single,
        }
    }
}

impl LayoutConfig {
    /// Margin converted to points
    pub fn margin_pt(&self) -> f32 {
        mm_to_pt(self.margin_mm)
    }

    /// Whether pages get a border at all
    pub fn has_border(&self) -> bool {
        self.border_style != BorderStyle::None && self.border_width_pt > 0.0
    }

    /// The settings that resolve back to this configuration
    pub fn to_raw(&self) -> RawLayoutSettings {
        RawLayoutSettings {
            page_size: Some(self.page_size.to_string()),
            orientation: Some(self.orientation.to_string()),
            margin_mm: Some(self.margin_mm.to_string()),
            border_style: Some(self.border_style.to_string()),
            border_color: Some(self.border_color.to_hex()),
            border_width_pt: Some(self.border_width_pt.to_string()),
            image_fit: Some(self.image_fit.to_string()),
            spread_mode: Some(self.spread_mode.to_string()),
        }
    }
}

impl RawLayoutSettings {
    /// Validate and normalize into a [`LayoutConfig`].
    ///
    /// Unset or blank fields take the [`LayoutConfig::default`] value. Either
    /// every field is applied or an error is returned.
    pub fn resolve(&self) -> std::result::Result<LayoutConfig, ConfigError> {
        let defaults = LayoutConfig::default();

        Ok(LayoutConfig {
            page_size: parse_or(&self.page_size, defaults.page_size)?,
            orientation: parse_or(&self.orientation, defaults.orientation)?,
            margin_mm: parse_length(&self.margin_mm, "margin", defaults.margin_mm)?,
            border_style: parse_or(&self.border_style, defaults.border_style)?,
            border_color: parse_or(&self.border_color, defaults.border_color)?,
            border_width_pt: parse_length(
                &self.border_width_pt,
                "border width",
                defaults.border_width_pt,
            )?,
            image_fit: parse_or(&self.image_fit, defaults.image_fit)?,
            spread_mode: parse_or(&self.spread_mode, defaults.spread_mode)?,
        })
    }

    /// Fields set in `other` replace the ones in `self`
    pub fn overlay(mut self, other: RawLayoutSettings) -> Self {
        fn take(slot: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *slot = value;
            }
        }

        take(&mut self.page_size, other.page_size);
        take(&mut self.orientation, other.orientation);
        take(&mut self.margin_mm, other.margin_mm);
        take(&mut self.border_style, other.border_style);
        take(&mut self.border_color, other.border_color);
        take(&mut self.border_width_pt, other.border_width_pt);
        take(&mut self.image_fit, other.image_fit);
        take(&mut self.spread_mode, other.spread_mode);
        self
    }

    /// Load settings from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> std::result::Result<Self, ConfigError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ConfigError::Load(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Save(e.to_string()))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// Settings files may hold `"margin_mm": 10` as well as `"margin_mm": "10"`
#[cfg(feature = "serde")]
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Value>::deserialize(deserializer)?.map(|value| match value {
        Value::Text(text) => text,
        Value::Number(number) => number.to_string(),
    }))
}

/// A value counts as set when it has non-whitespace content
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_or<T>(value: &Option<String>, default: T) -> std::result::Result<T, ConfigError>
where
    T: FromStr<Err = ConfigError>,
{
    match non_blank(value) {
        Some(s) => s.parse(),
        None => Ok(default),
    }
}

fn parse_length(
    value: &Option<String>,
    field: &'static str,
    default: f32,
) -> std::result::Result<f32, ConfigError> {
    let Some(s) = non_blank(value) else {
        return Ok(default);
    };

    let parsed: f32 = s.parse().map_err(|_| ConfigError::InvalidNumber {
        field,
        value: s.to_string(),
    })?;

    if !parsed.is_finite() {
        return Err(ConfigError::InvalidNumber {
            field,
            value: s.to_string(),
        });
    }
    if parsed < 0.0 {
        return Err(ConfigError::Negative {
            field,
            value: parsed,
        });
    }

    Ok(parsed)
}
