//! Border and drop shadow geometry

use crate::config::LayoutConfig;
use crate::constants::{DASH_PATTERN, SHADOW_GRAY, SHADOW_OFFSET};
use crate::types::{BorderStyle, Rgb};

use super::{BorderShadow, BorderSpec, BorderStroke, Rect};

/// Border for a content rectangle, or `None` when nothing is drawn.
///
/// No border is drawn for [`BorderStyle::None`] or a width of zero or less.
pub fn border_spec(
    content: &Rect,
    style: BorderStyle,
    color: Rgb,
    width_pt: f32,
) -> Option<BorderSpec> {
    if width_pt <= 0.0 {
        return None;
    }

    let stroke = |dash| BorderStroke {
        rect: *content,
        width_pt,
        color,
        dash,
    };

    match style {
        BorderStyle::None => None,
        BorderStyle::Solid => Some(BorderSpec {
            shadow: None,
            stroke: stroke(None),
        }),
        BorderStyle::Dashed => Some(BorderSpec {
            shadow: None,
            stroke: stroke(Some(DASH_PATTERN)),
        }),
        BorderStyle::Shadow => Some(BorderSpec {
            shadow: Some(BorderShadow {
                rect: content.offset(SHADOW_OFFSET.0, SHADOW_OFFSET.1),
                gray: SHADOW_GRAY,
            }),
            stroke: stroke(None),
        }),
    }
}

/// Border for a content rectangle using the configured style
pub fn page_border(content: &Rect, config: &LayoutConfig) -> Option<BorderSpec> {
    border_spec(
        content,
        config.border_style,
        config.border_color,
        config.border_width_pt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> Rect {
        Rect::new(20.0, 20.0, 200.0, 300.0)
    }

    #[test]
    fn test_no_border() {
        let red = Rgb::new(255, 0, 0);
        assert!(border_spec(&content(), BorderStyle::None, red, 2.0).is_none());
        assert!(border_spec(&content(), BorderStyle::Solid, red, 0.0).is_none());
        assert!(border_spec(&content(), BorderStyle::Dashed, red, -1.0).is_none());
        assert!(border_spec(&content(), BorderStyle::Shadow, red, 0.0).is_none());
    }

    #[test]
    fn test_solid_border() {
        let color = Rgb::new(10, 20, 30);
        let spec = border_spec(&content(), BorderStyle::Solid, color, 1.5).unwrap();

        assert!(spec.shadow.is_none());
        assert_eq!(spec.stroke.rect, content());
        assert_eq!(spec.stroke.width_pt, 1.5);
        assert_eq!(spec.stroke.color, color);
        assert_eq!(spec.stroke.dash, None);
    }

    #[test]
    fn test_dashed_border() {
        let spec = border_spec(&content(), BorderStyle::Dashed, Rgb::BLACK, 1.0).unwrap();
        assert_eq!(spec.stroke.dash, Some([3.0, 3.0]));
        assert_eq!(spec.stroke.rect, content());
    }

    #[test]
    fn test_shadow_border() {
        let spec = border_spec(&content(), BorderStyle::Shadow, Rgb::BLACK, 1.0).unwrap();
        let shadow = spec.shadow.unwrap();

        assert_eq!(shadow.rect, Rect::new(23.0, 17.0, 200.0, 300.0));
        assert_eq!(shadow.gray, 0.8);
        assert_eq!(spec.stroke.rect, content());
        assert_eq!(spec.stroke.dash, None);
    }
}
