use pdf_compose::layout::*;
use pdf_compose::*;

const EPS: f32 = 0.01;

fn images(count: usize, width_px: u32, height_px: u32) -> Vec<ImageAsset> {
    (0..count)
        .map(|i| ImageAsset::new(ImageId(i), width_px, height_px, ImageFormat::Jpeg))
        .collect()
}

fn assert_inset(page: &PageDescriptor, margin_pt: f32) {
    let outer = page.page_rect;
    let inner = page.content_rect;
    assert!((inner.x - outer.x - margin_pt).abs() < EPS);
    assert!((inner.y - outer.y - margin_pt).abs() < EPS);
    assert!((outer.right() - inner.right() - margin_pt).abs() < EPS);
    assert!((outer.top() - inner.top() - margin_pt).abs() < EPS);
}

#[test]
fn test_three_images_a4_portrait_with_margin() {
    let config = LayoutConfig {
        page_size: PageSizePreset::A4,
        orientation: Orientation::Portrait,
        margin_mm: 10.0,
        border_style: BorderStyle::None,
        ..Default::default()
    };
    let layout = plan_document(&images(3, 1600, 1200), &config);

    assert_eq!(layout.page_count(), 3);
    for page in &layout.pages {
        assert_eq!(page.page_rect, Rect::new(0.0, 0.0, 595.28, 841.89));
        assert_inset(page, 28.3465);
        assert!((page.content_rect.width - (595.28 - 2.0 * 28.3465)).abs() < EPS);
        assert!((page.content_rect.height - (841.89 - 2.0 * 28.3465)).abs() < EPS);
        assert!(page.border.is_none());

        assert_eq!(page.placements.len(), 1);
        let rect = page.placements[0].rect;
        let content = page.content_rect;
        assert!(content.contains(&rect, EPS));
        assert!((rect.center_x() - content.center_x()).abs() < EPS);
        assert!((rect.center_y() - content.center_y()).abs() < EPS);
        // 4:3 landscape image on a portrait page is width-limited
        assert!((rect.width - content.width).abs() < EPS);
        assert!((rect.height - content.width * 0.75).abs() < EPS);
    }
}

#[test]
fn test_five_images_double_spread() {
    let config = LayoutConfig {
        spread_mode: SpreadMode::Double,
        ..Default::default()
    };
    let layout = plan_document(&images(5, 100, 100), &config);

    assert_eq!(layout.page_count(), 3);
    assert_eq!(layout.pages[0].placements.len(), 2);
    assert_eq!(layout.pages[1].placements.len(), 2);

    let last = &layout.pages[2];
    assert_eq!(last.placements.len(), 1);
    assert_eq!(last.placements[0].image.id, ImageId(4));

    // The lone image still gets the left half only
    let (left, _) = last.content_rect.split_halves();
    assert!(left.contains(&last.placements[0].rect, EPS));
    assert!(last.placements[0].rect.right() <= last.content_rect.center_x() + EPS);
}

#[test]
fn test_page_count_law() {
    for count in 0..20 {
        let assets = images(count, 300, 200);

        let single = LayoutConfig::default();
        assert_eq!(plan_document(&assets, &single).page_count(), count);

        let double = LayoutConfig {
            spread_mode: SpreadMode::Double,
            ..Default::default()
        };
        assert_eq!(
            plan_document(&assets, &double).page_count(),
            count.div_ceil(2)
        );
    }
}

#[test]
fn test_images_keep_input_order() {
    let config = LayoutConfig {
        spread_mode: SpreadMode::Double,
        ..Default::default()
    };
    let layout = plan_document(&images(7, 10, 20), &config);
    let ids: Vec<usize> = layout.images().map(|image| image.id.0).collect();
    assert_eq!(ids, (0..7).collect::<Vec<_>>());
}

#[test]
fn test_margin_invariant_across_configs() {
    let sizes = [
        PageSizePreset::A4,
        PageSizePreset::Letter,
        PageSizePreset::Legal,
        PageSizePreset::Auto,
    ];
    let orientations = [Orientation::Portrait, Orientation::Landscape, Orientation::Auto];

    for page_size in sizes {
        for orientation in orientations {
            for margin_mm in [0.0, 5.0, 25.4] {
                let config = LayoutConfig {
                    page_size,
                    orientation,
                    margin_mm,
                    ..Default::default()
                };
                let layout = plan_document(&images(2, 2000, 1000), &config);
                for page in &layout.pages {
                    assert_inset(page, margin_mm * 2.83465);
                    assert!(page.page_rect.contains(&page.content_rect, EPS));
                }
            }
        }
    }
}

#[test]
fn test_fill_and_stretch_equal_content() {
    for image_fit in [ImageFit::Fill, ImageFit::Stretch] {
        let config = LayoutConfig {
            image_fit,
            margin_mm: 3.0,
            ..Default::default()
        };
        let layout = plan_document(&images(2, 50, 400), &config);
        for page in &layout.pages {
            assert_eq!(page.placements[0].rect, page.content_rect);
        }
    }
}

#[test]
fn test_fit_slack_is_symmetric() {
    let config = LayoutConfig {
        margin_mm: 8.0,
        spread_mode: SpreadMode::Double,
        ..Default::default()
    };
    let assets = vec![
        ImageAsset::new(ImageId(0), 300, 1200, ImageFormat::Png),
        ImageAsset::new(ImageId(1), 1200, 300, ImageFormat::Png),
    ];
    let page = &plan_document(&assets, &config).pages[0];
    let (left, right) = page.content_rect.split_halves();

    for (half, placement) in [left, right].iter().zip(&page.placements) {
        let rect = placement.rect;
        let left_slack = rect.x - half.x;
        let right_slack = half.right() - rect.right();
        assert!((left_slack - right_slack).abs() < EPS);
        assert!(
            (left_slack - (half.width - rect.width) / 2.0).abs() < EPS,
            "slack should be half the unused width"
        );
        assert!(half.contains(&rect, EPS));
    }
}

#[test]
fn test_border_presence_law() {
    let styles = [
        BorderStyle::None,
        BorderStyle::Solid,
        BorderStyle::Dashed,
        BorderStyle::Shadow,
    ];
    for border_style in styles {
        for border_width_pt in [0.0, 0.5, 3.0] {
            let config = LayoutConfig {
                border_style,
                border_width_pt,
                ..Default::default()
            };
            let layout = plan_document(&images(1, 10, 10), &config);
            let expected = border_style != BorderStyle::None && border_width_pt > 0.0;
            assert_eq!(layout.pages[0].border.is_some(), expected);
        }
    }
}

#[test]
fn test_auto_page_size_per_page() {
    let config = LayoutConfig {
        page_size: PageSizePreset::Auto,
        orientation: Orientation::Auto,
        ..Default::default()
    };
    let assets = vec![
        ImageAsset::new(ImageId(0), 640, 480, ImageFormat::Jpeg),
        ImageAsset::new(ImageId(1), 480, 640, ImageFormat::Jpeg),
    ];
    let layout = plan_document(&assets, &config);

    assert_eq!(layout.pages[0].page_rect, Rect::from_size(640.0, 480.0));
    assert_eq!(layout.pages[1].page_rect, Rect::from_size(480.0, 640.0));
    // With no margin a matching image fills the page
    let rect = layout.pages[0].placements[0].rect;
    assert!((rect.width - 640.0).abs() < EPS);
    assert!((rect.height - 480.0).abs() < EPS);
}

#[test]
fn test_statistics() {
    let double = LayoutConfig {
        spread_mode: SpreadMode::Double,
        ..Default::default()
    };
    let stats = calculate_statistics(5, &double);
    assert_eq!(stats.images, 5);
    assert_eq!(stats.pages, 3);
    assert_eq!(stats.spreads, 2);
    assert!(stats.trailing_single);

    let stats = calculate_statistics(4, &LayoutConfig::default());
    assert_eq!(stats.pages, 4);
    assert_eq!(stats.spreads, 0);
    assert!(!stats.trailing_single);
}
