use seatmap_designer::{Point, Rect, Viewport};

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1080.0, 1920.0);
    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.translate(), Point::ZERO);
    assert_eq!(vp.to_screen(Point::new(12.0, 34.0)), Point::new(12.0, 34.0));
}

#[test]
fn test_content_to_screen_with_scale_and_translate() {
    let mut vp = Viewport::new(1080.0, 1920.0);
    vp.set_scale(1.5);
    vp.set_translate(Point::new(-60.0, 30.0));
    // 40 * 1.5 - 60 = 0, 80 * 1.5 + 30 = 150
    assert_eq!(vp.to_screen(Point::new(40.0, 80.0)), Point::new(0.0, 150.0));
    let back = vp.to_content(Point::new(0.0, 150.0));
    assert!((back.x - 40.0).abs() < 1e-9);
    assert!((back.y - 80.0).abs() < 1e-9);
}

#[test]
fn test_rect_to_screen_scales_size() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_scale(2.0);
    vp.pan_by(Point::new(10.0, 10.0));
    let r = vp.rect_to_screen(&Rect::new(40.0, 40.0, 40.0, 80.0));
    assert_eq!(r, Rect::new(90.0, 90.0, 80.0, 160.0));
}

#[test]
fn test_custom_scale_limits() {
    let mut vp = Viewport::new(800.0, 600.0).with_scale_limits(1.0, 2.0);
    vp.set_scale(0.1);
    assert_eq!(vp.scale(), 1.0);
    vp.set_scale(9.0);
    assert_eq!(vp.scale(), 2.0);

    // Inverted limits are ignored.
    let vp = Viewport::new(800.0, 600.0).with_scale_limits(3.0, 1.0);
    assert_eq!(vp.min_scale(), 0.5);
}

#[test]
fn test_successive_pinch_frames_keep_content_under_fingers() {
    let mut vp = Viewport::new(800.0, 600.0);
    let centroid = Point::new(250.0, 410.0);
    let anchor = vp.to_content(centroid);
    for zoom in [1.1, 1.1, 0.95, 1.3] {
        vp.apply_transform_gesture(centroid, Point::ZERO, zoom);
    }
    let p = vp.to_screen(anchor);
    assert!((p.x - centroid.x).abs() < 1e-6);
    assert!((p.y - centroid.y).abs() < 1e-6);
}

#[test]
fn test_fit_to_view_tall_layout() {
    let mut vp = Viewport::new(1080.0, 1920.0);
    vp.fit_to_view(&Rect::new(0.0, 0.0, 400.0, 1600.0));
    // Height limited: 1920 * 0.9 / 1600 = 1.08
    assert!((vp.scale() - 1.08).abs() < 1e-9);
}
