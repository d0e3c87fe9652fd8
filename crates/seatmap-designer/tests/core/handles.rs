use seatmap_designer::handles::{commit_resize, hit_test, resize_rect};
use seatmap_designer::{Point, Rect, ResizeHandle, Viewport};

const CELL: f64 = 40.0;

fn base() -> Rect {
    Rect::new(120.0, 120.0, 120.0, 80.0)
}

#[test]
fn test_every_handle_keeps_its_anchor() {
    let delta = Point::new(43.0, -37.0);
    for handle in ResizeHandle::ALL {
        let r = commit_resize(&base(), handle, delta, CELL);
        if !handle.moves_left() {
            assert_eq!(r.x, base().x, "{handle} moved left edge");
        }
        if !handle.moves_right() {
            assert_eq!(r.right(), base().right(), "{handle} moved right edge");
        }
        if !handle.moves_top() {
            assert_eq!(r.y, base().y, "{handle} moved top edge");
        }
        if !handle.moves_bottom() {
            assert_eq!(r.bottom(), base().bottom(), "{handle} moved bottom edge");
        }
    }
}

#[test]
fn test_south_west_moves_origin_horizontally() {
    let r = commit_resize(&base(), ResizeHandle::SouthWest, Point::new(-80.0, 40.0), CELL);
    assert_eq!(r, Rect::new(40.0, 120.0, 200.0, 120.0));
}

#[test]
fn test_huge_negative_delta_floors_each_handle() {
    for handle in ResizeHandle::ALL {
        let r = commit_resize(&base(), handle, Point::new(-1.0e6, -1.0e6), CELL);
        assert!(r.width >= CELL && r.height >= CELL, "{handle}: {r:?}");
        let r = commit_resize(&base(), handle, Point::new(1.0e6, 1.0e6), CELL);
        assert!(r.width >= CELL && r.height >= CELL, "{handle}: {r:?}");
    }
}

#[test]
fn test_preview_is_not_snapped() {
    let r = resize_rect(&base(), ResizeHandle::East, Point::new(13.0, 0.0), CELL);
    assert_eq!(r.width, 133.0);
}

#[test]
fn test_hit_radius_is_screen_pixels() {
    let mut vp = Viewport::new(800.0, 600.0);
    let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
    // At 0.5 scale the SE corner sits at screen (100, 100).
    vp.set_scale(0.5);
    assert_eq!(
        hit_test(&rect, &vp, Point::new(100.0, 110.0), 24.0),
        Some(ResizeHandle::SouthEast)
    );
    assert_eq!(hit_test(&rect, &vp, Point::new(160.0, 10.0), 24.0), None);
}

#[test]
fn test_zoomed_out_seat_centre_is_not_a_handle() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_scale(0.5);
    let seat = Rect::new(40.0, 40.0, 40.0, 40.0);
    for p in [Point::new(30.0, 30.0), Point::new(27.0, 33.0)] {
        assert_eq!(hit_test(&seat, &vp, p, 16.0), None, "{p}");
    }
}
