//! Resize handles for the selected item.
//!
//! Eight handles sit on the corners and edge midpoints of the selection.
//! Each one moves a fixed subset of edges; the edges it does not move stay
//! where they are, so the opposite corner (or edge) is the anchor.
//!
//! Hit-testing happens in screen space so the touch target keeps the same
//! physical size at every zoom level.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::snapping::{snap, snap_size};
use crate::viewport::Viewport;

/// Compass direction of a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl ResizeHandle {
    /// All handles, corners first. Hit-testing prefers earlier entries on
    /// ties.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::NorthWest,
        ResizeHandle::NorthEast,
        ResizeHandle::SouthEast,
        ResizeHandle::SouthWest,
        ResizeHandle::North,
        ResizeHandle::East,
        ResizeHandle::South,
        ResizeHandle::West,
    ];

    pub fn moves_left(&self) -> bool {
        matches!(self, Self::NorthWest | Self::West | Self::SouthWest)
    }

    pub fn moves_right(&self) -> bool {
        matches!(self, Self::NorthEast | Self::East | Self::SouthEast)
    }

    pub fn moves_top(&self) -> bool {
        matches!(self, Self::NorthWest | Self::North | Self::NorthEast)
    }

    pub fn moves_bottom(&self) -> bool {
        matches!(self, Self::SouthWest | Self::South | Self::SouthEast)
    }

    /// Whether dragging this handle also moves the item's position.
    pub fn moves_origin(&self) -> bool {
        self.moves_left() || self.moves_top()
    }

    /// Where the handle sits on `rect`, in the rect's own space.
    pub fn position_on(&self, rect: &Rect) -> Point {
        let x = if self.moves_left() {
            rect.x
        } else if self.moves_right() {
            rect.right()
        } else {
            rect.x + rect.width / 2.0
        };
        let y = if self.moves_top() {
            rect.y
        } else if self.moves_bottom() {
            rect.bottom()
        } else {
            rect.y + rect.height / 2.0
        };
        Point::new(x, y)
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NorthWest => "NW",
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
        };
        f.write_str(s)
    }
}

/// Finds the handle of `rect` (content space) nearest to `screen_point`,
/// if one lies within `radius` screen pixels.
///
/// The radius shrinks to a quarter of the rect's shorter on-screen side, so
/// the middle of a small or zoomed-out item is always a body hit.
pub fn hit_test(
    rect: &Rect,
    viewport: &Viewport,
    screen_point: Point,
    radius: f64,
) -> Option<ResizeHandle> {
    let screen_rect = viewport.rect_to_screen(rect);
    let radius = radius.min(screen_rect.width.min(screen_rect.height) / 4.0);
    let mut best: Option<(ResizeHandle, f64)> = None;
    for handle in ResizeHandle::ALL {
        let distance = handle.position_on(&screen_rect).distance_to(&screen_point);
        if distance > radius {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((handle, distance));
        }
    }
    best.map(|(handle, _)| handle)
}

/// Continuous resize used for drag feedback.
///
/// Moves the edges selected by `handle` by `delta` (content space). When an
/// edge would come closer than `min_edge` to its opposite, it stops there;
/// the opposite edge never moves.
pub fn resize_rect(rect: &Rect, handle: ResizeHandle, delta: Point, min_edge: f64) -> Rect {
    let (left, top, right, bottom) = moved_edges(rect, handle, delta);
    floor_edges(rect, handle, left, top, right, bottom, min_edge)
}

/// Resize applied when the drag ends.
///
/// The delta is snapped to the grid before it moves any edge, so a moving
/// top or left edge shifts the position by a whole number of cells. The
/// one-cell floor is enforced against the fixed edge, and only then are
/// position and size normalized onto the grid together.
pub fn commit_resize(rect: &Rect, handle: ResizeHandle, delta: Point, cell: f64) -> Rect {
    let snapped = Point::new(snap(delta.x, cell), snap(delta.y, cell));
    let (left, top, right, bottom) = moved_edges(rect, handle, snapped);
    let floored = floor_edges(rect, handle, left, top, right, bottom, cell);
    Rect::new(
        snap(floored.x, cell),
        snap(floored.y, cell),
        snap_size(floored.width, cell),
        snap_size(floored.height, cell),
    )
}

fn moved_edges(rect: &Rect, handle: ResizeHandle, delta: Point) -> (f64, f64, f64, f64) {
    let mut left = rect.x;
    let mut top = rect.y;
    let mut right = rect.right();
    let mut bottom = rect.bottom();
    if handle.moves_left() {
        left += delta.x;
    }
    if handle.moves_right() {
        right += delta.x;
    }
    if handle.moves_top() {
        top += delta.y;
    }
    if handle.moves_bottom() {
        bottom += delta.y;
    }
    (left, top, right, bottom)
}

fn floor_edges(
    rect: &Rect,
    handle: ResizeHandle,
    mut left: f64,
    mut top: f64,
    mut right: f64,
    mut bottom: f64,
    min_edge: f64,
) -> Rect {
    // A rect that was already thinner than the floor grows away from its
    // anchor edge.
    if handle.moves_left() {
        left = left.min(rect.right() - min_edge);
    } else if right - left < min_edge {
        right = left + min_edge;
    }
    if handle.moves_top() {
        top = top.min(rect.bottom() - min_edge);
    } else if bottom - top < min_edge {
        bottom = top + min_edge;
    }
    Rect::from_edges(left, top, right, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: f64 = 40.0;

    fn rect() -> Rect {
        Rect::new(80.0, 80.0, 80.0, 80.0)
    }

    #[test]
    fn test_handle_edges() {
        assert!(ResizeHandle::NorthWest.moves_origin());
        assert!(ResizeHandle::NorthEast.moves_origin());
        assert!(ResizeHandle::SouthWest.moves_origin());
        assert!(!ResizeHandle::SouthEast.moves_origin());
        assert!(!ResizeHandle::East.moves_origin());
        assert_eq!(
            ResizeHandle::South.position_on(&rect()),
            Point::new(120.0, 160.0)
        );
    }

    #[test]
    fn test_hit_test_in_screen_space() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_scale(2.0);
        // SE corner of rect() is at content (160,160) -> screen (320,320).
        assert_eq!(
            hit_test(&rect(), &vp, Point::new(330.0, 310.0), 24.0),
            Some(ResizeHandle::SouthEast)
        );
        assert_eq!(hit_test(&rect(), &vp, Point::new(240.0, 240.0), 24.0), None);
    }

    #[test]
    fn test_hit_radius_limited_by_screen_size() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_scale(0.5);
        let seat = Rect::new(40.0, 40.0, 40.0, 40.0);
        // 20x20 px on screen: radius drops to 5 px.
        assert_eq!(hit_test(&seat, &vp, Point::new(30.0, 30.0), 16.0), None);
        assert_eq!(hit_test(&seat, &vp, Point::new(30.0, 26.0), 16.0), None);
        assert_eq!(
            hit_test(&seat, &vp, Point::new(21.0, 21.0), 16.0),
            Some(ResizeHandle::NorthWest)
        );
    }

    #[test]
    fn test_continuous_resize_floor_anchored() {
        let r = resize_rect(&rect(), ResizeHandle::NorthWest, Point::new(500.0, 500.0), CELL);
        assert_eq!(r.bottom_right(), rect().bottom_right());
        assert_eq!(r.width, CELL);
        assert_eq!(r.height, CELL);

        let r = resize_rect(&rect(), ResizeHandle::East, Point::new(-500.0, 0.0), CELL);
        assert_eq!(r.x, 80.0);
        assert_eq!(r.width, CELL);
    }

    #[test]
    fn test_commit_se_keeps_origin() {
        let r = commit_resize(&rect(), ResizeHandle::SouthEast, Point::new(55.0, -17.0), CELL);
        assert_eq!(r.pos(), rect().pos());
        assert_eq!(r.width, 120.0);
        assert_eq!(r.height, 80.0);
    }

    #[test]
    fn test_commit_nw_keeps_bottom_right() {
        let r = commit_resize(&rect(), ResizeHandle::NorthWest, Point::new(-45.0, 30.0), CELL);
        assert_eq!(r.bottom_right(), rect().bottom_right());
        assert_eq!(r.pos(), Point::new(40.0, 120.0));
    }

    #[test]
    fn test_commit_far_edge_floor() {
        let r = commit_resize(&rect(), ResizeHandle::North, Point::new(0.0, 1000.0), CELL);
        assert_eq!(r.height, CELL);
        assert_eq!(r.bottom(), 160.0);
        assert_eq!(r.x, 80.0);
        assert_eq!(r.width, 80.0);
    }
}
