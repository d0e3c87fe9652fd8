//! Grid quantization.
//!
//! Snapping happens once, when a move or resize is committed. Continuous
//! drag feedback uses the raw values.

use crate::geometry::{Point, Size};

/// Rounds `value` to the nearest multiple of `cell`.
///
/// A non-positive or non-finite `cell` leaves the value unchanged.
pub fn snap(value: f64, cell: f64) -> f64 {
    if !(cell.is_finite() && cell > 0.0) {
        return value;
    }
    (value / cell).round() * cell
}

/// Snaps a length and raises it to at least one cell.
pub fn snap_size(value: f64, cell: f64) -> f64 {
    snap(value, cell).max(cell)
}

/// Snaps both axes of a position.
pub fn snap_point(p: Point, cell: f64) -> Point {
    Point::new(snap(p.x, cell), snap(p.y, cell))
}

/// Snaps both axes of a size, enforcing the one-cell floor.
pub fn snap_dimensions(size: Size, cell: f64) -> Size {
    Size::new(snap_size(size.width, cell), snap_size(size.height, cell))
}
