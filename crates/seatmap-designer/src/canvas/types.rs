//! Canvas type definitions: LayoutConfig, EditorMode, HitTarget.

use serde::{Deserialize, Serialize};

use seatmap_core::constants::{
    COPY_OFFSET_CELLS, FALLBACK_POSITION_X, FALLBACK_POSITION_Y, GRID_CELL_SIZE,
    HANDLE_TOUCH_RADIUS, MAX_SCALE, MIN_SCALE,
};

use crate::geometry::Point;
use crate::handles::ResizeHandle;
use crate::model::ItemId;

/// Runtime parameters of the layout canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Grid cell edge in content units.
    pub cell_size: f64,
    /// Where items with an unusable stored position are placed.
    pub fallback_position: Point,
    /// Keep committed positions at or right/below the content origin.
    pub clamp_to_origin: bool,
    /// Offset of a copied item, in cells on both axes.
    pub copy_offset_cells: f64,
    /// Resize handle touch radius in screen pixels.
    pub handle_touch_radius: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl LayoutConfig {
    /// Configuration of the seat-info variant, where items may sit left of
    /// or above the origin.
    pub fn unclamped() -> Self {
        Self {
            clamp_to_origin: false,
            ..Self::default()
        }
    }

    /// Content-space offset applied to copies.
    pub fn copy_offset(&self) -> Point {
        let d = self.copy_offset_cells * self.cell_size;
        Point::new(d, d)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_size: GRID_CELL_SIZE,
            fallback_position: Point::new(FALLBACK_POSITION_X, FALLBACK_POSITION_Y),
            clamp_to_origin: true,
            copy_offset_cells: COPY_OFFSET_CELLS,
            handle_touch_radius: HANDLE_TOUCH_RADIUS,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }
}

/// Whether the canvas is being edited or only browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    /// Admin layout editing: select, move, resize, label.
    #[default]
    Edit,
    /// Read-only seat map: taps pick seats, drags pan.
    View,
}

impl EditorMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit)
    }
}

/// What lies under a screen point.
#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    /// A resize handle of the selected item.
    Handle(ItemId, ResizeHandle),
    /// The body of an item.
    Item(ItemId),
    Background,
}
