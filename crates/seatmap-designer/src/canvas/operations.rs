//! Canvas operations: hit-testing, item insertion and removal, committed
//! moves and resizes, fitting.

use seatmap_core::LayoutError;

use super::{HitTarget, LayoutCanvas};
use crate::geometry::{Point, Rect};
use crate::handles::{self, ResizeHandle};
use crate::model::{ItemId, LayoutItem};
use crate::snapping::snap_point;

impl LayoutCanvas {
    /// Resolves what lies under a screen point.
    ///
    /// In edit mode the handles of the selected, unlocked item are tested
    /// first, then item bodies from the top of the draw order down. In view
    /// mode only seats are hit.
    pub fn hit_test(&self, screen: Point) -> HitTarget {
        if self.mode().is_edit() {
            if let Some(item) = self.selected_item().filter(|item| !item.locked) {
                if let Some(handle) = handles::hit_test(
                    &item.rect(),
                    self.viewport(),
                    screen,
                    self.config().handle_touch_radius,
                ) {
                    return HitTarget::Handle(item.id().clone(), handle);
                }
            }
        }

        let content = self.screen_to_content(screen);
        match self
            .item_store
            .topmost_at(content, |item| self.is_interactive(item))
        {
            Some(item) => HitTarget::Item(item.id().clone()),
            None => HitTarget::Background,
        }
    }

    /// Inserts an item on top of the draw order.
    pub fn add_item(&mut self, item: LayoutItem) -> Result<(), LayoutError> {
        self.item_store.insert(item)
    }

    /// Removes an item, clearing the selection if it pointed at it.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<LayoutItem> {
        let removed = self.item_store.remove(id);
        self.selection_manager.retain_valid(&self.item_store);
        removed
    }

    /// Replaces all items. Selection is cleared.
    pub fn replace_items(&mut self, items: Vec<LayoutItem>) -> Result<(), LayoutError> {
        self.item_store.clear();
        self.selection_manager.clear();
        for item in items {
            self.item_store.insert(item)?;
        }
        Ok(())
    }

    /// Applies a finished drag: `pos + delta`, snapped, then clamped to the
    /// origin when configured.
    pub fn commit_move(&mut self, id: &ItemId, delta: Point) -> Result<Point, LayoutError> {
        let cell = self.cell_size();
        let clamp = self.config().clamp_to_origin;
        let item = self.item_store.require_mut(id)?;
        if item.locked {
            return Err(LayoutError::ItemLocked { id: id.to_string() });
        }
        item.move_to(snap_point(item.pos + delta, cell), clamp);
        Ok(item.pos)
    }

    /// Applies a finished handle drag with grid snapping.
    pub fn commit_resize(
        &mut self,
        id: &ItemId,
        handle: ResizeHandle,
        delta: Point,
    ) -> Result<Rect, LayoutError> {
        let cell = self.cell_size();
        let clamp = self.config().clamp_to_origin;
        let item = self.item_store.require_mut(id)?;
        if item.locked {
            return Err(LayoutError::ItemLocked { id: id.to_string() });
        }
        let mut rect = handles::commit_resize(&item.rect(), handle, delta, cell);
        if clamp && (rect.x < 0.0 || rect.y < 0.0) {
            // Cut the overhang instead of shifting, so the anchor edge stays.
            let left = rect.x.max(0.0);
            let top = rect.y.max(0.0);
            rect = Rect::from_edges(
                left,
                top,
                rect.right().max(left + cell),
                rect.bottom().max(top + cell),
            );
        }
        item.set_rect(rect);
        Ok(rect)
    }

    /// Frames every item in the viewport. Does nothing on an empty canvas.
    pub fn fit_all_items(&mut self) {
        if let Some(bounds) = self.item_store.bounds() {
            self.viewport_mut().fit_to_view(&bounds);
        }
    }
}
