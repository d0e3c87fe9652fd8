//! Editor state manager for the seat layout screen.
//!
//! Owns the canvas, the gesture controller, the status overlay and the open
//! property draft, and keeps them consistent with each other. The host
//! drives it with gestures and toolbar actions and renders from
//! [`EditorState::rendered_items`] and [`EditorState::display_rect`].
//!
//! This module is split into submodules:
//! - `toolbar`: add, copy, delete
//! - `properties`: property panel draft and commit

mod properties;
mod toolbar;

pub use properties::PropertyDraft;

use tracing::info;

use seatmap_core::{LayoutError, SeatDto, SeatStatusUpdate, SeatUpdate};

use crate::canvas::{EditorMode, LayoutCanvas, LayoutConfig};
use crate::geometry::Rect;
use crate::interaction::{Gesture, GestureOutcome, InteractionController, InteractionState};
use crate::model::{ItemId, LayoutItem};
use crate::serialization::{items_from_dtos, to_seat_updates};
use crate::status_overlay::{RenderedItem, StatusOverlay};

/// Editor state for UI integration
#[derive(Debug, Clone)]
pub struct EditorState {
    pub canvas: LayoutCanvas,
    pub overlay: StatusOverlay,
    interaction: InteractionController,
    draft: Option<PropertyDraft>,
    modified: bool,
}

impl EditorState {
    pub fn new(config: LayoutConfig, mode: EditorMode) -> Self {
        Self::from_canvas(LayoutCanvas::new(config, mode))
    }

    pub fn with_canvas_size(
        config: LayoutConfig,
        mode: EditorMode,
        width: f64,
        height: f64,
    ) -> Self {
        Self::from_canvas(LayoutCanvas::with_size(config, mode, width, height))
    }

    fn from_canvas(canvas: LayoutCanvas) -> Self {
        Self {
            canvas,
            overlay: StatusOverlay::new(),
            interaction: InteractionController::new(),
            draft: None,
            modified: false,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.canvas.mode()
    }

    /// Switches mode, abandoning any interaction in progress.
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.interaction.cancel();
        self.canvas.set_mode(mode);
        self.sync_draft();
    }

    pub fn interaction_state(&self) -> &InteractionState {
        self.interaction.state()
    }

    /// Feeds a gesture to the controller.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> GestureOutcome {
        let outcome = self.interaction.handle(&mut self.canvas, gesture);
        if outcome.is_commit() {
            self.modified = true;
        }
        self.sync_draft();
        outcome
    }

    /// Replaces the layout with a freshly loaded seat list.
    ///
    /// Local edits, selection, the open draft and the overlay are all
    /// discarded. Returns the number of items loaded.
    pub fn hydrate(&mut self, dtos: &[SeatDto]) -> Result<usize, LayoutError> {
        let layout = items_from_dtos(dtos, self.canvas.config());
        self.interaction.cancel();
        self.canvas.replace_items(layout.items)?;
        self.overlay.clear();
        self.overlay.apply(&layout.statuses);
        self.sync_draft();
        self.modified = false;
        info!("Hydrated {} items", self.canvas.item_count());
        Ok(self.canvas.item_count())
    }

    /// The full batch for a save.
    pub fn seat_updates(&self) -> Vec<SeatUpdate> {
        to_seat_updates(self.canvas.items(), &self.overlay)
    }

    /// Applies server statuses to the overlay only. Geometry, selection and
    /// any drag in progress are untouched.
    pub fn apply_status_updates(&mut self, updates: &[SeatStatusUpdate]) -> usize {
        self.overlay.apply(updates)
    }

    /// Whether there are edits not yet saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clears the modified flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn items(&self) -> impl Iterator<Item = &LayoutItem> {
        self.canvas.items()
    }

    pub fn selected_item(&self) -> Option<&LayoutItem> {
        self.canvas.selected_item()
    }

    /// Items with their overlay status, in draw order.
    pub fn rendered_items(&self) -> Vec<RenderedItem<'_>> {
        self.overlay.join(&self.canvas.item_store)
    }

    /// Where to draw an item, in content space: the preview while it is
    /// being dragged or resized, the stored rectangle otherwise.
    pub fn display_rect(&self, id: &ItemId) -> Option<Rect> {
        match self.interaction.preview_rect(&self.canvas) {
            Some((preview_id, rect)) if &preview_id == id => Some(rect),
            _ => self.canvas.get_item(id).map(LayoutItem::rect),
        }
    }

    /// [`display_rect`](Self::display_rect) mapped to screen space.
    pub fn display_screen_rect(&self, id: &ItemId) -> Option<Rect> {
        self.display_rect(id)
            .map(|rect| self.canvas.viewport().rect_to_screen(&rect))
    }

    /// Frames all items in the viewport.
    pub fn fit_all_items(&mut self) {
        self.canvas.fit_all_items();
    }

    pub fn zoom_in(&mut self) {
        self.canvas.viewport_mut().zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.canvas.viewport_mut().zoom_out();
    }

    /// Updates the canvas size reported by the host.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas.viewport_mut().set_canvas_size(width, height);
    }

    /// Toggles the lock on the selected item. Returns the new state.
    pub fn toggle_lock_selected(&mut self) -> Result<bool, LayoutError> {
        let id = self
            .canvas
            .selected_id()
            .cloned()
            .ok_or(LayoutError::NothingSelected)?;
        self.interaction.forget(&id);
        self.sync_draft();
        let item = self.canvas.item_store.require_mut(&id)?;
        item.locked = !item.locked;
        Ok(item.locked)
    }

    /// Sets the editor-only rotation of the selected item, in degrees.
    /// `None` clears it.
    pub fn set_selected_rotation(&mut self, degrees: Option<f64>) -> Result<(), LayoutError> {
        let id = self
            .canvas
            .selected_id()
            .cloned()
            .ok_or(LayoutError::NothingSelected)?;
        let item = self.canvas.item_store.require_mut(&id)?;
        item.rotation = degrees.map(|d| d.rem_euclid(360.0));
        Ok(())
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), EditorMode::Edit)
    }
}
