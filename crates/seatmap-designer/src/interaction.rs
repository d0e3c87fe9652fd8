//! Gesture state machine for the layout canvas.
//!
//! The host feeds raw gestures (already recognized as tap, drag, pinch and
//! so on) into [`InteractionController::handle`]. The controller decides
//! whether a gesture pans the viewport, selects an item, moves it, resizes
//! it or opens the property editor.
//!
//! While a drag or resize is in progress the stored item is not touched. The
//! running content-space delta lives in the controller and the host renders
//! [`InteractionController::preview_rect`] instead of the stored rectangle.
//! Only `DragEnd` writes geometry back, snapped to the grid; `DragCancel`
//! and tap-to-cancel simply forget the delta.

use tracing::{debug, warn};

use crate::canvas::{HitTarget, LayoutCanvas};
use crate::geometry::{Point, Rect};
use crate::handles::{self, ResizeHandle};
use crate::model::ItemId;

/// Raw gestures delivered by the host, in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Single tap at a point.
    Tap(Point),
    /// Double tap at a point.
    DoubleTap(Point),
    /// One-finger drag began at a point.
    DragStart(Point),
    /// One-finger drag moved by a delta since the previous event.
    DragMove(Point),
    DragEnd,
    /// The system took the pointer away (e.g. an incoming call).
    DragCancel,
    /// One frame of a two-finger gesture: centroid position, centroid
    /// movement since the last frame and incremental zoom factor.
    Transform { centroid: Point, pan: Point, zoom: f64 },
    TransformEnd,
}

/// Controller states.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    PanningOrZooming,
    DraggingItem {
        id: ItemId,
        /// Accumulated content-space movement.
        delta: Point,
    },
    ResizingItem {
        id: ItemId,
        handle: ResizeHandle,
        /// Accumulated content-space movement of the handle.
        delta: Point,
    },
    EditingLabel {
        id: ItemId,
    },
}

impl InteractionState {
    /// The item this state is working on, if any.
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            Self::DraggingItem { id, .. }
            | Self::ResizingItem { id, .. }
            | Self::EditingLabel { id } => Some(id),
            Self::Idle | Self::PanningOrZooming => None,
        }
    }
}

/// What a gesture did.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// The gesture does not apply in the current state.
    Ignored,
    SelectionChanged(Option<ItemId>),
    ViewportChanged,
    DragStarted(ItemId),
    ResizeStarted(ItemId, ResizeHandle),
    /// The preview geometry of an item changed.
    PreviewUpdated(ItemId),
    /// A drag was committed.
    Moved { id: ItemId, pos: Point },
    /// A resize was committed.
    Resized { id: ItemId, rect: Rect },
    /// The property editor should open for this item.
    EditRequested(ItemId),
    /// An in-progress drag, resize or edit was abandoned.
    Cancelled,
    /// A pan or pinch finished.
    GestureEnded,
}

impl GestureOutcome {
    /// Whether stored item geometry changed.
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Moved { .. } | Self::Resized { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == InteractionState::Idle
    }

    /// Drops any in-progress interaction without committing.
    ///
    /// Returns true if something was abandoned.
    pub fn cancel(&mut self) -> bool {
        let was_active = !self.is_idle();
        if was_active {
            debug!("interaction cancelled from {:?}", self.state);
        }
        self.state = InteractionState::Idle;
        was_active
    }

    /// Cancels the interaction if it works on `id`.
    pub fn forget(&mut self, id: &ItemId) {
        if self.state.item_id() == Some(id) {
            self.cancel();
        }
    }

    /// Enters label editing for `id` without a double tap (toolbar button).
    pub fn begin_edit(&mut self, id: ItemId) {
        debug!("editing {}", id);
        self.state = InteractionState::EditingLabel { id };
    }

    /// Leaves label editing. Returns the edited id.
    pub fn finish_edit(&mut self) -> Option<ItemId> {
        match std::mem::take(&mut self.state) {
            InteractionState::EditingLabel { id } => Some(id),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// The rectangle to draw for the item being dragged or resized.
    ///
    /// Values are continuous; snapping only happens at commit.
    pub fn preview_rect(&self, canvas: &LayoutCanvas) -> Option<(ItemId, Rect)> {
        match &self.state {
            InteractionState::DraggingItem { id, delta } => {
                let item = canvas.get_item(id)?;
                Some((id.clone(), item.rect().translated(*delta)))
            }
            InteractionState::ResizingItem { id, handle, delta } => {
                let item = canvas.get_item(id)?;
                let rect = handles::resize_rect(&item.rect(), *handle, *delta, canvas.cell_size());
                Some((id.clone(), rect))
            }
            _ => None,
        }
    }

    /// Feeds one gesture through the state machine.
    pub fn handle(&mut self, canvas: &mut LayoutCanvas, gesture: Gesture) -> GestureOutcome {
        let outcome = match gesture {
            Gesture::Tap(p) => self.on_tap(canvas, p),
            Gesture::DoubleTap(p) => self.on_double_tap(canvas, p),
            Gesture::DragStart(p) => self.on_drag_start(canvas, p),
            Gesture::DragMove(d) => self.on_drag_move(canvas, d),
            Gesture::DragEnd => self.on_drag_end(canvas),
            Gesture::DragCancel => self.on_drag_cancel(),
            Gesture::Transform {
                centroid,
                pan,
                zoom,
            } => self.on_transform(canvas, centroid, pan, zoom),
            Gesture::TransformEnd => self.on_transform_end(),
        };
        if outcome != GestureOutcome::Ignored {
            debug!("{:?} -> {:?}", gesture, outcome);
        }
        outcome
    }

    fn on_tap(&mut self, canvas: &mut LayoutCanvas, p: Point) -> GestureOutcome {
        // Tap-to-cancel beats everything else; the selection is left as is.
        if self.cancel() {
            return GestureOutcome::Cancelled;
        }
        match canvas.hit_test(p) {
            HitTarget::Item(id) | HitTarget::Handle(id, _) => {
                canvas.selection_manager.select(id.clone());
                GestureOutcome::SelectionChanged(Some(id))
            }
            HitTarget::Background => {
                canvas.selection_manager.clear();
                GestureOutcome::SelectionChanged(None)
            }
        }
    }

    fn on_double_tap(&mut self, canvas: &mut LayoutCanvas, p: Point) -> GestureOutcome {
        if !self.is_idle() || !canvas.mode().is_edit() {
            return self.on_tap(canvas, p);
        }
        match canvas.hit_test(p) {
            HitTarget::Item(id) | HitTarget::Handle(id, _) => {
                canvas.selection_manager.select(id.clone());
                self.state = InteractionState::EditingLabel { id: id.clone() };
                GestureOutcome::EditRequested(id)
            }
            HitTarget::Background => {
                canvas.selection_manager.clear();
                GestureOutcome::SelectionChanged(None)
            }
        }
    }

    /// Handle of the selected item → resize. Any unlocked item body, selected
    /// or not, → select it and drag. Anything else, or view mode → pan.
    fn on_drag_start(&mut self, canvas: &mut LayoutCanvas, p: Point) -> GestureOutcome {
        if !self.is_idle() {
            return GestureOutcome::Ignored;
        }
        if canvas.mode().is_edit() {
            match canvas.hit_test(p) {
                HitTarget::Handle(id, handle) => {
                    self.state = InteractionState::ResizingItem {
                        id: id.clone(),
                        handle,
                        delta: Point::ZERO,
                    };
                    return GestureOutcome::ResizeStarted(id, handle);
                }
                HitTarget::Item(id) if canvas.get_item(&id).is_some_and(|item| !item.locked) => {
                    canvas.selection_manager.select(id.clone());
                    self.state = InteractionState::DraggingItem {
                        id: id.clone(),
                        delta: Point::ZERO,
                    };
                    return GestureOutcome::DragStarted(id);
                }
                _ => {}
            }
        }
        self.state = InteractionState::PanningOrZooming;
        GestureOutcome::ViewportChanged
    }

    fn on_drag_move(&mut self, canvas: &mut LayoutCanvas, d: Point) -> GestureOutcome {
        let scale = canvas.viewport().scale();
        match &mut self.state {
            InteractionState::PanningOrZooming => {
                canvas.viewport_mut().pan_by(d);
                GestureOutcome::ViewportChanged
            }
            InteractionState::DraggingItem { id, delta }
            | InteractionState::ResizingItem { id, delta, .. } => {
                *delta += d / scale;
                GestureOutcome::PreviewUpdated(id.clone())
            }
            _ => GestureOutcome::Ignored,
        }
    }

    fn on_drag_end(&mut self, canvas: &mut LayoutCanvas) -> GestureOutcome {
        match std::mem::take(&mut self.state) {
            InteractionState::DraggingItem { id, delta } => {
                match canvas.commit_move(&id, delta) {
                    Ok(pos) => GestureOutcome::Moved { id, pos },
                    Err(e) => {
                        warn!("Dropping drag of {}: {}", id, e);
                        GestureOutcome::Cancelled
                    }
                }
            }
            InteractionState::ResizingItem { id, handle, delta } => {
                match canvas.commit_resize(&id, handle, delta) {
                    Ok(rect) => GestureOutcome::Resized { id, rect },
                    Err(e) => {
                        warn!("Dropping resize of {}: {}", id, e);
                        GestureOutcome::Cancelled
                    }
                }
            }
            InteractionState::PanningOrZooming => GestureOutcome::GestureEnded,
            other => {
                self.state = other;
                GestureOutcome::Ignored
            }
        }
    }

    fn on_drag_cancel(&mut self) -> GestureOutcome {
        match self.state {
            InteractionState::DraggingItem { .. } | InteractionState::ResizingItem { .. } => {
                self.state = InteractionState::Idle;
                GestureOutcome::Cancelled
            }
            InteractionState::PanningOrZooming => {
                self.state = InteractionState::Idle;
                GestureOutcome::GestureEnded
            }
            _ => GestureOutcome::Ignored,
        }
    }

    fn on_transform(
        &mut self,
        canvas: &mut LayoutCanvas,
        centroid: Point,
        pan: Point,
        zoom: f64,
    ) -> GestureOutcome {
        match self.state {
            InteractionState::Idle | InteractionState::PanningOrZooming => {
                self.state = InteractionState::PanningOrZooming;
                canvas
                    .viewport_mut()
                    .apply_transform_gesture(centroid, pan, zoom);
                GestureOutcome::ViewportChanged
            }
            _ => GestureOutcome::Ignored,
        }
    }

    fn on_transform_end(&mut self) -> GestureOutcome {
        if self.state == InteractionState::PanningOrZooming {
            self.state = InteractionState::Idle;
            GestureOutcome::GestureEnded
        } else {
            GestureOutcome::Ignored
        }
    }
}
