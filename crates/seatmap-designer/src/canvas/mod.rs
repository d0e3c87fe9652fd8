//! Canvas holding the items, the selection and the viewport.

mod operations;
mod types;

pub use types::{EditorMode, HitTarget, LayoutConfig};

use seatmap_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

use crate::geometry::Point;
use crate::item_store::ItemStore;
use crate::model::{ItemId, LayoutItem};
use crate::selection_manager::SelectionManager;
use crate::viewport::Viewport;

/// Canvas state: items, selection, viewport and mode.
#[derive(Debug, Clone)]
pub struct LayoutCanvas {
    pub item_store: ItemStore,
    pub selection_manager: SelectionManager,
    mode: EditorMode,
    viewport: Viewport,
    config: LayoutConfig,
}

impl LayoutCanvas {
    /// Creates an empty canvas with the default size.
    pub fn new(config: LayoutConfig, mode: EditorMode) -> Self {
        Self::with_size(config, mode, DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    /// Creates a canvas with specified dimensions.
    pub fn with_size(config: LayoutConfig, mode: EditorMode, width: f64, height: f64) -> Self {
        Self {
            item_store: ItemStore::new(),
            selection_manager: SelectionManager::new(),
            mode,
            viewport: Viewport::new(width, height)
                .with_scale_limits(config.min_scale, config.max_scale),
            config,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switches mode. Leaving edit mode drops a selection that view mode
    /// could not have made.
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
        if !mode.is_edit() && self.selected_item().is_some_and(|item| !item.is_seat()) {
            self.selection_manager.clear();
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cell_size(&self) -> f64 {
        self.config.cell_size
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn item_count(&self) -> usize {
        self.item_store.len()
    }

    pub fn items(&self) -> impl Iterator<Item = &LayoutItem> {
        self.item_store.iter()
    }

    pub fn get_item(&self, id: &ItemId) -> Option<&LayoutItem> {
        self.item_store.get(id)
    }

    pub fn selected_id(&self) -> Option<&ItemId> {
        self.selection_manager.selected_id()
    }

    pub fn selected_item(&self) -> Option<&LayoutItem> {
        self.selected_id().and_then(|id| self.item_store.get(id))
    }

    /// Converts a screen point to content space.
    pub fn screen_to_content(&self, screen: Point) -> Point {
        self.viewport.to_content(screen)
    }

    /// Whether the item responds to taps in the current mode.
    pub fn is_interactive(&self, item: &LayoutItem) -> bool {
        self.mode.is_edit() || item.is_seat()
    }
}

impl Default for LayoutCanvas {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), EditorMode::Edit)
    }
}
