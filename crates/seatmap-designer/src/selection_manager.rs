use crate::geometry::Point;
use crate::item_store::ItemStore;
use crate::model::{ItemId, LayoutItem};

/// Tracks the single selected item.
///
/// The layout editor has no multi-select: a tap on an item replaces the
/// selection, a tap on the background clears it.
///
/// # Selection Model
///
/// - **Edit mode**: any item can be selected.
/// - **View mode**: only seats can be selected; walls and labels are map
///   decoration and are skipped by hit-testing.
///
/// The manager only stores the id. It never holds a reference into the
/// [`ItemStore`], so it has to be told when items go away
/// (see [`retain_valid`](Self::retain_valid)).
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the selected item, if any
    selected_id: Option<ItemId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatmap_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected item.
    pub fn selected_id(&self) -> Option<&ItemId> {
        self.selected_id.as_ref()
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected_id.as_ref() == Some(id)
    }

    /// Replaces the selection.
    pub fn select(&mut self, id: ItemId) {
        self.selected_id = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Selects the topmost item at `point` that passes `filter`, or clears
    /// the selection when there is none.
    ///
    /// # Arguments
    ///
    /// * `store` - The items to hit-test, in draw order
    /// * `point` - Content-space point
    /// * `filter` - Which items are selectable
    ///
    /// # Returns
    ///
    /// The new selection.
    pub fn select_at<F>(&mut self, store: &ItemStore, point: Point, filter: F) -> Option<ItemId>
    where
        F: Fn(&LayoutItem) -> bool,
    {
        self.selected_id = store.topmost_at(point, filter).map(|item| item.id().clone());
        self.selected_id.clone()
    }

    /// Drops the selection if the selected item is no longer in `store`.
    ///
    /// Returns true if the selection was cleared.
    pub fn retain_valid(&mut self, store: &ItemStore) -> bool {
        match &self.selected_id {
            Some(id) if !store.contains(id) => {
                self.selected_id = None;
                true
            }
            _ => false,
        }
    }
}
