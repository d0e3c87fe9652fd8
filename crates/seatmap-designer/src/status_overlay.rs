//! Server-reported seat status, kept beside the items.
//!
//! Status updates arrive from the network at any time, including in the
//! middle of a drag. They only ever touch this map. Item geometry is never
//! read or written here, so a refresh cannot disturb an edit in progress.

use std::collections::HashMap;

use seatmap_core::{SeatStatus, SeatStatusUpdate};

use crate::item_store::ItemStore;
use crate::model::{ItemId, LayoutItem};

/// An item paired with its overlay status for rendering.
#[derive(Debug, Clone)]
pub struct RenderedItem<'a> {
    pub item: &'a LayoutItem,
    /// `None` for walls and labels, and for seats the server has not
    /// reported yet.
    pub status: Option<SeatStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct StatusOverlay {
    statuses: HashMap<ItemId, SeatStatus>,
}

impl StatusOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a batch of server updates. Returns how many entries changed.
    pub fn apply(&mut self, updates: &[SeatStatusUpdate]) -> usize {
        updates
            .iter()
            .filter(|u| self.set(ItemId::new(u.seat_id.as_str()), u.status.clone()))
            .count()
    }

    /// Sets one status. Returns true if the stored value changed.
    pub fn set(&mut self, id: ItemId, status: SeatStatus) -> bool {
        self.statuses.insert(id, status.clone()).as_ref() != Some(&status)
    }

    pub fn status_of(&self, id: &ItemId) -> Option<SeatStatus> {
        self.statuses.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }

    /// Joins items with their status in draw order.
    pub fn join<'a>(&self, store: &'a ItemStore) -> Vec<RenderedItem<'a>> {
        store
            .iter()
            .map(|item| RenderedItem {
                item,
                status: if item.is_seat() {
                    self.status_of(item.id())
                } else {
                    None
                },
            })
            .collect()
    }

    /// Drops entries whose id is no longer in `store` or no longer a seat.
    /// Returns the number removed.
    pub fn prune(&mut self, store: &ItemStore) -> usize {
        let before = self.statuses.len();
        self.statuses
            .retain(|id, _| store.get(id).is_some_and(LayoutItem::is_seat));
        before - self.statuses.len()
    }
}
