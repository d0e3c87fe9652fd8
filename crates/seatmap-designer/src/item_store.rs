//! Ordered item collection.
//!
//! Items are kept in draw order: later items render above earlier ones and
//! win hit tests.

use seatmap_core::LayoutError;

use crate::geometry::{Point, Rect};
use crate::model::{ItemId, LayoutItem};

#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<LayoutItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item on top of the draw order.
    pub fn insert(&mut self, item: LayoutItem) -> Result<(), LayoutError> {
        if self.contains(item.id()) {
            return Err(LayoutError::DuplicateId {
                id: item.id().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<LayoutItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: &ItemId) -> Option<&LayoutItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut LayoutItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Like [`get_mut`](Self::get_mut) but reports a missing id as an error.
    pub fn require_mut(&mut self, id: &ItemId) -> Result<&mut LayoutItem, LayoutError> {
        self.get_mut(id).ok_or_else(|| LayoutError::ItemNotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in draw order (bottom first).
    pub fn iter(&self) -> impl Iterator<Item = &LayoutItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LayoutItem> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[LayoutItem] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The topmost item whose rectangle contains `p` and that passes
    /// `filter`.
    pub fn topmost_at<F>(&self, p: Point, filter: F) -> Option<&LayoutItem>
    where
        F: Fn(&LayoutItem) -> bool,
    {
        self.items
            .iter()
            .rev()
            .find(|item| item.contains(p) && filter(item))
    }

    /// Bounding box of every item, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.items
            .iter()
            .map(LayoutItem::rect)
            .reduce(|acc, r| acc.union(&r))
    }
}
