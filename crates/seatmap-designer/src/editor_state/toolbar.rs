//! Toolbar actions: add, copy and delete.

use std::collections::BTreeSet;

use tracing::info;

use seatmap_core::constants::SEAT_LABEL_SUFFIX;
use seatmap_core::LayoutError;

use super::EditorState;
use crate::geometry::Size;
use crate::model::{ItemId, ItemKind, LayoutItem};
use crate::snapping::snap_point;

impl EditorState {
    /// Adds a one-cell seat at the viewport center, labeled with the
    /// smallest unused number ("1번", "2번", ...).
    pub fn add_seat(&mut self) -> Result<ItemId, LayoutError> {
        let label = self.next_seat_label();
        self.add_at_view_center(ItemKind::Normal, label)
    }

    /// Adds a one-cell wall at the viewport center, numbered with the
    /// smallest unused wall number.
    pub fn add_wall(&mut self) -> Result<ItemId, LayoutError> {
        let label = self.next_wall_label();
        self.add_at_view_center(ItemKind::Wall, label)
    }

    /// Adds a free text label at the viewport center.
    pub fn add_label(&mut self, text: impl Into<String>) -> Result<ItemId, LayoutError> {
        self.add_at_view_center(ItemKind::Label, text.into())
    }

    /// Removes the selected item.
    pub fn delete_selected(&mut self) -> Result<LayoutItem, LayoutError> {
        let id = self
            .canvas
            .selected_id()
            .cloned()
            .ok_or(LayoutError::NothingSelected)?;
        self.interaction.forget(&id);
        let removed = self
            .canvas
            .remove_item(&id)
            .ok_or_else(|| LayoutError::ItemNotFound { id: id.to_string() })?;
        self.overlay.prune(&self.canvas.item_store);
        self.sync_draft();
        self.modified = true;
        info!("Deleted {} {:?}", removed.kind(), removed.label);
        Ok(removed)
    }

    /// Duplicates the selected item with a fresh id and label, shifted by
    /// the copy offset. The copy becomes the selection.
    pub fn copy_selected(&mut self) -> Result<ItemId, LayoutError> {
        let original = self
            .canvas
            .selected_item()
            .cloned()
            .ok_or(LayoutError::NothingSelected)?;
        let label = match original.kind() {
            ItemKind::Wall => self.next_wall_label(),
            ItemKind::Label => original.label.clone(),
            _ => self.next_seat_label(),
        };
        let offset = self.canvas.config().copy_offset();
        let copy = original.duplicate(ItemId::new_local(), label, offset);
        self.insert_and_select(copy)
    }

    /// Smallest positive `n` such that no seat is labeled `"{n}번"`.
    pub fn next_seat_label(&self) -> String {
        let used = self.used_numbers(|item| {
            item.label
                .strip_suffix(SEAT_LABEL_SUFFIX)
                .filter(|_| item.is_seat())
        });
        format!("{}{}", smallest_unused(&used), SEAT_LABEL_SUFFIX)
    }

    /// Smallest positive number not used as a wall label.
    pub fn next_wall_label(&self) -> String {
        let used = self.used_numbers(|item| {
            (item.kind() == ItemKind::Wall).then_some(item.label.as_str())
        });
        smallest_unused(&used).to_string()
    }

    fn used_numbers<F>(&self, digits_of: F) -> BTreeSet<u32>
    where
        F: Fn(&LayoutItem) -> Option<&str>,
    {
        self.canvas
            .items()
            .filter_map(|item| digits_of(item).and_then(|s| s.trim().parse().ok()))
            .collect()
    }

    fn add_at_view_center(
        &mut self,
        kind: ItemKind,
        label: String,
    ) -> Result<ItemId, LayoutError> {
        let cell = self.canvas.cell_size();
        let center = snap_point(self.canvas.viewport().screen_center_in_content(), cell);
        let mut item = LayoutItem::new(
            ItemId::new_local(),
            label,
            kind,
            center,
            Size::square(cell),
        );
        item.move_to(center, self.canvas.config().clamp_to_origin);
        self.insert_and_select(item)
    }

    fn insert_and_select(&mut self, item: LayoutItem) -> Result<ItemId, LayoutError> {
        let id = item.id().clone();
        info!("Adding {} {:?} at {}", item.kind(), item.label, item.pos);
        self.interaction.cancel();
        self.canvas.add_item(item)?;
        self.canvas.selection_manager.select(id.clone());
        self.sync_draft();
        self.modified = true;
        Ok(id)
    }
}

fn smallest_unused(used: &BTreeSet<u32>) -> u32 {
    (1..).find(|n| !used.contains(n)).unwrap_or(1)
}
