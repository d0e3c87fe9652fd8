//! Property panel for the item being edited.
//!
//! The panel edits a [`PropertyDraft`]; nothing reaches the item until
//! [`EditorState::confirm_edit`]. Width and height are entered in whole
//! grid cells and the setters refuse any text with a non-digit in it, so a
//! partial or non-numeric value never gets as far as the model.

use tracing::debug;

use seatmap_core::LayoutError;

use super::EditorState;
use crate::geometry::Size;
use crate::interaction::InteractionState;
use crate::model::{ItemId, LayoutItem};

/// Pending label and size edits for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDraft {
    item_id: ItemId,
    label: String,
    width_cells: String,
    height_cells: String,
}

impl PropertyDraft {
    /// Seeds the draft from the item's current values.
    pub fn from_item(item: &LayoutItem, cell: f64) -> Self {
        Self {
            item_id: item.id().clone(),
            label: item.label.clone(),
            width_cells: cells_text(item.size.width, cell),
            height_cells: cells_text(item.size.height, cell),
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn width_text(&self) -> &str {
        &self.width_cells
    }

    pub fn height_text(&self) -> &str {
        &self.height_cells
    }

    /// Replaces the width field. Returns false and keeps the old text if
    /// `text` contains anything but ASCII digits.
    pub fn set_width_text(&mut self, text: &str) -> bool {
        accept_digits(&mut self.width_cells, text)
    }

    /// Replaces the height field. Same filtering as the width.
    pub fn set_height_text(&mut self, text: &str) -> bool {
        accept_digits(&mut self.height_cells, text)
    }

    /// Parsed width in cells; `None` while the field is empty.
    pub fn width_cells(&self) -> Option<u32> {
        self.width_cells.parse().ok()
    }

    pub fn height_cells(&self) -> Option<u32> {
        self.height_cells.parse().ok()
    }

    /// The size the draft would give `item`. Empty fields keep the current
    /// edge; zero becomes one cell.
    pub fn target_size(&self, item: &LayoutItem, cell: f64) -> Size {
        let edge = |cells: Option<u32>, current: f64| match cells {
            Some(n) => f64::from(n.max(1)) * cell,
            None => current,
        };
        Size::new(
            edge(self.width_cells(), item.size.width),
            edge(self.height_cells(), item.size.height),
        )
    }
}

fn cells_text(edge: f64, cell: f64) -> String {
    format!("{}", ((edge / cell).round() as u32).max(1))
}

fn accept_digits(field: &mut String, text: &str) -> bool {
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    field.clear();
    field.push_str(text);
    true
}

impl EditorState {
    /// Opens the property panel for the selected item (toolbar "edit").
    pub fn begin_edit_selected(&mut self) -> Result<(), LayoutError> {
        if !self.canvas.mode().is_edit() {
            return Err(LayoutError::InvalidState {
                reason: "editing is disabled in view mode".to_string(),
            });
        }
        let id = self
            .canvas
            .selected_id()
            .cloned()
            .ok_or(LayoutError::NothingSelected)?;
        self.interaction.cancel();
        self.interaction.begin_edit(id);
        self.sync_draft();
        Ok(())
    }

    pub fn draft(&self) -> Option<&PropertyDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut PropertyDraft> {
        self.draft.as_mut()
    }

    /// Writes the draft back to its item and closes the panel.
    ///
    /// A locked item accepts a new label but refuses a size change; the
    /// panel then stays open.
    pub fn confirm_edit(&mut self) -> Result<ItemId, LayoutError> {
        let draft = self.draft.as_ref().ok_or_else(|| LayoutError::InvalidState {
            reason: "no edit in progress".to_string(),
        })?;
        let cell = self.canvas.cell_size();
        let item = self.canvas.item_store.require_mut(draft.item_id())?;
        let size = draft.target_size(item, cell);
        if item.locked && size != item.size {
            return Err(LayoutError::ItemLocked {
                id: item.id().to_string(),
            });
        }
        item.rename(draft.label());
        item.resize(size, cell);
        let id = item.id().clone();
        debug!("confirmed edit of {}: {:?} {}", id, item.label, item.size);

        self.draft = None;
        self.interaction.finish_edit();
        self.modified = true;
        Ok(id)
    }

    /// Discards the draft. Returns true if one was open.
    pub fn cancel_edit(&mut self) -> bool {
        self.interaction.finish_edit();
        self.draft.take().is_some()
    }

    /// Keeps the draft in step with the controller state.
    pub(super) fn sync_draft(&mut self) {
        match self.interaction.state() {
            InteractionState::EditingLabel { id } => {
                if self.draft.as_ref().map(PropertyDraft::item_id) != Some(id) {
                    let cell = self.canvas.cell_size();
                    self.draft = self
                        .canvas
                        .get_item(id)
                        .map(|item| PropertyDraft::from_item(item, cell));
                }
            }
            _ => self.draft = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::ItemKind;

    fn item() -> LayoutItem {
        LayoutItem::new(
            ItemId::new("1"),
            "1번",
            ItemKind::Normal,
            Point::ZERO,
            Size::new(80.0, 40.0),
        )
    }

    #[test]
    fn test_draft_seeded_in_cells() {
        let draft = PropertyDraft::from_item(&item(), 40.0);
        assert_eq!(draft.width_text(), "2");
        assert_eq!(draft.height_text(), "1");
        assert_eq!(draft.label(), "1번");
    }

    #[test]
    fn test_non_digit_input_rejected() {
        let mut draft = PropertyDraft::from_item(&item(), 40.0);
        assert!(!draft.set_width_text("3a"));
        assert!(!draft.set_width_text("-1"));
        assert!(!draft.set_height_text("1.5"));
        assert_eq!(draft.width_text(), "2");
        assert_eq!(draft.height_text(), "1");
        assert!(draft.set_width_text("4"));
        assert_eq!(draft.width_cells(), Some(4));
    }

    #[test]
    fn test_target_size_empty_and_zero() {
        let it = item();
        let mut draft = PropertyDraft::from_item(&it, 40.0);
        assert!(draft.set_width_text(""));
        assert!(draft.set_height_text("0"));
        assert_eq!(draft.target_size(&it, 40.0), Size::new(80.0, 40.0));
        assert!(draft.set_height_text("3"));
        assert_eq!(draft.target_size(&it, 40.0), Size::new(80.0, 120.0));
    }
}
