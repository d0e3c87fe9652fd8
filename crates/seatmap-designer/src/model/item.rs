use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use seatmap_core::constants::LOCAL_ID_PREFIX;

use crate::geometry::{Point, Rect, Size};

/// Stable identifier of a layout item.
///
/// Server ids are kept verbatim. Items created on the device get a
/// `new_`-prefixed id until the backend assigns a real one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh id for an unsaved item.
    pub fn new_local() -> Self {
        Self(format!("{}{}", LOCAL_ID_PREFIX, uuid::Uuid::new_v4().simple()))
    }

    /// Whether this id was generated locally and never saved.
    pub fn is_local(&self) -> bool {
        self.0.starts_with(LOCAL_ID_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// What an item represents on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemKind {
    /// Regular reservable seat
    #[default]
    Normal,
    /// Seat next to a window
    Window,
    /// Premium seat
    Premium,
    /// Structural wall segment
    Wall,
    /// Free-standing text label
    Label,
}

impl ItemKind {
    /// Seats can be reserved and carry a status; walls and labels are
    /// decoration.
    pub fn is_seat(&self) -> bool {
        matches!(self, Self::Normal | Self::Window | Self::Premium)
    }

    pub fn is_structural(&self) -> bool {
        !self.is_seat()
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Seat"),
            Self::Window => write!(f, "Window seat"),
            Self::Premium => write!(f, "Premium seat"),
            Self::Wall => write!(f, "Wall"),
            Self::Label => write!(f, "Label"),
        }
    }
}

/// A rectangle on the layout grid.
///
/// Equality and hashing consider only the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutItem {
    id: ItemId,
    pub label: String,
    kind: ItemKind,
    /// Top-left corner in content space.
    pub pos: Point,
    pub size: Size,
    /// Degrees; kept in the editor only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Locked items cannot be dragged or resized.
    #[serde(default)]
    pub locked: bool,
}

impl LayoutItem {
    pub fn new(
        id: ItemId,
        label: impl Into<String>,
        kind: ItemKind,
        pos: Point,
        size: Size,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
            pos,
            size,
            rotation: None,
            locked: false,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn is_seat(&self) -> bool {
        self.kind.is_seat()
    }

    /// Replaces the display label. The kind is not affected.
    pub fn rename(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Sets the size, raising each axis to at least `min_edge`.
    pub fn resize(&mut self, size: Size, min_edge: f64) {
        self.size = size.floored(min_edge);
    }

    /// Moves the top-left corner, optionally clamping it to the positive
    /// quadrant.
    pub fn move_to(&mut self, pos: Point, clamp_to_origin: bool) {
        self.pos = if clamp_to_origin {
            pos.clamp_non_negative()
        } else {
            pos
        };
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Applies a committed rectangle to position and size.
    pub fn set_rect(&mut self, rect: Rect) {
        self.pos = rect.pos();
        self.size = rect.size();
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rect().contains(p)
    }

    /// A copy with a new id and label, shifted by `offset`.
    pub fn duplicate(&self, id: ItemId, label: impl Into<String>, offset: Point) -> Self {
        Self {
            id,
            label: label.into(),
            kind: self.kind,
            pos: self.pos + offset,
            size: self.size,
            rotation: self.rotation,
            locked: false,
        }
    }
}

impl PartialEq for LayoutItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LayoutItem {}

impl Hash for LayoutItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
