//! Layout item model.
//!
//! An item is a rectangle on the grid with an identity, a display label and
//! a kind fixed at construction. Seats, walls and free-standing labels all
//! share the same shape; only [`ItemKind`] tells them apart.

mod item;

pub use item::{ItemId, ItemKind, LayoutItem};
