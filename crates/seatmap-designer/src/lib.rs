//! # Seatmap Designer
//!
//! The interactive seat layout canvas: rectangular seats, walls and labels
//! placed on a grid, moved and resized with touch gestures, and converted
//! to and from the backend's seat rows.
//!
//! ## Core Components
//!
//! - **Geometry / Viewport**: content-space items, screen-space gestures,
//!   `screen = content * scale + translate`
//! - **Snapping**: commit-time quantization to the grid cell
//! - **Model / ItemStore**: items in draw order, identity by id
//! - **Handles**: eight compass resize handles with anchored resizing
//! - **Interaction**: the gesture state machine (pan, pinch, drag, resize,
//!   edit) with preview geometry kept apart from stored geometry
//! - **Serialization**: `"x,y,w,h"` position strings and legacy name
//!   prefixes
//! - **Status overlay**: server seat status joined by id at render time
//! - **EditorState**: toolbar and property panel on top of all of the above
//!
//! ## Architecture
//!
//! ```text
//! EditorState
//!   ├── LayoutCanvas
//!   │     ├── ItemStore
//!   │     ├── SelectionManager
//!   │     └── Viewport
//!   ├── InteractionController
//!   ├── StatusOverlay
//!   └── PropertyDraft (while editing)
//! ```
//!
//! Nothing here performs I/O. Loading and saving go through the
//! communication crate, which hands seat rows to [`EditorState::hydrate`]
//! and takes [`EditorState::seat_updates`] back.

pub mod canvas;
pub mod editor_state;
pub mod geometry;
pub mod handles;
pub mod interaction;
pub mod item_store;
pub mod model;
pub mod selection_manager;
pub mod serialization;
pub mod snapping;
pub mod status_overlay;
pub mod viewport;

pub use canvas::{EditorMode, HitTarget, LayoutCanvas, LayoutConfig};
pub use editor_state::{EditorState, PropertyDraft};
pub use geometry::{Point, Rect, Size};
pub use handles::ResizeHandle;
pub use interaction::{Gesture, GestureOutcome, InteractionController, InteractionState};
pub use item_store::ItemStore;
pub use model::{ItemId, ItemKind, LayoutItem};
pub use selection_manager::SelectionManager;
pub use serialization::{
    decode_position, encode_position, items_from_dtos, to_seat_updates, HydratedLayout,
};
pub use snapping::{snap, snap_size};
pub use status_overlay::{RenderedItem, StatusOverlay};
pub use viewport::Viewport;
