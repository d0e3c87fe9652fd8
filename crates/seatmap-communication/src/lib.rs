//! # Seatmap Communication
//!
//! Talks to the seat backend on behalf of a layout screen.
//!
//! - [`SeatRepository`]: the backend collaborator as an async trait
//! - [`InMemorySeatRepository`]: an owned in-process implementation, used
//!   by tests and offline demos
//! - [`LayoutSession`]: loads a cafe's seats into an
//!   [`EditorState`](seatmap_designer::EditorState), saves them back as one
//!   full-replace batch, retries failed loads and polls seat status
//!
//! Every repository call is bounded by a timeout. Results are applied to the
//! editor only after the call completes, so dropping a session future
//! leaves the editor as it was.

pub mod memory;
pub mod repository;
pub mod session;

pub use memory::InMemorySeatRepository;
pub use repository::SeatRepository;
pub use session::{LayoutSession, LoadState, SessionConfig, StatusRefresh};
