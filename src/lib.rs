//! # Seatmap
//!
//! Seat layout editor core for study-cafe seat reservation:
//! - Grid-snapped layout canvas with seats, walls and labels
//! - Pan/zoom viewport and touch gestures (tap, drag, pinch)
//! - Eight-handle resize with commit-time snapping
//! - Seat list sync with a backend, plus live seat status
//!
//! ## Architecture
//!
//! Seatmap is organized as a workspace with multiple crates:
//!
//! 1. **seatmap-core** - Backend data types, errors, constants, events
//! 2. **seatmap-designer** - Geometry, viewport, canvas, gestures, editor state
//! 3. **seatmap-communication** - Seat repository and layout session
//! 4. **seatmap-settings** - Configuration files and validation
//! 5. **seatmap** - This crate; re-exports, notifications and logging setup
//!
//! Rendering and platform input are left to the host: it feeds
//! [`Gesture`]s into an [`EditorState`] and draws
//! [`EditorState::rendered_items`] through the [`Viewport`]. Load and save
//! failures reach the user through a [`NotificationCenter`] attached to the
//! session's [`EventBus`].

pub mod notifications;

pub use seatmap_communication as communication;
pub use seatmap_designer as designer;
pub use seatmap_settings as settings;

pub use seatmap_core::{
    AppEvent, CafeId, Error, EventBus, LayoutError, RepositoryError, Result, SeatDto, SeatStatus,
    SeatStatusUpdate, SeatUpdate,
};

pub use seatmap_designer::{
    EditorMode, EditorState, Gesture, GestureOutcome, ItemId, ItemKind, LayoutConfig, LayoutItem,
    Point, Rect, ResizeHandle, Size, Viewport,
};

pub use seatmap_communication::{
    InMemorySeatRepository, LayoutSession, LoadState, SeatRepository, SessionConfig,
};

pub use notifications::{Notification, NotificationCenter, NotificationLevel};

pub use seatmap_settings::{Config, ConnectionSettings, EditorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support (default `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Seatmap {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}

/// Initialize logging as one JSON object per line, for log collectors.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_current_span(false))
        .try_init()?;
    Ok(())
}
