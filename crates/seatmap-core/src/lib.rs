//! # Seatmap Core
//!
//! Core types, constants, and utilities for Seatmap.
//! Provides the error types shared by every layer, the DTOs exchanged with
//! the seat backend, and the event bus used to report load/save progress.

pub mod constants;
pub mod data;
pub mod error;
pub mod event_bus;

pub use data::{CafeId, SeatDto, SeatStatus, SeatStatusUpdate, SeatUpdate};

pub use error::{Error, LayoutError, RepositoryError, Result};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, EventBus, EventBusError, EventCategory, EventFilter,
    LayoutEvent, StatusEvent, SubscriptionId, SyncEvent,
};
