//! Event type definitions for the event bus.
//!
//! Events are organized by category. They are cloneable and serializable so
//! that a host can log or replay them.

use serde::{Deserialize, Serialize};

use crate::data::CafeId;

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Changes to the item collection
    Layout(LayoutEvent),
    /// Load and save round trips with the seat backend
    Sync(SyncEvent),
    /// Seat status overlay refreshes
    Status(StatusEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Layout(_) => EventCategory::Layout,
            AppEvent::Sync(_) => EventCategory::Sync,
            AppEvent::Status(_) => EventCategory::Status,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Layout(e) => e.description(),
            AppEvent::Sync(e) => e.description(),
            AppEvent::Status(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Item collection events.
    Layout,
    /// Backend load/save events.
    Sync,
    /// Status overlay events.
    Status,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Layout => write!(f, "Layout"),
            EventCategory::Sync => write!(f, "Sync"),
            EventCategory::Status => write!(f, "Status"),
        }
    }
}

/// Item collection events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// The collection was replaced by a server load.
    Hydrated {
        /// Number of items after hydration.
        item_count: usize,
    },
    /// Local edits were discarded by a reload.
    EditsDiscarded,
}

impl LayoutEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            LayoutEvent::Hydrated { item_count } => format!("Layout hydrated ({} items)", item_count),
            LayoutEvent::EditsDiscarded => "Local edits discarded".to_string(),
        }
    }
}

/// Backend round-trip events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SyncEvent {
    /// A seat list load started.
    LoadStarted {
        /// Cafe being loaded.
        cafe_id: CafeId,
    },
    /// The seat list was loaded.
    Loaded {
        /// Cafe that was loaded.
        cafe_id: CafeId,
        /// Number of items hydrated.
        item_count: usize,
    },
    /// The seat list could not be loaded.
    LoadFailed {
        /// Cafe that failed to load.
        cafe_id: CafeId,
        /// Failure description.
        message: String,
    },
    /// The full item list was saved.
    Saved {
        /// Cafe that was saved.
        cafe_id: CafeId,
        /// Number of items sent.
        item_count: usize,
    },
    /// Saving failed; local edits were kept.
    SaveFailed {
        /// Cafe that failed to save.
        cafe_id: CafeId,
        /// Failure description.
        message: String,
    },
}

impl SyncEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            SyncEvent::LoadStarted { cafe_id } => format!("Loading seats for cafe {}", cafe_id),
            SyncEvent::Loaded {
                cafe_id,
                item_count,
            } => format!("Loaded {} items for cafe {}", item_count, cafe_id),
            SyncEvent::LoadFailed { cafe_id, message } => {
                format!("Load failed for cafe {}: {}", cafe_id, message)
            }
            SyncEvent::Saved {
                cafe_id,
                item_count,
            } => format!("Saved {} items for cafe {}", item_count, cafe_id),
            SyncEvent::SaveFailed { cafe_id, message } => {
                format!("Save failed for cafe {}: {}", cafe_id, message)
            }
        }
    }
}

/// Status overlay events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatusEvent {
    /// A batch of server statuses was applied to the overlay.
    Refreshed {
        /// Number of statuses in the batch.
        count: usize,
    },
    /// A status refresh request failed; the overlay was left as is.
    RefreshFailed {
        /// Failure description.
        message: String,
    },
}

impl StatusEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            StatusEvent::Refreshed { count } => format!("Status refreshed ({} seats)", count),
            StatusEvent::RefreshFailed { message } => format!("Status refresh failed: {}", message),
        }
    }
}
