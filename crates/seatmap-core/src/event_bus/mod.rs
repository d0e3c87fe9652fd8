//! # Event Bus Module
//!
//! Provides an event bus for decoupled communication between the layout
//! session and whatever hosts it (screen, logger, tests).
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async broadcast receivers
//! - Handlers run outside the bus lock and may publish or subscribe
//!
//! The bus is an owned value: create one, wrap it in an `Arc`, and hand it
//! to the components that publish. There is no process-wide instance.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seatmap_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, SyncEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Sync]),
//!     |event| {
//!         if let AppEvent::Sync(sync) = event {
//!             println!("sync: {:?}", sync);
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Sync(SyncEvent::Saved { cafe_id: 1, item_count: 12 })).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
