//! Transient user-facing notifications derived from session events.
//!
//! A failed save keeps the user's edits in memory; the host only has to tell
//! them it failed. [`NotificationCenter`] listens on the [`EventBus`], turns
//! sync and status events into short messages, logs them and queues them for
//! the host to show and discard.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use seatmap_core::{
    AppEvent, EventBus, EventCategory, EventFilter, StatusEvent, SubscriptionId, SyncEvent,
};

/// Oldest entries are dropped beyond this many undrained notifications.
pub const MAX_PENDING_NOTIFICATIONS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn info(message: String) -> Self {
        Self {
            level: NotificationLevel::Info,
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message,
        }
    }

    /// The notification shown for `event`, if any.
    pub fn from_event(event: &AppEvent) -> Option<Self> {
        match event {
            AppEvent::Sync(SyncEvent::Saved { item_count, .. }) => {
                Some(Self::info(format!("Saved {} items", item_count)))
            }
            AppEvent::Sync(SyncEvent::SaveFailed { message, .. }) => Some(Self::warning(format!(
                "Save failed: {}. Your edits are kept, try saving again.",
                message
            ))),
            AppEvent::Sync(SyncEvent::LoadFailed { message, .. }) => {
                Some(Self::warning(format!("Could not load seats: {}", message)))
            }
            AppEvent::Status(StatusEvent::RefreshFailed { message }) => Some(Self::warning(
                format!("Seat status refresh failed: {}", message),
            )),
            _ => None,
        }
    }
}

/// Queue of pending notifications fed by an [`EventBus`] subscription.
///
/// Unsubscribes when dropped.
pub struct NotificationCenter {
    bus: Arc<EventBus>,
    subscription: SubscriptionId,
    pending: Arc<Mutex<VecDeque<Notification>>>,
}

impl NotificationCenter {
    pub fn attach(bus: Arc<EventBus>) -> Self {
        let pending = Arc::new(Mutex::new(VecDeque::new()));
        let queue = Arc::clone(&pending);
        let subscription = bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Sync, EventCategory::Status]),
            move |event| {
                let Some(notification) = Notification::from_event(event) else {
                    return;
                };
                match notification.level {
                    NotificationLevel::Info => tracing::info!("{}", notification.message),
                    NotificationLevel::Warning => tracing::warn!("{}", notification.message),
                }
                let mut queue = queue.lock();
                if queue.len() == MAX_PENDING_NOTIFICATIONS {
                    queue.pop_front();
                }
                queue.push_back(notification);
            },
        );
        Self {
            bus,
            subscription,
            pending,
        }
    }

    /// Takes every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("subscription", &self.subscription)
            .field("pending", &self.len())
            .finish()
    }
}
