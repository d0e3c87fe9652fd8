//! Event bus: filtered synchronous subscribers plus an async broadcast feed.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Default broadcast buffer per receiver.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.simple().to_string()[..8])
    }
}

/// Which events a subscriber is called for.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Events in any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type Handler = Arc<dyn Fn(&AppEvent) + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// Neither a subscriber nor a receiver saw the event.
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Owned event bus shared through an `Arc`.
///
/// Handlers run on the publishing thread, outside the subscription lock, so
/// a handler may itself publish, subscribe or unsubscribe.
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    subscriptions: RwLock<Vec<Subscription>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Bus whose broadcast receivers buffer up to `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            subscriptions: RwLock::new(Vec::new()),
        }
    }

    /// Delivers `event` to matching subscribers, then to broadcast receivers.
    ///
    /// Returns the number of broadcast receivers, or
    /// [`EventBusError::NoSubscribers`] if nobody is listening at all.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        tracing::trace!("event: {}", event.description());

        let (subscribed, matching): (usize, Vec<Handler>) = {
            let subscriptions = self.subscriptions.read();
            let matching = subscriptions
                .iter()
                .filter(|s| s.filter.matches(&event))
                .map(|s| Arc::clone(&s.handler))
                .collect();
            (subscriptions.len(), matching)
        };

        for handler in &matching {
            handler(&event);
        }

        match self.sender.send(event) {
            Ok(receivers) => Ok(receivers),
            Err(_) if subscribed > 0 => Ok(0),
            Err(_) => Err(EventBusError::NoSubscribers),
        }
    }

    /// Registers a handler for events passing `filter`. It must return quickly.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.subscriptions.write().push(Subscription {
            id,
            filter,
            handler: Arc::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Returns true if `id` was subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.write();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        let removed = subscriptions.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// A receiver for consuming events from an async task.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}
