//! Layout session: one screen's connection between the editor and the
//! seat backend.
//!
//! The session owns the [`EditorState`] and an `Arc` to the repository.
//! Loads replace the editor's items; saves send the whole item list and do
//! not roll anything back when they fail, so the user can simply save
//! again. A failed load is recovered with [`LayoutSession::retry`].
//!
//! Seat status polling runs in its own task (see [`StatusRefresh`]) and
//! only ever feeds the status overlay.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use seatmap_core::{
    AppEvent, CafeId, Error, EventBus, LayoutEvent, RepositoryError, Result, SeatStatusUpdate,
    StatusEvent, SyncEvent,
};
use seatmap_designer::EditorState;

use crate::repository::SeatRepository;

/// Timing parameters of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Upper bound for every repository call.
    pub request_timeout: Duration,
    /// Period of the background status poll.
    pub status_refresh_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            status_refresh_interval: Duration::from_secs(15),
        }
    }
}

/// Where the initial load stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    /// The last load failed; the message is user-presentable.
    Failed(String),
}

/// Runs `fut` with a deadline, mapping expiry to [`RepositoryError::Timeout`].
async fn with_timeout<T, F>(timeout: Duration, fut: F) -> std::result::Result<T, RepositoryError>
where
    F: Future<Output = std::result::Result<T, RepositoryError>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(RepositoryError::Timeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}

/// Seat layout of one cafe, bound to its backend.
pub struct LayoutSession<R: SeatRepository> {
    cafe_id: CafeId,
    repository: Arc<R>,
    editor: EditorState,
    load_state: LoadState,
    config: SessionConfig,
    events: Option<Arc<EventBus>>,
}

impl<R: SeatRepository + 'static> LayoutSession<R> {
    pub fn new(cafe_id: CafeId, repository: Arc<R>, editor: EditorState) -> Self {
        Self {
            cafe_id,
            repository,
            editor,
            load_state: LoadState::NotLoaded,
            config: SessionConfig::default(),
            events: None,
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Publishes load/save/status progress on `bus`.
    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn cafe_id(&self) -> CafeId {
        self.cafe_id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editor
    }

    /// Fetches the seat list and hydrates the editor, discarding local
    /// edits. Returns the number of items loaded.
    pub async fn load(&mut self) -> Result<usize> {
        let cafe_id = self.cafe_id;
        self.load_state = LoadState::Loading;
        self.publish(AppEvent::Sync(SyncEvent::LoadStarted { cafe_id }));

        let fetched = with_timeout(
            self.config.request_timeout,
            self.repository.fetch_seats(cafe_id),
        )
        .await;

        let dtos = match fetched {
            Ok(dtos) => dtos,
            Err(e) => {
                warn!("Loading seats for cafe {} failed: {}", cafe_id, e);
                self.load_state = LoadState::Failed(e.to_string());
                self.publish(AppEvent::Sync(SyncEvent::LoadFailed {
                    cafe_id,
                    message: e.to_string(),
                }));
                return Err(e.into());
            }
        };

        if self.editor.is_modified() {
            self.publish(AppEvent::Layout(LayoutEvent::EditsDiscarded));
        }
        let count = match self.editor.hydrate(&dtos) {
            Ok(count) => count,
            Err(e) => {
                self.load_state = LoadState::Failed(e.to_string());
                return Err(e.into());
            }
        };
        self.editor.fit_all_items();
        self.load_state = LoadState::Loaded;

        info!("Loaded {} items for cafe {}", count, cafe_id);
        self.publish(AppEvent::Layout(LayoutEvent::Hydrated { item_count: count }));
        self.publish(AppEvent::Sync(SyncEvent::Loaded {
            cafe_id,
            item_count: count,
        }));
        Ok(count)
    }

    /// Loads again after a failure.
    pub async fn retry(&mut self) -> Result<usize> {
        debug!("Retrying load for cafe {} from {:?}", self.cafe_id, self.load_state);
        self.load().await
    }

    /// Sends the full item list. On failure the editor keeps every edit and
    /// stays modified. Returns the number of items sent.
    pub async fn save(&mut self) -> Result<usize> {
        let cafe_id = self.cafe_id;
        let batch = self.editor.seat_updates();
        let count = batch.len();

        let result = with_timeout(
            self.config.request_timeout,
            self.repository.update_seats(cafe_id, batch),
        )
        .await;

        match result {
            Ok(()) => {
                self.editor.mark_saved();
                info!("Saved {} items for cafe {}", count, cafe_id);
                self.publish(AppEvent::Sync(SyncEvent::Saved {
                    cafe_id,
                    item_count: count,
                }));
                Ok(count)
            }
            Err(e) => {
                warn!("Saving cafe {} failed, keeping local edits: {}", cafe_id, e);
                self.publish(AppEvent::Sync(SyncEvent::SaveFailed {
                    cafe_id,
                    message: e.to_string(),
                }));
                Err(Error::from(e))
            }
        }
    }

    /// Fetches seat status once and applies it to the overlay.
    pub async fn refresh_statuses(&mut self) -> Result<usize> {
        let fetched = with_timeout(
            self.config.request_timeout,
            self.repository.fetch_statuses(self.cafe_id),
        )
        .await;
        match fetched {
            Ok(batch) => Ok(self.apply_status_batch(&batch)),
            Err(e) => {
                self.publish(AppEvent::Status(StatusEvent::RefreshFailed {
                    message: e.to_string(),
                }));
                Err(e.into())
            }
        }
    }

    /// Applies a status batch to the overlay. Geometry is never touched.
    pub fn apply_status_batch(&mut self, batch: &[SeatStatusUpdate]) -> usize {
        let changed = self.editor.apply_status_updates(batch);
        debug!("{} of {} statuses changed", changed, batch.len());
        self.publish(AppEvent::Status(StatusEvent::Refreshed { count: batch.len() }));
        changed
    }

    /// Starts polling seat status every `status_refresh_interval`.
    ///
    /// The first poll happens immediately. Batches are delivered through the
    /// returned handle; feed them to
    /// [`apply_status_batch`](Self::apply_status_batch). Dropping the handle
    /// stops the task.
    pub fn spawn_status_refresh(&self) -> StatusRefresh {
        let (tx, rx) = mpsc::channel(4);
        let repository = Arc::clone(&self.repository);
        let events = self.events.clone();
        let cafe_id = self.cafe_id;
        let timeout = self.config.request_timeout;
        let period = self.config.status_refresh_interval.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match with_timeout(timeout, repository.fetch_statuses(cafe_id)).await {
                    Ok(batch) => {
                        if tx.send(batch).await.is_err() {
                            debug!("Status receiver gone, stopping refresh for cafe {}", cafe_id);
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Status refresh for cafe {} failed: {}", cafe_id, e);
                        if let Some(bus) = &events {
                            bus.publish(AppEvent::Status(StatusEvent::RefreshFailed {
                                message: e.to_string(),
                            }))
                            .ok();
                        }
                    }
                }
            }
        });

        StatusRefresh {
            receiver: rx,
            handle,
        }
    }

    fn publish(&self, event: AppEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event).ok();
        }
    }
}

/// Handle to a running status poll. The task is aborted on drop.
pub struct StatusRefresh {
    receiver: mpsc::Receiver<Vec<SeatStatusUpdate>>,
    handle: JoinHandle<()>,
}

impl StatusRefresh {
    /// Waits for the next batch. `None` once the task has stopped.
    pub async fn recv(&mut self) -> Option<Vec<SeatStatusUpdate>> {
        self.receiver.recv().await
    }

    /// Takes a batch if one is ready.
    pub fn try_recv(&mut self) -> Option<Vec<SeatStatusUpdate>> {
        self.receiver.try_recv().ok()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops polling.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for StatusRefresh {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl std::fmt::Debug for StatusRefresh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusRefresh")
            .field("running", &self.is_running())
            .finish()
    }
}
