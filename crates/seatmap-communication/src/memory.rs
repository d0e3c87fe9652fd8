//! In-process seat repository.
//!
//! Holds seat lists per cafe behind a lock and answers the
//! [`SeatRepository`] calls from them. Failures and latency can be injected
//! per operation so the session's error paths can be exercised without a
//! network.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use seatmap_core::{CafeId, RepositoryError, SeatDto, SeatStatus, SeatStatusUpdate, SeatUpdate};

use crate::repository::SeatRepository;

#[derive(Debug, Default)]
struct FailurePlan {
    fetch: VecDeque<RepositoryError>,
    update: VecDeque<RepositoryError>,
    status: VecDeque<RepositoryError>,
}

/// Seat repository backed by memory.
#[derive(Debug, Default)]
pub struct InMemorySeatRepository {
    cafes: RwLock<HashMap<CafeId, Vec<SeatDto>>>,
    failures: RwLock<FailurePlan>,
    latency: RwLock<Option<Duration>>,
    fetch_calls: AtomicUsize,
    update_calls: AtomicUsize,
    status_calls: AtomicUsize,
}

impl InMemorySeatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_seats`](Self::set_seats).
    pub fn with_cafe(self, cafe_id: CafeId, seats: Vec<SeatDto>) -> Self {
        self.set_seats(cafe_id, seats);
        self
    }

    /// Replaces a cafe's stored seats, creating the cafe if needed.
    pub fn set_seats(&self, cafe_id: CafeId, seats: Vec<SeatDto>) {
        self.cafes.write().insert(cafe_id, seats);
    }

    /// Snapshot of a cafe's stored seats.
    pub fn seats(&self, cafe_id: CafeId) -> Option<Vec<SeatDto>> {
        self.cafes.read().get(&cafe_id).cloned()
    }

    /// Changes one stored seat's status. Returns false if it does not exist.
    pub fn set_status(&self, cafe_id: CafeId, seat_id: &str, status: SeatStatus) -> bool {
        let mut cafes = self.cafes.write();
        match cafes
            .get_mut(&cafe_id)
            .and_then(|seats| seats.iter_mut().find(|s| s.id == seat_id))
        {
            Some(seat) => {
                seat.status = status;
                true
            }
            None => false,
        }
    }

    /// The next `fetch_seats` call fails with `error`.
    pub fn fail_next_fetch(&self, error: RepositoryError) {
        self.failures.write().fetch.push_back(error);
    }

    /// The next `update_seats` call fails with `error`.
    pub fn fail_next_update(&self, error: RepositoryError) {
        self.failures.write().update.push_back(error);
    }

    /// The next `fetch_statuses` call fails with `error`.
    pub fn fail_next_status(&self, error: RepositoryError) {
        self.failures.write().status.push_back(error);
    }

    /// Delays every call by `latency`. `None` removes the delay.
    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.latency.write() = latency;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn status_count(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    async fn simulate_latency(&self) {
        let latency = *self.latency.read();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn not_found(cafe_id: CafeId) -> RepositoryError {
        RepositoryError::CafeNotFound { cafe_id }
    }
}

#[async_trait]
impl SeatRepository for InMemorySeatRepository {
    async fn fetch_seats(&self, cafe_id: CafeId) -> Result<Vec<SeatDto>, RepositoryError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if let Some(error) = self.failures.write().fetch.pop_front() {
            return Err(error);
        }
        self.seats(cafe_id).ok_or_else(|| Self::not_found(cafe_id))
    }

    async fn update_seats(
        &self,
        cafe_id: CafeId,
        seats: Vec<SeatUpdate>,
    ) -> Result<(), RepositoryError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if let Some(error) = self.failures.write().update.pop_front() {
            return Err(error);
        }
        let mut cafes = self.cafes.write();
        let stored = cafes
            .get_mut(&cafe_id)
            .ok_or_else(|| Self::not_found(cafe_id))?;
        debug!("Replacing {} seats with {} for cafe {}", stored.len(), seats.len(), cafe_id);
        *stored = seats
            .into_iter()
            .map(|u| SeatDto {
                id: u.id,
                name: u.name,
                status: u.status,
                position: u.position,
            })
            .collect();
        Ok(())
    }

    async fn fetch_statuses(
        &self,
        cafe_id: CafeId,
    ) -> Result<Vec<SeatStatusUpdate>, RepositoryError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if let Some(error) = self.failures.write().status.pop_front() {
            return Err(error);
        }
        let cafes = self.cafes.read();
        let seats = cafes.get(&cafe_id).ok_or_else(|| Self::not_found(cafe_id))?;
        Ok(seats
            .iter()
            .map(|s| SeatStatusUpdate::new(s.id.as_str(), s.status.clone()))
            .collect())
    }
}
