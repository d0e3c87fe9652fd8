//! Seat backend contract.

use async_trait::async_trait;

use seatmap_core::{CafeId, RepositoryError, SeatDto, SeatStatusUpdate, SeatUpdate};

/// The seat endpoints a layout screen depends on.
///
/// Implementations own their transport and state; nothing here is global.
/// All methods may be called concurrently.
#[async_trait]
pub trait SeatRepository: Send + Sync {
    /// `GET seats(cafeId)`: the cafe's full seat list.
    async fn fetch_seats(&self, cafe_id: CafeId) -> Result<Vec<SeatDto>, RepositoryError>;

    /// `PUT seats(cafeId, ...)`: replaces the cafe's seat list with `seats`.
    async fn update_seats(
        &self,
        cafe_id: CafeId,
        seats: Vec<SeatUpdate>,
    ) -> Result<(), RepositoryError>;

    /// Current status of every seat, for the overlay.
    async fn fetch_statuses(
        &self,
        cafe_id: CafeId,
    ) -> Result<Vec<SeatStatusUpdate>, RepositoryError>;
}
