//! Data transfer objects exchanged with the seat backend.
//!
//! Geometry travels as a flat `"x,y,w,h"` string in the `position` field;
//! parsing it is the job of the designer's serialization adapter, not of
//! these types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Backend identifier of a cafe.
pub type CafeId = i64;

/// Availability of a seat as reported by the backend.
///
/// Travels as a SCREAMING_SNAKE_CASE string. Values this client does not
/// know are kept verbatim in [`SeatStatus::Other`] so a save writes them
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SeatStatus {
    /// Free to reserve
    #[default]
    Available,
    /// Closed or out of service
    Unavailable,
    /// Currently in use by a session
    Occupied,
    /// Held by a reservation
    Reserved,
    /// Raw backend value with no known meaning here
    Other(String),
}

impl SeatStatus {
    /// Whether a user may pick this seat.
    pub fn is_reservable(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Wire form of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Unavailable => "UNAVAILABLE",
            Self::Occupied => "OCCUPIED",
            Self::Reserved => "RESERVED",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the statuses the editor understands.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for SeatStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "AVAILABLE" => Self::Available,
            "UNAVAILABLE" => Self::Unavailable,
            "OCCUPIED" => Self::Occupied,
            "RESERVED" => Self::Reserved,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for SeatStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl Serialize for SeatStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SeatStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seat row as returned by `GET seats(cafeId)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: SeatStatus,
    /// `"x,y,w,h"`; may be truncated or empty for legacy rows
    #[serde(default)]
    pub position: String,
}

/// One element of the `PUT seats(cafeId, ...)` batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatUpdate {
    pub id: String,
    pub name: String,
    pub status: SeatStatus,
    pub position: String,
}

/// A single status change from the seat-status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatStatusUpdate {
    pub seat_id: String,
    pub status: SeatStatus,
}

impl SeatStatusUpdate {
    pub fn new(seat_id: impl Into<String>, status: SeatStatus) -> Self {
        Self {
            seat_id: seat_id.into(),
            status,
        }
    }
}
