//! Error handling for Seatmap
//!
//! Provides error types for all layers of the application:
//! - Layout errors (item collection and editor operations)
//! - Repository errors (the seat backend collaborator)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Represents violations of the item collection contract, such as
/// referencing an item that does not exist or inserting a duplicate id.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No item with this id exists in the layout
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// An item with this id already exists in the layout
    #[error("Duplicate item id: {id}")]
    DuplicateId {
        /// The id that collided.
        id: String,
    },

    /// The operation needs a selected item
    #[error("No item selected")]
    NothingSelected,

    /// The item is locked against geometry edits
    #[error("Item {id} is locked")]
    ItemLocked {
        /// The locked item's id.
        id: String,
    },

    /// The operation is not valid in the current editor state
    #[error("Invalid editor state: {reason}")]
    InvalidState {
        /// Why the operation was refused.
        reason: String,
    },
}

/// Repository error type
///
/// Represents failures reported by, or while talking to, the seat backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// The request could not be delivered
    #[error("Network error: {message}")]
    Network {
        /// A message describing the failure.
        message: String,
    },

    /// The backend answered with a failure
    #[error("Request rejected: {message}")]
    Rejected {
        /// The failure message returned by the backend.
        message: String,
    },

    /// The request did not complete in time
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// The response could not be decoded
    #[error("Failed to decode response: {reason}")]
    Decode {
        /// The reason decoding failed.
        reason: String,
    },

    /// The cafe is unknown to the backend
    #[error("Cafe {cafe_id} not found")]
    CafeNotFound {
        /// The cafe that was requested.
        cafe_id: i64,
    },
}

/// Main error type for Seatmap
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Repository error
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Repository(RepositoryError::Timeout { .. }))
    }

    /// Check if this error came from the seat backend
    pub fn is_repository_error(&self) -> bool {
        matches!(self, Error::Repository(_))
    }

    /// Check if this is a network-level failure (worth retrying)
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            Error::Repository(RepositoryError::Network { .. })
                | Error::Repository(RepositoryError::Timeout { .. })
        )
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
