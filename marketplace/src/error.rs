//! Error types for marketplace operations.

use crate::types::EventId;
use thiserror::Error;

/// Result type alias for marketplace operations.
pub type Result<T> = std::result::Result<T, MarketplaceError>;

/// Failure taxonomy for marketplace commands.
///
/// Every variant is a recoverable, caller-visible failure; none is fatal
/// to the process. A failed command leaves the inventory exactly as it
/// was; partially-applied mutations never escape the controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketplaceError {
    /// The referenced event does not exist.
    #[error("event {event_id} not found")]
    NotFound {
        /// Id that failed to resolve.
        event_id: EventId,
    },

    /// The event's ticket capacity is exhausted.
    #[error("event {event_id} is sold out")]
    SoldOut {
        /// Event whose capacity ran out.
        event_id: EventId,
    },

    /// No acting identity was supplied with the command.
    #[error("no connected identity")]
    Unauthenticated,

    /// Creation parameters failed validation.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was rejected, suitable for surfacing to the caller.
        reason: String,
    },
}

impl MarketplaceError {
    /// Returns `true` if this error is due to the caller's own input
    /// rather than the current state of the inventory.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ticketchain_marketplace::MarketplaceError;
    /// assert!(MarketplaceError::Unauthenticated.is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::InvalidInput { .. })
    }
}
