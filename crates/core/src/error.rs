//! Core error type for all APDU operations
//!
//! Every failure path of an exchange maps to exactly one variant so callers
//! can tell a transport fault from a rejected command or a capacity problem.

use crate::command::error::CommandError;
use crate::response::error::ResponseError;
use crate::response::status::StatusWord;
use crate::transport::TransportError;

/// Result type for APDU operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Core error type that encompasses all possible errors in the crate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The byte transport failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A command could not be built
    #[error(transparent)]
    Command(#[from] CommandError),

    /// A frame from the card could not be split into payload and status
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The card answered with a non-success status word
    #[error("Card returned status {0}")]
    Status(StatusWord),

    /// Accumulated response data would exceed the caller's capacity
    #[error("Response needs {required} bytes but capacity is {capacity}")]
    BufferOverflow {
        /// Capacity supplied by the caller
        capacity: usize,
        /// Bytes the response would have needed so far
        required: usize,
    },

    /// The card kept asking for GET RESPONSE past the configured limit
    #[error("Chain limit of {0} GET RESPONSE rounds exceeded")]
    ChainLimitExceeded(usize),

    /// The field was activated twice without a release in between
    #[error("Field is already active")]
    FieldAlreadyActive,
}

impl Error {
    /// Get the status word if the card rejected the command
    pub const fn status_word(&self) -> Option<StatusWord> {
        match self {
            Self::Status(sw) => Some(*sw),
            _ => None,
        }
    }

    /// Check if this error came from the byte transport
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this error is a capacity overflow
    pub const fn is_buffer_overflow(&self) -> bool {
        matches!(self, Self::BufferOverflow { .. })
    }
}
