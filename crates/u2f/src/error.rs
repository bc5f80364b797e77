//! Error types for U2F operations

use fidonfc_apdu_core::StatusWord;

/// Result type for U2F operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A payload does not have the layout of the expected U2F message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A structural field has a value the format does not allow
    #[error("Unexpected format: {0}")]
    UnexpectedFormat(&'static str),

    /// The payload ends before a field it announces
    #[error("Truncated payload: need {needed} bytes, have {available}")]
    Truncated {
        /// Bytes required to read the field
        needed: usize,
        /// Bytes actually present
        available: usize,
    },
}

impl DecodeError {
    pub(crate) const fn truncated(needed: usize, available: usize) -> Self {
        Self::Truncated { needed, available }
    }
}

/// Error type for U2F operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Exchange level failure: transport, capacity or field state
    #[error(transparent)]
    Apdu(#[from] fidonfc_apdu_core::Error),

    /// The authenticator rejected the command
    #[error("Authenticator returned status {0}")]
    Protocol(StatusWord),

    /// The authenticator answered with a malformed payload
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A request could not be built from the given arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// SELECT of the U2F application failed
    #[error("Not a FIDO authenticator, SELECT returned {0}")]
    NotU2f(StatusWord),
}

impl Error {
    /// Status word reported by the authenticator, if any
    pub const fn status_word(&self) -> Option<StatusWord> {
        match self {
            Self::Protocol(sw) | Self::NotU2f(sw) => Some(*sw),
            Self::Apdu(e) => e.status_word(),
            _ => None,
        }
    }

    /// Check if this error came from the byte transport
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Apdu(e) if e.is_transport())
    }

    /// Check if this error is a capacity overflow
    pub const fn is_buffer_overflow(&self) -> bool {
        matches!(self, Self::Apdu(e) if e.is_buffer_overflow())
    }

    /// Check if the authenticator requires a test of user presence
    pub const fn is_user_presence_required(&self) -> bool {
        matches!(self, Self::Protocol(sw) if sw.is_conditions_not_satisfied())
    }

    /// Check if the authenticator rejected the key handle
    pub const fn is_bad_key_handle(&self) -> bool {
        matches!(self, Self::Protocol(sw) if sw.is_wrong_data())
    }
}
