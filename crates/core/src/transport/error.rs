//! Failures reported by the byte transport

/// Transport error type
///
/// The exchange never retries on these and discards any partial response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The frame could not be sent or its reply was lost
    #[error("Failed to transmit data")]
    Transmission,

    /// No card answered when the field was powered
    #[error("No card present")]
    NoCard,

    /// Reader driver error code
    #[error("Driver error code: {0}")]
    Driver(i32),

    /// The card did not answer in time
    #[error("Operation timed out")]
    Timeout,

    /// Any other transport specific failure
    #[error("{0}")]
    Other(String),
}
