//! Error types specific to APDU commands

/// Error for APDU command construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Data field longer than an extended APDU can carry
    #[error("Data too long: {0} bytes (max {1})")]
    DataTooLong(usize, usize),
}
