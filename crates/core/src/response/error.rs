//! Error types specific to APDU responses

/// Error for APDU response framing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    /// Response shorter than a status word
    #[error("Incomplete response: {0} bytes, a status word needs 2")]
    Incomplete(usize),
}
