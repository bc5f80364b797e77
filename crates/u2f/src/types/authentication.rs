use bytes::Bytes;

use crate::error::DecodeError;

/// Presence flag and counter
const HEADER_LEN: usize = 1 + 4;

/// Decoded U2F_AUTHENTICATE response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResponse {
    /// Whether the user was verified present
    pub user_presence: bool,
    /// Signature counter
    pub counter: u32,
    /// Signature over the application, presence, counter and challenge
    pub signature: Bytes,
}

impl AuthenticationResponse {
    /// Decode an assembled authentication payload
    pub fn decode(payload: &Bytes) -> Result<Self, DecodeError> {
        let Some(&[presence, c0, c1, c2, c3]) = payload.first_chunk::<HEADER_LEN>() else {
            return Err(DecodeError::truncated(HEADER_LEN, payload.len()));
        };

        Ok(Self {
            user_presence: presence != 0,
            counter: u32::from_be_bytes([c0, c1, c2, c3]),
            signature: payload.slice(HEADER_LEN..),
        })
    }
}

impl TryFrom<Bytes> for AuthenticationResponse {
    type Error = DecodeError;

    fn try_from(payload: Bytes) -> Result<Self, Self::Error> {
        Self::decode(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_decode() {
        let payload = Bytes::from_static(&hex!("0100000007BEEF"));
        let response = AuthenticationResponse::decode(&payload).unwrap();

        assert!(response.user_presence);
        assert_eq!(response.counter, 7);
        assert_eq!(response.signature.as_ref(), &hex!("BEEF"));
    }

    #[test]
    fn test_counter_is_big_endian() {
        let payload = Bytes::from_static(&hex!("00010203 04 30"));
        let response = AuthenticationResponse::try_from(payload).unwrap();

        assert!(!response.user_presence);
        assert_eq!(response.counter, 0x0102_0304);
    }

    #[test]
    fn test_header_only() {
        let payload = Bytes::from_static(&hex!("05FFFFFFFF"));
        let response = AuthenticationResponse::decode(&payload).unwrap();

        assert!(response.user_presence);
        assert_eq!(response.counter, u32::MAX);
        assert!(response.signature.is_empty());
    }

    #[test]
    fn test_truncated() {
        let payload = Bytes::from_static(&hex!("01000000"));
        assert_eq!(
            AuthenticationResponse::decode(&payload),
            Err(DecodeError::truncated(5, 4))
        );
    }
}
