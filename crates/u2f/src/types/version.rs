use bytes::Bytes;
use derive_more::Display;

use crate::constants::{VERSION_FIDO_2_0, VERSION_U2F_V2};

/// Protocol version an authenticator reports when selected
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AuthenticatorVersion {
    /// `U2F_V2`
    #[display("U2F_V2")]
    U2fV2,
    /// `FIDO_2_0`
    #[display("FIDO_2_0")]
    Fido2,
    /// Anything else, kept verbatim
    #[display("{}", hex::encode_upper(_0))]
    Other(Bytes),
}

impl AuthenticatorVersion {
    /// Whether the authenticator speaks the U2F raw message format
    pub const fn is_u2f(&self) -> bool {
        matches!(self, Self::U2fV2)
    }
}

impl From<Bytes> for AuthenticatorVersion {
    fn from(payload: Bytes) -> Self {
        match payload.as_ref() {
            VERSION_U2F_V2 => Self::U2fV2,
            VERSION_FIDO_2_0 => Self::Fido2,
            _ => Self::Other(payload),
        }
    }
}

/// What an authenticator reports about itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatorInfo {
    /// Version string from SELECT
    pub version: AuthenticatorVersion,
    /// Raw authenticatorGetInfo reply, `None` when FIDO2 is not supported
    pub fido2_info: Option<Bytes>,
}

impl AuthenticatorInfo {
    /// Whether the authenticator answered the FIDO2 probe
    pub const fn supports_fido2(&self) -> bool {
        self.fido2_info.is_some()
    }
}
