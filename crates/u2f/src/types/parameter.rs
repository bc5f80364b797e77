use derive_more::{AsRef, Deref, From, Into};

use crate::constants::PARAMETER_LEN;
use crate::{Error, Result};

/// Longest string accepted by [`Parameter::from_plain`]
pub const PLAIN_MAX_LEN: usize = 16;

/// 32 byte challenge or application parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRef, Deref, From, Into)]
pub struct Parameter([u8; PARAMETER_LEN]);

impl Parameter {
    /// Wrap an exact 32 byte value
    pub const fn new(bytes: [u8; PARAMETER_LEN]) -> Self {
        Self(bytes)
    }

    /// Build from a slice that must be exactly 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidArgument("parameter must be exactly 32 bytes"))
    }

    /// Build from 64 hex digits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes =
            hex::decode(hex.trim()).map_err(|_| Error::InvalidArgument("parameter is not hex"))?;
        Self::from_slice(&bytes)
    }

    /// Build from a short ASCII string, zero padded to 32 bytes
    pub fn from_plain(text: &str) -> Result<Self> {
        if !text.is_ascii() {
            return Err(Error::InvalidArgument("plain parameter must be ASCII"));
        }
        if text.len() > PLAIN_MAX_LEN {
            return Err(Error::InvalidArgument(
                "plain parameter must be at most 16 characters",
            ));
        }

        let mut bytes = [0u8; PARAMETER_LEN];
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        Ok(Self(bytes))
    }

    /// Raw bytes
    pub const fn as_bytes(&self) -> &[u8; PARAMETER_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Parameter {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_slice(value)
    }
}
