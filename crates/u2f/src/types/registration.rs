use bytes::{BufMut, Bytes, BytesMut};

use crate::commands::{AuthenticateCommand, ControlByte};
use crate::constants::{PUBLIC_KEY_LEN, REGISTRATION_RESERVED};
use crate::der::DerLength;
use crate::error::{DecodeError, Error};
use crate::types::Parameter;

/// Reserved byte, public key and the key handle length byte
const FIXED_PREFIX_LEN: usize = 1 + PUBLIC_KEY_LEN + 1;

/// Decoded U2F_REGISTER response
///
/// Every field is a view into the payload it was decoded from, and the four
/// fields plus the reserved byte cover that payload exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResponse {
    /// Uncompressed user public key, 65 bytes
    pub public_key: Bytes,
    /// Key handle issued for this credential
    pub key_handle: Bytes,
    /// DER attestation certificate, header included
    pub certificate: Bytes,
    /// Attestation signature
    pub signature: Bytes,
}

impl RegistrationResponse {
    /// Decode an assembled registration payload
    pub fn decode(payload: &Bytes) -> Result<Self, DecodeError> {
        let len = payload.len();
        if len < FIXED_PREFIX_LEN {
            return Err(DecodeError::truncated(FIXED_PREFIX_LEN, len));
        }
        if payload[0] != REGISTRATION_RESERVED {
            return Err(DecodeError::UnexpectedFormat(
                "registration response must start with 0x05",
            ));
        }

        let public_key = payload.slice(1..1 + PUBLIC_KEY_LEN);

        let cert_start = FIXED_PREFIX_LEN + usize::from(payload[FIXED_PREFIX_LEN - 1]);
        if cert_start > len {
            return Err(DecodeError::truncated(cert_start, len));
        }
        let key_handle = payload.slice(FIXED_PREFIX_LEN..cert_start);

        let der = DerLength::parse(&payload[cert_start..]).map_err(|e| match e {
            DecodeError::Truncated { needed, .. } => {
                DecodeError::truncated(cert_start + needed, len)
            }
            e => e,
        })?;
        let cert_end = cert_start.saturating_add(der.total());
        if cert_end > len {
            return Err(DecodeError::truncated(cert_end, len));
        }
        let certificate = payload.slice(cert_start..cert_end);

        let signature = payload.slice(cert_end..);
        if signature.is_empty() {
            return Err(DecodeError::UnexpectedFormat(
                "registration response has no signature",
            ));
        }

        Ok(Self {
            public_key,
            key_handle,
            certificate,
            signature,
        })
    }

    /// Reassemble the payload this response was decoded from
    ///
    /// Fails when the key handle no longer fits its one-byte length prefix.
    pub fn to_bytes(&self) -> crate::Result<Bytes> {
        let key_handle_len = u8::try_from(self.key_handle.len())
            .map_err(|_| Error::InvalidArgument("key handle must be at most 255 bytes"))?;
        let len = FIXED_PREFIX_LEN
            + self.key_handle.len()
            + self.certificate.len()
            + self.signature.len();
        let mut buf = BytesMut::with_capacity(len);
        buf.put_u8(REGISTRATION_RESERVED);
        buf.put_slice(&self.public_key);
        buf.put_u8(key_handle_len);
        buf.put_slice(&self.key_handle);
        buf.put_slice(&self.certificate);
        buf.put_slice(&self.signature);
        Ok(buf.freeze())
    }

    /// Build the authenticate request for the credential just registered
    pub fn authenticate_command(
        &self,
        control: ControlByte,
        challenge: &Parameter,
        application: &Parameter,
    ) -> crate::Result<AuthenticateCommand> {
        AuthenticateCommand::new(control, challenge, application, &self.key_handle)
    }
}

impl TryFrom<Bytes> for RegistrationResponse {
    type Error = DecodeError;

    fn try_from(payload: Bytes) -> Result<Self, Self::Error> {
        Self::decode(&payload)
    }
}
