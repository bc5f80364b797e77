use bytes::{BufMut, Bytes, BytesMut};
use derive_more::Display;

use crate::constants::{MAX_KEY_HANDLE_LEN, PARAMETER_LEN, cla, ins};
use crate::types::Parameter;
use crate::{Error, Result};

/// Authenticate mode, sent as P1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[repr(u8)]
pub enum ControlByte {
    /// Require a test of user presence and sign
    #[display("enforce-user-presence-and-sign")]
    EnforceUserPresenceAndSign = 0x03,
    /// Only check whether the key handle belongs to this authenticator
    #[display("check-only")]
    CheckOnly = 0x07,
    /// Sign without requiring user presence
    #[default]
    #[display("dont-enforce-user-presence-and-sign")]
    DontEnforceUserPresenceAndSign = 0x08,
}

impl From<ControlByte> for u8 {
    fn from(control: ControlByte) -> Self {
        control as Self
    }
}

impl TryFrom<u8> for ControlByte {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x03 => Ok(Self::EnforceUserPresenceAndSign),
            0x07 => Ok(Self::CheckOnly),
            0x08 => Ok(Self::DontEnforceUserPresenceAndSign),
            _ => Err(Error::InvalidArgument("control byte must be 0x03, 0x07 or 0x08")),
        }
    }
}

/// U2F_AUTHENTICATE: challenge, application, key handle length and key handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticateCommand {
    control: ControlByte,
    data: Bytes,
}

impl AuthenticateCommand {
    /// Build an authentication request.
    ///
    /// Key handles longer than 255 bytes cannot be encoded and are rejected.
    pub fn new(
        control: ControlByte,
        challenge: &Parameter,
        application: &Parameter,
        key_handle: &[u8],
    ) -> Result<Self> {
        if key_handle.len() > MAX_KEY_HANDLE_LEN {
            return Err(Error::InvalidArgument("key handle must be at most 255 bytes"));
        }

        let mut data = BytesMut::with_capacity(2 * PARAMETER_LEN + 1 + key_handle.len());
        data.put_slice(challenge.as_bytes());
        data.put_slice(application.as_bytes());
        data.put_u8(key_handle.len() as u8);
        data.put_slice(key_handle);

        Ok(Self {
            control,
            data: data.freeze(),
        })
    }

    /// Authenticate mode
    pub const fn control(&self) -> ControlByte {
        self.control
    }

    /// Challenge parameter
    pub fn challenge(&self) -> &[u8] {
        &self.data[..PARAMETER_LEN]
    }

    /// Application parameter
    pub fn application(&self) -> &[u8] {
        &self.data[PARAMETER_LEN..2 * PARAMETER_LEN]
    }

    /// Key handle
    pub fn key_handle(&self) -> &[u8] {
        &self.data[2 * PARAMETER_LEN + 1..]
    }
}

u2f_apdu! {
    AuthenticateCommand {
        cla: cla::ISO,
        ins: ins::AUTHENTICATE,
        p1: |cmd| cmd.control.into(),
        data: |cmd| &cmd.data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fidonfc_apdu_core::ApduCommand;
    use hex_literal::hex;

    fn params() -> (Parameter, Parameter) {
        (Parameter::new([0xCC; 32]), Parameter::new([0xAA; 32]))
    }

    #[test]
    fn test_control_byte_values() {
        assert_eq!(u8::from(ControlByte::default()), 0x08);
        assert_eq!(ControlByte::try_from(0x03).unwrap(), ControlByte::EnforceUserPresenceAndSign);
        assert_eq!(ControlByte::try_from(0x07).unwrap(), ControlByte::CheckOnly);

        for value in (0..=u8::MAX).filter(|v| ![0x03, 0x07, 0x08].contains(v)) {
            assert!(matches!(ControlByte::try_from(value), Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_authenticate_layout() {
        let (challenge, application) = params();
        let cmd = AuthenticateCommand::new(
            ControlByte::EnforceUserPresenceAndSign,
            &challenge,
            &application,
            &hex!("01020304"),
        )
        .unwrap();
        let raw = cmd.to_bytes();

        // 64 parameter bytes, the length byte and the handle
        assert_eq!(&raw[..5], &hex!("0002030045"));
        assert_eq!(raw.len(), 5 + 69 + 1);
        assert_eq!(raw[69], 0x04);
        assert_eq!(&raw[70..74], &hex!("01020304"));
        assert_eq!(cmd.key_handle(), &hex!("01020304"));
        assert_eq!(cmd.challenge(), &[0xCC; 32]);
        assert_eq!(cmd.application(), &[0xAA; 32]);
    }

    #[test]
    fn test_empty_key_handle() {
        let (challenge, application) = params();
        let cmd =
            AuthenticateCommand::new(ControlByte::CheckOnly, &challenge, &application, &[])
                .unwrap();
        assert_eq!(cmd.data().map(<[u8]>::len), Some(65));
        assert!(cmd.key_handle().is_empty());
    }

    #[test]
    fn test_long_key_handle_uses_extended_length() {
        let (challenge, application) = params();
        let cmd =
            AuthenticateCommand::new(ControlByte::default(), &challenge, &application, &[0x5A; 255])
                .unwrap();
        assert!(cmd.is_extended());

        let raw = cmd.to_bytes();
        // 64 + 1 + 255 = 320 = 0x0140
        assert_eq!(&raw[..7], &hex!("00020800000140"));
        assert_eq!(raw[4 + 3 + 64], 0xFF);
    }

    #[test]
    fn test_key_handle_too_long() {
        let (challenge, application) = params();
        let result =
            AuthenticateCommand::new(ControlByte::default(), &challenge, &application, &[0; 256]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
