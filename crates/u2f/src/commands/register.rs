use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::{PARAMETER_LEN, cla, ins};
use crate::types::Parameter;

/// P1 of U2F_REGISTER
const REGISTER_P1: u8 = 0x03;

/// U2F_REGISTER: challenge parameter followed by application parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCommand {
    data: Bytes,
}

impl RegisterCommand {
    /// Build a registration request
    pub fn new(challenge: &Parameter, application: &Parameter) -> Self {
        let mut data = BytesMut::with_capacity(2 * PARAMETER_LEN);
        data.put_slice(challenge.as_bytes());
        data.put_slice(application.as_bytes());
        Self {
            data: data.freeze(),
        }
    }

    /// Challenge parameter
    pub fn challenge(&self) -> &[u8] {
        &self.data[..PARAMETER_LEN]
    }

    /// Application parameter
    pub fn application(&self) -> &[u8] {
        &self.data[PARAMETER_LEN..]
    }
}

u2f_apdu! {
    RegisterCommand {
        cla: cla::ISO,
        ins: ins::REGISTER,
        p1: |_| REGISTER_P1,
        data: |cmd| &cmd.data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fidonfc_apdu_core::ApduCommand;

    #[test]
    fn test_register_layout() {
        let cmd = RegisterCommand::new(&Parameter::new([0x11; 32]), &Parameter::new([0x22; 32]));
        let raw = cmd.to_bytes();

        assert_eq!(raw.len(), 4 + 1 + 64 + 1);
        assert_eq!(&raw[..5], &[0x00, 0x01, 0x03, 0x00, 0x40]);
        assert!(raw[5..37].iter().all(|&b| b == 0x11));
        assert!(raw[37..69].iter().all(|&b| b == 0x22));
        assert_eq!(raw[69], 0x00);

        assert_eq!(cmd.challenge(), &[0x11; 32]);
        assert_eq!(cmd.application(), &[0x22; 32]);
    }
}
