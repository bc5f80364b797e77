use crate::constants::{cla, ins};

/// CTAP2 command code of authenticatorGetInfo
const CTAP2_GET_INFO: u8 = 0x04;

/// authenticatorGetInfo wrapped in a CTAP2 message APDU
///
/// Only U2F authenticators that also implement FIDO2 answer `90 00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetInfoCommand;

u2f_apdu! {
    GetInfoCommand {
        cla: cla::PROPRIETARY,
        ins: ins::CTAP2_MSG,
        p1: |_| 0x00,
        data: |_| &[CTAP2_GET_INFO],
    }
}
