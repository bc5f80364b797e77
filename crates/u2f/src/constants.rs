//! Identifiers, lengths and instruction bytes of the U2F raw message format

/// U2F application identifier
pub const U2F_AID: &[u8] = b"\xA0\x00\x00\x06\x47\x2F\x00\x01";

/// Length of a challenge or application parameter
pub const PARAMETER_LEN: usize = 32;

/// Length of an uncompressed P-256 user public key
pub const PUBLIC_KEY_LEN: usize = 65;

/// Largest key handle an authenticate request can carry
pub const MAX_KEY_HANDLE_LEN: usize = u8::MAX as usize;

/// Reserved byte that starts every registration response
pub const REGISTRATION_RESERVED: u8 = 0x05;

/// Version string a U2F authenticator returns on SELECT
pub const VERSION_U2F_V2: &[u8] = b"U2F_V2";

/// Version string a FIDO2 authenticator returns on SELECT
pub const VERSION_FIDO_2_0: &[u8] = b"FIDO_2_0";

/// Instruction bytes
pub mod ins {
    /// U2F_REGISTER
    pub const REGISTER: u8 = 0x01;
    /// U2F_AUTHENTICATE
    pub const AUTHENTICATE: u8 = 0x02;
    /// CTAP2 message, used for the authenticatorGetInfo probe
    pub const CTAP2_MSG: u8 = 0x10;
}

/// Class bytes
pub mod cla {
    /// Interindustry class used by the U2F commands
    pub const ISO: u8 = 0x00;
    /// Proprietary class of the CTAP2 message command
    pub const PROPRIETARY: u8 = 0x80;
}

/// Status words with a U2F specific meaning
pub mod status {
    use fidonfc_apdu_core::StatusWord;
    use fidonfc_apdu_core::response::status::common;

    /// Test of user presence required; also the "key handle is valid" answer
    /// to a check-only authenticate
    pub const CONDITIONS_NOT_SATISFIED: StatusWord = common::CONDITIONS_NOT_SATISFIED;

    /// Bad key handle
    pub const WRONG_DATA: StatusWord = common::WRONG_DATA;
}
