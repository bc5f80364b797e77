//! Status word definitions for APDU responses

use std::fmt;

use tracing::Level;

/// Status Word (SW1-SW2) from an APDU response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord {
    /// First status byte (SW1)
    pub sw1: u8,
    /// Second status byte (SW2)
    pub sw2: u8,
}

/// How an exchange should proceed after receiving a status word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 90 00, the payload is complete and valid
    Success,
    /// 61 XX, more data can be fetched with GET RESPONSE.
    ///
    /// The count is only a hint: authenticators under- and over-report it.
    MoreData(u8),
    /// Any other status word, carried unmodified
    Error(StatusWord),
}

impl StatusWord {
    /// Create a new status word
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// Create from the big-endian u16 form
    pub const fn from_u16(status: u16) -> Self {
        let [sw1, sw2] = status.to_be_bytes();
        Self { sw1, sw2 }
    }

    /// Big-endian u16 form, `SW1 << 8 | SW2`
    pub const fn to_u16(&self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }

    /// Classify this status word for the exchange loop
    pub const fn classify(&self) -> StatusClass {
        match (self.sw1, self.sw2) {
            (0x61, remaining) => StatusClass::MoreData(remaining),
            (0x90, 0x00) => StatusClass::Success,
            _ => StatusClass::Error(*self),
        }
    }

    /// 90 00
    pub const fn is_success(&self) -> bool {
        matches!(self.classify(), StatusClass::Success)
    }

    /// 61 XX
    pub const fn is_more_data_available(&self) -> bool {
        matches!(self.classify(), StatusClass::MoreData(_))
    }

    /// 62 XX or 63 XX, processing completed with a warning
    pub const fn is_warning(&self) -> bool {
        matches!(self.sw1, 0x62 | 0x63)
    }

    /// 69 85, conditions of use not satisfied
    pub const fn is_conditions_not_satisfied(&self) -> bool {
        self.to_u16() == common::CONDITIONS_NOT_SATISFIED.to_u16()
    }

    /// 6A 80, incorrect data field
    pub const fn is_wrong_data(&self) -> bool {
        self.to_u16() == common::WRONG_DATA.to_u16()
    }

    /// Level at which an exchange ending in this status is logged
    pub const fn tracing_level(&self) -> Level {
        if self.is_success() || self.is_more_data_available() {
            Level::DEBUG
        } else if self.is_warning() {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}

impl From<(u8, u8)> for StatusWord {
    fn from(tuple: (u8, u8)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl From<u16> for StatusWord {
    fn from(status: u16) -> Self {
        Self::from_u16(status)
    }
}

impl From<StatusWord> for u16 {
    fn from(status: StatusWord) -> Self {
        status.to_u16()
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}", self.sw1, self.sw2)
    }
}

/// Status words with a meaning outside the exchange loop
pub mod common {
    use super::StatusWord;

    /// 90 00
    pub const SUCCESS: StatusWord = StatusWord::new(0x90, 0x00);

    /// 69 85, which U2F authenticators use for "test of user presence required"
    pub const CONDITIONS_NOT_SATISFIED: StatusWord = StatusWord::new(0x69, 0x85);

    /// 6A 80, which U2F authenticators use for a key handle they did not issue
    pub const WRONG_DATA: StatusWord = StatusWord::new(0x6A, 0x80);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_word_from_to_u16() {
        let sw = StatusWord::from_u16(0x9000);
        assert_eq!(sw.sw1, 0x90);
        assert_eq!(sw.sw2, 0x00);
        assert_eq!(sw.to_u16(), 0x9000);
        assert_eq!(u16::from(StatusWord::new(0x6A, 0x80)), 0x6A80);
    }

    #[test]
    fn test_classify() {
        assert_eq!(StatusWord::from_u16(0x9000).classify(), StatusClass::Success);
        assert_eq!(StatusWord::from_u16(0x6105).classify(), StatusClass::MoreData(5));
        assert_eq!(StatusWord::from_u16(0x6100).classify(), StatusClass::MoreData(0));
        assert_eq!(StatusWord::from_u16(0x61FF).classify(), StatusClass::MoreData(0xFF));
        assert_eq!(
            StatusWord::from_u16(0x6985).classify(),
            StatusClass::Error(StatusWord::new(0x69, 0x85))
        );
        // 90 01 is not success, and 0000 is an error rather than a silent pass
        assert_eq!(
            StatusWord::from_u16(0x9001).classify(),
            StatusClass::Error(StatusWord::new(0x90, 0x01))
        );
        assert_eq!(
            StatusWord::from_u16(0x0000).classify(),
            StatusClass::Error(StatusWord::new(0x00, 0x00))
        );
    }

    #[test]
    fn test_every_non_continuation_word_keeps_its_value() {
        for raw in 0..=u16::MAX {
            let sw = StatusWord::from_u16(raw);
            match sw.classify() {
                StatusClass::Success => assert_eq!(raw, 0x9000),
                StatusClass::MoreData(hint) => {
                    assert_eq!(raw >> 8, 0x61);
                    assert_eq!(hint, raw as u8);
                }
                StatusClass::Error(err) => assert_eq!(err.to_u16(), raw),
            }
        }
    }

    #[test]
    fn test_predicates() {
        assert!(common::SUCCESS.is_success());
        assert!(StatusWord::new(0x61, 0x10).is_more_data_available());
        assert!(StatusWord::new(0x62, 0x83).is_warning());
        assert!(StatusWord::new(0x63, 0xC2).is_warning());
        assert!(StatusWord::new(0x69, 0x85).is_conditions_not_satisfied());
        assert!(StatusWord::new(0x6A, 0x80).is_wrong_data());
        assert!(!StatusWord::new(0x6A, 0x82).is_wrong_data());
    }

    #[test]
    fn test_tracing_level() {
        assert_eq!(common::SUCCESS.tracing_level(), Level::DEBUG);
        assert_eq!(StatusWord::new(0x61, 0x00).tracing_level(), Level::DEBUG);
        assert_eq!(StatusWord::new(0x63, 0x00).tracing_level(), Level::INFO);
        assert_eq!(common::WRONG_DATA.tracing_level(), Level::WARN);
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusWord::new(0x6A, 0x82).to_string(), "6A82");
    }
}
