//! Minimal DER length decoding
//!
//! Only the tag byte and length octets are read, enough to find where an
//! element ends. The tag and content are not validated.

use crate::error::DecodeError;

/// Widest long-form length accepted, in octets
const MAX_LENGTH_OCTETS: usize = 4;

/// Header and content sizes of one DER element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerLength {
    /// Tag byte plus length octets
    pub header: usize,
    /// Content length announced by the header
    pub content: usize,
}

impl DerLength {
    /// Whole element size, saturating on absurd lengths so bounds checks fail
    pub const fn total(&self) -> usize {
        self.header.saturating_add(self.content)
    }

    /// Read the header of the element starting at `input[0]`
    pub fn parse(input: &[u8]) -> Result<Self, DecodeError> {
        let [_tag, first, rest @ ..] = input else {
            return Err(DecodeError::truncated(2, input.len()));
        };

        if *first < 0x80 {
            return Ok(Self {
                header: 2,
                content: usize::from(*first),
            });
        }

        let octets = usize::from(first & 0x7F);
        if octets == 0 || octets > MAX_LENGTH_OCTETS {
            return Err(DecodeError::UnexpectedFormat("unsupported DER length encoding"));
        }
        let Some(length) = rest.get(..octets) else {
            return Err(DecodeError::truncated(2 + octets, input.len()));
        };

        let content = length
            .iter()
            .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));

        Ok(Self {
            header: 2 + octets,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_short_form() {
        let len = DerLength::parse(&hex!("3005")).unwrap();
        assert_eq!(len, DerLength { header: 2, content: 5 });
        assert_eq!(len.total(), 7);
    }

    #[test]
    fn test_long_form_one_octet() {
        let len = DerLength::parse(&hex!("30817F")).unwrap();
        assert_eq!(len, DerLength { header: 3, content: 127 });
        assert_eq!(len.total(), 130);
    }

    #[test]
    fn test_long_form_two_octets() {
        let len = DerLength::parse(&hex!("30820100")).unwrap();
        assert_eq!(len, DerLength { header: 4, content: 256 });
        assert_eq!(len.total(), 260);
    }

    #[test]
    fn test_long_form_four_octets() {
        let len = DerLength::parse(&hex!("308400010000")).unwrap();
        assert_eq!(len, DerLength { header: 6, content: 65_536 });
    }

    #[test]
    fn test_unsupported_encodings() {
        // indefinite length
        assert_eq!(
            DerLength::parse(&hex!("3080")),
            Err(DecodeError::UnexpectedFormat("unsupported DER length encoding"))
        );
        assert!(matches!(
            DerLength::parse(&hex!("30850000000001")),
            Err(DecodeError::UnexpectedFormat(_))
        ));
    }

    #[test]
    fn test_truncated_header() {
        assert_eq!(DerLength::parse(&[]), Err(DecodeError::truncated(2, 0)));
        assert_eq!(DerLength::parse(&hex!("30")), Err(DecodeError::truncated(2, 1)));
        assert_eq!(
            DerLength::parse(&hex!("308201")),
            Err(DecodeError::truncated(4, 3))
        );
    }
}
