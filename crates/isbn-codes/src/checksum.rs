//! Checksum calculation for ISBN-10, EAN-13 (ISBN-13) and UPC-A.
//!
//! Each function takes the digit sequence with or without its check digit
//! and returns the expected check digit. ISBN-10 may return 10, rendered
//! as `X`.

use crate::error::{ChecksumScheme, IsbnError, Result};

/// Expected ISBN-10 check digit for a 9 or 10 digit sequence.
pub fn isbn10_checksum(digits: &[u8]) -> Result<u8> {
    require_len(digits, ChecksumScheme::Isbn10, 9)?;
    require_decimal(&digits[..9], ChecksumScheme::Isbn10)?;

    // Weights 10 down to 2 over the body
    let sum: u32 = digits[..9]
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (10 - i as u32))
        .sum();

    Ok(((11 - sum % 11) % 11) as u8)
}

/// Expected EAN-13 / ISBN-13 check digit for a 12 or 13 digit sequence.
pub fn ean13_checksum(digits: &[u8]) -> Result<u8> {
    require_len(digits, ChecksumScheme::Ean13, 12)?;
    require_decimal(&digits[..12], ChecksumScheme::Ean13)?;
    Ok(mod10(&digits[..12], 1, 3))
}

/// Expected UPC-A check digit for an 11 or 12 digit sequence.
pub fn upca_checksum(digits: &[u8]) -> Result<u8> {
    require_len(digits, ChecksumScheme::UpcA, 11)?;
    require_decimal(&digits[..11], ChecksumScheme::UpcA)?;
    Ok(mod10(&digits[..11], 3, 1))
}

/// Render a check value: 0-9 as the digit, 10 as `X`, anything else `None`.
pub fn check_char(value: u8) -> Option<char> {
    match value {
        10 => Some('X'),
        d => char::from_digit(u32::from(d), 10),
    }
}

/// Whether the last digit of a full-length sequence matches its checksum.
pub(crate) fn verifies(digits: &[u8], scheme: ChecksumScheme) -> bool {
    let (body, expected) = match scheme {
        ChecksumScheme::Isbn10 => (9, isbn10_checksum(digits)),
        ChecksumScheme::Ean13 => (12, ean13_checksum(digits)),
        ChecksumScheme::UpcA => (11, upca_checksum(digits)),
    };
    match expected {
        Ok(check) => digits.len() == body + 1 && digits[body] == check,
        Err(_) => false,
    }
}

/// Alternating-weight mod 10 sum, first weight applied at position 0.
fn mod10(body: &[u8], even_weight: u32, odd_weight: u32) -> u8 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let weight = if i % 2 == 0 { even_weight } else { odd_weight };
            u32::from(d) * weight
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

fn require_len(digits: &[u8], scheme: ChecksumScheme, body: usize) -> Result<()> {
    if digits.len() == body || digits.len() == body + 1 {
        Ok(())
    } else {
        Err(IsbnError::Precondition {
            scheme,
            len: digits.len(),
        })
    }
}

fn require_decimal(body: &[u8], scheme: ChecksumScheme) -> Result<()> {
    match body.iter().position(|&d| d > 9) {
        Some(position) => Err(IsbnError::DigitOutOfRange {
            scheme,
            position,
            value: body[position],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.chars()
            .map(|c| if c == 'X' { 10 } else { c.to_digit(10).unwrap() as u8 })
            .collect()
    }

    #[test]
    fn isbn10_known_values() {
        assert_eq!(isbn10_checksum(&digits("030640615")), Ok(2));
        assert_eq!(isbn10_checksum(&digits("0306406152")), Ok(2));
        assert_eq!(isbn10_checksum(&digits("080442957")), Ok(10));
    }

    #[test]
    fn isbn10_remainder_zero_maps_to_zero() {
        assert_eq!(isbn10_checksum(&digits("000000000")), Ok(0));
        // weighted sum 11
        assert_eq!(isbn10_checksum(&digits("000000031")), Ok(0));
    }

    #[test]
    fn ean13_known_values() {
        assert_eq!(ean13_checksum(&digits("978030640615")), Ok(7));
        assert_eq!(ean13_checksum(&digits("9780321125217")), Ok(7));
        assert_eq!(ean13_checksum(&digits("400638133393")), Ok(1));
    }

    #[test]
    fn upca_known_values() {
        assert_eq!(upca_checksum(&digits("03600029145")), Ok(2));
        assert_eq!(upca_checksum(&digits("036000291452")), Ok(2));
    }

    #[test]
    fn wrong_length_is_precondition_error() {
        assert_eq!(
            isbn10_checksum(&digits("12345")),
            Err(IsbnError::Precondition {
                scheme: ChecksumScheme::Isbn10,
                len: 5
            })
        );
        assert!(ean13_checksum(&digits("12345678901")).is_err());
        assert!(upca_checksum(&digits("1234567890123")).is_err());
    }

    #[test]
    fn verifies_full_sequences_only() {
        assert!(verifies(&digits("0306406152"), ChecksumScheme::Isbn10));
        assert!(!verifies(&digits("0306406151"), ChecksumScheme::Isbn10));
        assert!(!verifies(&digits("030640615"), ChecksumScheme::Isbn10));
        assert!(verifies(&digits("080442957X"), ChecksumScheme::Isbn10));
        assert!(verifies(&digits("9780306406157"), ChecksumScheme::Ean13));
        assert!(verifies(&digits("036000291452"), ChecksumScheme::UpcA));
    }

    #[test]
    fn check_char_renders_x() {
        assert_eq!(check_char(10), Some('X'));
        assert_eq!(check_char(7), Some('7'));
    }

    #[test]
    fn check_char_rejects_out_of_range() {
        assert_eq!(check_char(11), None);
        assert_eq!(check_char(250), None);
        assert_eq!(check_char(255), None);
    }

    #[test]
    fn body_digits_above_nine_are_rejected() {
        let mut body = digits("03064061");
        body.push(250);
        assert_eq!(
            isbn10_checksum(&body),
            Err(IsbnError::DigitOutOfRange {
                scheme: ChecksumScheme::Isbn10,
                position: 8,
                value: 250
            })
        );
        assert!(ean13_checksum(&[9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 10, 5]).is_err());
        assert!(upca_checksum(&[0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 200]).is_err());
        // ISBN-10 check position may hold X
        assert_eq!(isbn10_checksum(&digits("080442957X")), Ok(10));
    }
}
