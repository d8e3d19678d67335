//! Digit scanning of raw input.

/// Result of scanning input text into digit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitScan {
    /// Every significant character was a digit (or a well-placed `X`)
    Complete(Vec<u8>),
    /// Scanning stopped at an unexpected character; holds what was read so far
    Truncated(Vec<u8>),
}

impl DigitScan {
    pub fn digits(&self) -> &[u8] {
        match self {
            DigitScan::Complete(d) | DigitScan::Truncated(d) => d,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DigitScan::Complete(_))
    }
}

/// Whether a character is a separator dropped before scanning.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Strip separators from the input.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !is_separator(*c)).collect()
}

/// Scan text into digit values.
///
/// Whitespace and hyphens are skipped. `X`/`x` counts as 10 only as the
/// tenth digit, and nothing may follow it.
pub fn scan_digits(input: &str) -> DigitScan {
    let mut digits = Vec::with_capacity(17);
    let mut seen_x = false;

    for c in input.chars().filter(|c| !is_separator(*c)) {
        if seen_x {
            return DigitScan::Truncated(digits);
        }
        match c {
            '0'..='9' => digits.push(c as u8 - b'0'),
            'X' | 'x' if digits.len() == 9 => {
                digits.push(10);
                seen_x = true;
            }
            _ => return DigitScan::Truncated(digits),
        }
    }

    DigitScan::Complete(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_plain_digits() {
        assert_eq!(
            scan_digits("0306406152"),
            DigitScan::Complete(vec![0, 3, 0, 6, 4, 0, 6, 1, 5, 2])
        );
    }

    #[test]
    fn skips_separators() {
        assert_eq!(scan_digits(" 0-306 40615-2\t"), scan_digits("0306406152"));
    }

    #[test]
    fn x_as_tenth_digit() {
        let scan = scan_digits("080442957x");
        assert!(scan.is_complete());
        assert_eq!(scan.digits()[9], 10);
    }

    #[test]
    fn x_elsewhere_truncates() {
        let scan = scan_digits("978030640615X");
        assert_eq!(scan, DigitScan::Truncated(vec![9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5]));
        assert!(!scan_digits("X306406152").is_complete());
    }

    #[test]
    fn nothing_after_x() {
        assert!(!scan_digits("080442957X1").is_complete());
    }

    #[test]
    fn letters_truncate() {
        assert_eq!(scan_digits("12a45"), DigitScan::Truncated(vec![1, 2]));
    }

    #[test]
    fn empty_input_is_complete_and_empty() {
        assert_eq!(scan_digits("  - "), DigitScan::Complete(vec![]));
    }

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize(" 978-0-306 "), "9780306");
    }
}
