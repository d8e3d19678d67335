//! The parsed identifier code value.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::checksum::{self, check_char};
use crate::error::{ChecksumScheme, IsbnError};
use crate::scan::{scan_digits, DigitScan};
use crate::{upc, IdentifierKind, IsbnConfig, ValidationLevel};

/// A book identifier code, classified once at construction.
///
/// Valid codes hold their digits (10 stands for `X`) and the canonical text
/// without separators. Invalid codes hold no digits and keep the original
/// input as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "CodeRecord", try_from = "CodeRecord")]
pub struct IdentifierCode {
    kind: IdentifierKind,
    text: String,
    digits: Vec<u8>,
}

impl IdentifierCode {
    /// Parse and classify `input`, applying the validation level.
    ///
    /// At `Strict`, EAN-13 and UPC-A codes are downgraded to Invalid.
    ///
    /// # Examples
    /// ```
    /// use isbn_codes::{IdentifierCode, IdentifierKind, ValidationLevel};
    /// let code = IdentifierCode::parse("0-306-40615-2", ValidationLevel::Strict);
    /// assert_eq!(code.kind(), IdentifierKind::Isbn10);
    /// assert_eq!(code.text(), "0306406152");
    /// ```
    pub fn parse(input: &str, level: ValidationLevel) -> Self {
        Self::build(input, level, true)
    }

    /// Parse using a loaded configuration.
    pub fn parse_with(input: &str, config: &IsbnConfig) -> Self {
        Self::build(input, config.validation_level, config.upc_lookup)
    }

    /// Only ISBN-10 and ISBN-13 count as valid.
    pub fn parse_strict(input: &str) -> Self {
        Self::parse(input, ValidationLevel::Strict)
    }

    /// ISBN-10, ISBN-13, EAN-13 and UPC-A all count as valid.
    pub fn parse_loose(input: &str) -> Self {
        Self::parse(input, ValidationLevel::Loose)
    }

    fn build(input: &str, level: ValidationLevel, upc_lookup: bool) -> Self {
        let code = classify(input, upc_lookup);
        if level.keeps(code.kind) {
            code
        } else {
            debug!(kind = %code.kind, %level, "code rejected by validation level");
            Self::invalid(input)
        }
    }

    pub(crate) fn invalid(input: &str) -> Self {
        Self {
            kind: IdentifierKind::Invalid,
            text: input.to_string(),
            digits: Vec::new(),
        }
    }

    /// Build a valid code from digits already known to verify.
    pub(crate) fn from_digits(kind: IdentifierKind, digits: Vec<u8>) -> Self {
        let text = digits_to_text(&digits);
        Self { kind, text, digits }
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Canonical digits for valid codes, the original input otherwise.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Digit values, 10 for `X`. Empty when invalid.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn is_valid(&self) -> bool {
        self.kind != IdentifierKind::Invalid
    }

    /// Whether this code passes `level`.
    pub fn is_valid_for(&self, level: ValidationLevel) -> bool {
        level.accepts(self.kind)
    }

    pub fn is_kind(&self, kind: IdentifierKind) -> bool {
        self.kind == kind
    }

    /// The check digit as a character, `None` when invalid.
    pub fn check_digit(&self) -> Option<char> {
        self.digits.last().copied().and_then(check_char)
    }
}

impl fmt::Display for IdentifierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub(crate) fn digits_to_text(digits: &[u8]) -> String {
    digits.iter().filter_map(|&d| check_char(d)).collect()
}

fn classify(input: &str, upc_lookup: bool) -> IdentifierCode {
    let digits = match scan_digits(input) {
        DigitScan::Complete(digits) => digits,
        DigitScan::Truncated(partial) => {
            trace!(read = partial.len(), "scan stopped at unexpected character");
            return IdentifierCode::invalid(input);
        }
    };

    // X is only legal as the last digit of a 10-digit code
    if digits.len() != 10 && digits.contains(&10) {
        return IdentifierCode::invalid(input);
    }

    let code = match digits.len() {
        10 if checksum::verifies(&digits, ChecksumScheme::Isbn10) => {
            IdentifierCode::from_digits(IdentifierKind::Isbn10, digits)
        }
        13 if checksum::verifies(&digits, ChecksumScheme::Ean13) => {
            let kind = if digits.starts_with(&[9, 7, 8]) || digits.starts_with(&[9, 7, 9]) {
                IdentifierKind::Isbn13
            } else {
                IdentifierKind::Ean13
            };
            IdentifierCode::from_digits(kind, digits)
        }
        12..=17 if checksum::verifies(&digits[..12], ChecksumScheme::UpcA) => {
            resolve_upc(digits, upc_lookup)
        }
        _ => IdentifierCode::invalid(input),
    };

    debug!(kind = %code.kind, text = %code.text, "classified code");
    code
}

/// UPC-A codes from known book vendors become ISBN-10.
fn resolve_upc(digits: Vec<u8>, upc_lookup: bool) -> IdentifierCode {
    if upc_lookup {
        if let Some(mut body) = upc::isbn10_body(&digits) {
            // body is 9 digits, cannot fail
            if let Ok(check) = checksum::isbn10_checksum(&body) {
                body.push(check);
                debug!(upc = %digits_to_text(&digits), "UPC-A resolved to ISBN-10");
                return IdentifierCode::from_digits(IdentifierKind::Isbn10, body);
            }
        }
    }

    let mut barcode = digits;
    barcode.truncate(12);
    IdentifierCode::from_digits(IdentifierKind::UpcA, barcode)
}

/// Serialized form: kind plus text.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CodeRecord {
    kind: IdentifierKind,
    text: String,
}

impl From<IdentifierCode> for CodeRecord {
    fn from(code: IdentifierCode) -> Self {
        CodeRecord {
            kind: code.kind,
            text: code.text,
        }
    }
}

impl TryFrom<CodeRecord> for IdentifierCode {
    type Error = IsbnError;

    fn try_from(record: CodeRecord) -> Result<Self, Self::Error> {
        if record.kind == IdentifierKind::Invalid {
            return Ok(IdentifierCode::invalid(&record.text));
        }
        let code = IdentifierCode::parse_loose(&record.text);
        if code.kind != record.kind {
            return Err(IsbnError::KindMismatch {
                recorded: record.kind,
                parsed: code.kind,
                text: record.text,
            });
        }
        Ok(code)
    }
}
