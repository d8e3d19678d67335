//! Error types for isbn-codes.
//!
//! Unparseable input is not an error: it becomes an
//! [`IdentifierKind::Invalid`](crate::IdentifierKind::Invalid) code.
//! Errors here signal caller mistakes.

use thiserror::Error;

use crate::IdentifierKind;

/// Checksum scheme named in precondition failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumScheme {
    Isbn10,
    Ean13,
    UpcA,
}

impl std::fmt::Display for ChecksumScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChecksumScheme::Isbn10 => "ISBN-10",
            ChecksumScheme::Ean13 => "EAN-13",
            ChecksumScheme::UpcA => "UPC-A",
        };
        f.write_str(name)
    }
}

/// Errors from isbn-codes operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// The requested conversion is not defined for this pair of kinds.
    #[error("cannot convert kind {from} to kind {to}")]
    Conversion {
        from: IdentifierKind,
        to: IdentifierKind,
    },

    /// A checksum function was handed a digit sequence of the wrong length.
    #[error("{scheme} checksum called with {len} digits")]
    Precondition { scheme: ChecksumScheme, len: usize },

    /// A checksum body held a value outside 0-9.
    #[error("{scheme} checksum got digit value {value} at position {position}")]
    DigitOutOfRange {
        scheme: ChecksumScheme,
        position: usize,
        value: u8,
    },

    /// A serialized code's recorded kind disagrees with its text.
    #[error("recorded kind {recorded} does not match {text:?}, which parses as {parsed}")]
    KindMismatch {
        recorded: IdentifierKind,
        parsed: IdentifierKind,
        text: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for isbn-codes operations.
pub type Result<T> = std::result::Result<T, IsbnError>;
