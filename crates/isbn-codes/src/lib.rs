// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! Book identifier codes: parsing, validation, conversion and comparison
//!
//! This crate provides tools for working with the codes printed on books:
//! - ISBN-10, ISBN-13, EAN-13 and UPC-A parsing with checksum validation
//! - ISBN-10 ⇄ ISBN-13 conversion
//! - UPC-A to ISBN-10 resolution for known paperback publishers
//! - Equality across ISBN-10 and ISBN-13 forms of the same book
//! - Code extraction from free text
//!
//! # Example
//!
//! ```
//! use isbn_codes::{IdentifierCode, IdentifierKind};
//!
//! let ten = IdentifierCode::parse_strict("0-306-40615-2");
//! let thirteen = IdentifierCode::parse_strict("978-0-306-40615-7");
//! assert_eq!(ten, thirteen);
//! assert_eq!(ten.to_kind(IdentifierKind::Isbn13).unwrap(), thirteen.text());
//! ```

pub mod checksum;
pub mod code;
pub mod config;
pub mod convert;
pub mod equality;
pub mod error;
pub mod extract;
pub mod kind;
pub mod scan;
pub mod upc;

pub use checksum::{check_char, ean13_checksum, isbn10_checksum, upca_checksum};
pub use code::IdentifierCode;
pub use config::IsbnConfig;
pub use error::{ChecksumScheme, IsbnError, Result};
pub use extract::{extract_codes, extract_isbns, ExtractedCode};
pub use kind::{IdentifierKind, ValidationLevel};
pub use scan::{scan_digits, DigitScan};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// Classify a code at the given validation level.
#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn identifier_kind_ffi(text: String, level: ValidationLevel) -> IdentifierKind {
    IdentifierCode::parse(&text, level).kind()
}

/// Convert a code to the target kind, `None` when undefined.
#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn convert_code_ffi(text: String, target: IdentifierKind) -> Option<String> {
    IdentifierCode::parse_loose(&text).to_kind(target).ok()
}

/// Whether two codes name the same book.
#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn codes_equal_ffi(a: String, b: String) -> bool {
    IdentifierCode::parse_loose(&a) == IdentifierCode::parse_loose(&b)
}
