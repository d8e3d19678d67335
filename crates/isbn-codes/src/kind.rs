//! Code kinds and validation levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The format a parsed code was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Input that could not be classified, or was rejected by the validation level
    Invalid,
    /// 10-digit ISBN, last digit may be `X`
    Isbn10,
    /// 13-digit ISBN (EAN-13 with a 978 or 979 prefix)
    Isbn13,
    /// 13-digit EAN that is not an ISBN
    Ean13,
    /// 12-digit UPC-A
    UpcA,
}

impl IdentifierKind {
    /// Get all kinds
    pub fn all() -> &'static [IdentifierKind] {
        &[
            IdentifierKind::Invalid,
            IdentifierKind::Isbn10,
            IdentifierKind::Isbn13,
            IdentifierKind::Ean13,
            IdentifierKind::UpcA,
        ]
    }

    /// Number of digits a code of this kind carries, `None` for Invalid.
    pub fn digit_count(self) -> Option<usize> {
        match self {
            IdentifierKind::Invalid => None,
            IdentifierKind::Isbn10 => Some(10),
            IdentifierKind::Isbn13 | IdentifierKind::Ean13 => Some(13),
            IdentifierKind::UpcA => Some(12),
        }
    }

    pub fn is_isbn(self) -> bool {
        matches!(self, IdentifierKind::Isbn10 | IdentifierKind::Isbn13)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            IdentifierKind::Invalid => "invalid",
            IdentifierKind::Isbn10 => "ISBN-10",
            IdentifierKind::Isbn13 => "ISBN-13",
            IdentifierKind::Ean13 => "EAN-13",
            IdentifierKind::UpcA => "UPC-A",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for IdentifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "isbn10" => Ok(IdentifierKind::Isbn10),
            "isbn13" => Ok(IdentifierKind::Isbn13),
            "ean13" | "ean" => Ok(IdentifierKind::Ean13),
            "upca" | "upc" => Ok(IdentifierKind::UpcA),
            "invalid" => Ok(IdentifierKind::Invalid),
            _ => Err(format!("unknown code kind: {}", s)),
        }
    }
}

/// How much of the parsed input is accepted as valid.
///
/// - `None`: anything goes, the code is still classified
/// - `Loose`: ISBN-10, ISBN-13, EAN-13 and UPC-A
/// - `Strict`: ISBN-10 and ISBN-13 only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    None,
    Loose,
    #[default]
    Strict,
}

impl ValidationLevel {
    /// Whether a code of `kind` passes this level.
    pub fn accepts(self, kind: IdentifierKind) -> bool {
        match self {
            ValidationLevel::None => true,
            ValidationLevel::Loose => kind != IdentifierKind::Invalid,
            ValidationLevel::Strict => kind.is_isbn(),
        }
    }

    /// Whether codes of `kind` survive construction at this level.
    ///
    /// Only `Strict` downgrades: non-ISBN kinds become Invalid.
    pub(crate) fn keeps(self, kind: IdentifierKind) -> bool {
        match self {
            ValidationLevel::Strict => kind.is_isbn() || kind == IdentifierKind::Invalid,
            _ => true,
        }
    }
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationLevel::None => "none",
            ValidationLevel::Loose => "loose",
            ValidationLevel::Strict => "strict",
        };
        f.write_str(name)
    }
}

impl FromStr for ValidationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(ValidationLevel::None),
            "loose" => Ok(ValidationLevel::Loose),
            "strict" => Ok(ValidationLevel::Strict),
            _ => Err(format!("unknown validation level: {}", s)),
        }
    }
}
