//! Equality across code lengths.
//!
//! An ISBN-10 and an ISBN-13 name the same book when their nine significant
//! digits match: the ISBN-10 without its check digit, and the ISBN-13
//! without its 3-digit prefix and check digit.
//!
//! Invalid codes never compare equal, not even to themselves, so
//! [`IdentifierCode`] implements `PartialEq` but not `Eq`. Use
//! [`IdentifierCode::significant_key`] for map keys.

use std::hash::{Hash, Hasher};

use crate::code::digits_to_text;
use crate::IdentifierCode;

impl IdentifierCode {
    /// The nine digits shared by the ISBN-10 and ISBN-13 forms.
    ///
    /// `None` for codes that are neither 10 nor 13 digits long.
    pub fn significant_digits(&self) -> Option<&[u8]> {
        let digits = self.digits();
        match digits.len() {
            10 => Some(&digits[..9]),
            13 => Some(&digits[3..12]),
            _ => None,
        }
    }

    /// A string key consistent with equality, for dedup and map lookups.
    ///
    /// Codes that compare equal share a key. Invalid codes have no key.
    pub fn significant_key(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        Some(match self.significant_digits() {
            Some(window) => digits_to_text(window),
            None => self.text().to_string(),
        })
    }
}

impl PartialEq for IdentifierCode {
    fn eq(&self, other: &Self) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }

        let (a, b) = (self.digits(), other.digits());
        if a.len() == b.len() {
            return a == b;
        }

        match (self.significant_digits(), other.significant_digits()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

impl Hash for IdentifierCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if !self.is_valid() {
            self.text().hash(state);
        } else if let Some(window) = self.significant_digits() {
            window.hash(state);
        } else {
            self.digits().hash(state);
        }
    }
}
