//! Conversion between ISBN-10 and ISBN-13 representations.

use crate::checksum::{ean13_checksum, isbn10_checksum};
use crate::code::digits_to_text;
use crate::error::{IsbnError, Result};
use crate::{IdentifierCode, IdentifierKind};

const ISBN10_COMPATIBLE_PREFIX: [u8; 3] = [9, 7, 8];

impl IdentifierCode {
    /// Render this code as `target`.
    ///
    /// Same-kind requests return the stored text. ISBN-10 converts to
    /// ISBN-13 with a 978 prefix, and a 978 ISBN-13 converts back. Every
    /// other pairing is a [`IsbnError::Conversion`].
    ///
    /// # Examples
    /// ```
    /// use isbn_codes::{IdentifierCode, IdentifierKind};
    /// let code = IdentifierCode::parse_strict("0306406152");
    /// assert_eq!(code.to_kind(IdentifierKind::Isbn13).unwrap(), "9780306406157");
    /// ```
    pub fn to_kind(&self, target: IdentifierKind) -> Result<String> {
        let digits = self.digits();
        match (self.kind(), target) {
            (IdentifierKind::Invalid, _) | (_, IdentifierKind::Invalid) => {
                Err(self.conversion_error(target))
            }
            (from, to) if from == to => Ok(self.text().to_string()),
            (IdentifierKind::Isbn10, IdentifierKind::Isbn13) => {
                let mut out: Vec<u8> = ISBN10_COMPATIBLE_PREFIX
                    .iter()
                    .chain(&digits[..9])
                    .copied()
                    .collect();
                out.push(ean13_checksum(&out)?);
                Ok(digits_to_text(&out))
            }
            (IdentifierKind::Isbn13, IdentifierKind::Isbn10) if self.is_isbn10_compatible() => {
                let mut out = digits[3..12].to_vec();
                out.push(isbn10_checksum(&out)?);
                Ok(digits_to_text(&out))
            }
            _ => Err(self.conversion_error(target)),
        }
    }

    /// Like [`to_kind`](Self::to_kind), falling back to the stored text.
    pub fn as_text(&self, target: IdentifierKind) -> String {
        self.to_kind(target)
            .unwrap_or_else(|_| self.text().to_string())
    }

    /// Convert into a new code of the target kind.
    pub fn convert(&self, target: IdentifierKind) -> Result<IdentifierCode> {
        let text = self.to_kind(target)?;
        if target == self.kind() {
            return Ok(self.clone());
        }
        let digits = crate::scan::scan_digits(&text).digits().to_vec();
        Ok(IdentifierCode::from_digits(target, digits))
    }

    /// True for ISBN-10 codes and ISBN-13 codes with the 978 prefix.
    pub fn is_isbn10_compatible(&self) -> bool {
        match self.kind() {
            IdentifierKind::Isbn10 => true,
            IdentifierKind::Isbn13 => self.digits().starts_with(&ISBN10_COMPATIBLE_PREFIX),
            _ => false,
        }
    }

    fn conversion_error(&self, to: IdentifierKind) -> IsbnError {
        IsbnError::Conversion {
            from: self.kind(),
            to,
        }
    }
}
