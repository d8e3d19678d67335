//! UPC-A vendor prefix to ISBN-10 prefix table.
//!
//! Mass-market paperbacks in North America often carry a UPC-A barcode with
//! a 5-digit add-on instead of a Bookland EAN. For known publishers the
//! ISBN is the publisher's ISBN prefix followed by the add-on digits.

/// Sorted by UPC prefix. Must stay sorted for binary search.
static VENDOR_PREFIXES: &[(&str, &str)] = &[
    ("014794", "08041"),
    ("018926", "0445"),
    ("027778", "0449"),
    ("037145", "0812"),
    ("042799", "0785"),
    ("043144", "0688"),
    ("044903", "0312"),
    ("045863", "0517"),
    ("046594", "0064"),
    ("047132", "0152"),
    ("051487", "08167"),
    ("051488", "0140"),
    ("060771", "0002"),
    ("065373", "0373"),
    ("070992", "0523"),
    ("070993", "0446"),
    ("070999", "0345"),
    ("071001", "0380"),
    ("071009", "0440"),
    ("071125", "088677"),
    ("071136", "0451"),
    ("071149", "0451"),
    ("071152", "0515"),
    ("071162", "0451"),
    ("071268", "08217"),
    ("071831", "0425"),
    ("071842", "08439"),
    ("072742", "0441"),
    ("076714", "0671"),
    ("076783", "0553"),
    ("076814", "0449"),
    ("078021", "0872"),
    ("079808", "0394"),
    ("090129", "0679"),
    ("099455", "0061"),
    ("099769", "0451"),
];

/// Look up the ISBN-10 prefix for the 6-digit vendor prefix of a UPC-A code.
pub fn isbn_prefix_for(upc_prefix: &str) -> Option<&'static str> {
    VENDOR_PREFIXES
        .binary_search_by(|(upc, _)| (*upc).cmp(upc_prefix))
        .ok()
        .map(|i| VENDOR_PREFIXES[i].1)
}

/// Build the 9-digit ISBN-10 body for a UPC-A barcode with add-on.
///
/// `digits` is the full scanned barcode (12 to 17 digits). Returns `None`
/// when the vendor is unknown or the add-on is too short to fill 9 digits.
pub(crate) fn isbn10_body(digits: &[u8]) -> Option<Vec<u8>> {
    if digits.len() < 12 {
        return None;
    }
    let vendor: String = digits[..6].iter().map(|d| char::from(b'0' + d)).collect();
    let prefix = isbn_prefix_for(&vendor)?;

    let body: Vec<u8> = prefix
        .bytes()
        .map(|b| b - b'0')
        .chain(digits[12..].iter().copied())
        .take(9)
        .collect();

    (body.len() == 9).then_some(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(VENDOR_PREFIXES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn table_entries_are_numeric() {
        for (upc, isbn) in VENDOR_PREFIXES {
            assert_eq!(upc.len(), 6);
            assert!(upc.bytes().all(|b| b.is_ascii_digit()));
            assert!(isbn.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(isbn_prefix_for("070999"), Some("0345"));
        assert_eq!(isbn_prefix_for("014794"), Some("08041"));
        assert_eq!(isbn_prefix_for("099769"), Some("0451"));
        assert_eq!(isbn_prefix_for("123456"), None);
    }

    #[test]
    fn body_from_addon() {
        // 070999 00225 5 + add-on 30054
        let digits = [0, 7, 0, 9, 9, 9, 0, 0, 2, 2, 5, 5, 3, 0, 0, 5, 4];
        assert_eq!(isbn10_body(&digits), Some(vec![0, 3, 4, 5, 3, 0, 0, 5, 4]));
    }

    #[test]
    fn body_needs_addon() {
        let digits = [0, 7, 0, 9, 9, 9, 0, 0, 2, 2, 5, 5];
        assert_eq!(isbn10_body(&digits), None);
    }

    #[test]
    fn body_unknown_vendor() {
        let digits = [0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5, 2, 1, 2, 3, 4, 5];
        assert_eq!(isbn10_body(&digits), None);
    }
}
