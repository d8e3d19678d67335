//! Property tests for parsing, conversion and equality

use isbn_codes::{check_char, isbn10_checksum, IdentifierCode, IdentifierKind};
use proptest::prelude::*;

/// A valid ISBN-10 built from a random 9-digit body.
fn isbn10_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 9).prop_map(|body| {
        let check = isbn10_checksum(&body).unwrap();
        body.iter()
            .map(|d| char::from(b'0' + d))
            .chain(check_char(check))
            .collect()
    })
}

/// Insert hyphens and spaces between characters.
fn decorate(code: &str, seps: &[u8]) -> String {
    let mut out = String::from("  ");
    for (i, c) in code.chars().enumerate() {
        out.push(c);
        match seps.get(i).copied().unwrap_or(0) % 3 {
            1 => out.push('-'),
            2 => out.push(' '),
            _ => {}
        }
    }
    out
}

proptest! {
    #[test]
    fn isbn10_round_trips_through_isbn13(isbn in isbn10_strategy()) {
        let code = IdentifierCode::parse_strict(&isbn);
        prop_assert_eq!(code.kind(), IdentifierKind::Isbn10);

        let thirteen = code.to_kind(IdentifierKind::Isbn13).unwrap();
        prop_assert!(thirteen.starts_with("978"));

        let back = IdentifierCode::parse_strict(&thirteen);
        prop_assert_eq!(back.kind(), IdentifierKind::Isbn13);
        prop_assert_eq!(back.to_kind(IdentifierKind::Isbn10).unwrap(), isbn);
    }

    #[test]
    fn isbn10_equals_its_isbn13(isbn in isbn10_strategy()) {
        let ten = IdentifierCode::parse_strict(&isbn);
        let thirteen = ten.convert(IdentifierKind::Isbn13).unwrap();
        prop_assert!(ten == thirteen);
        prop_assert_eq!(ten.significant_key(), thirteen.significant_key());
    }

    #[test]
    fn separators_do_not_matter(isbn in isbn10_strategy(), seps in proptest::collection::vec(any::<u8>(), 10)) {
        let decorated = decorate(&isbn, &seps);
        let code = IdentifierCode::parse_strict(&decorated);
        prop_assert_eq!(code.text(), isbn.as_str());
    }

    #[test]
    fn parsing_never_panics(input in "\\PC{0,24}") {
        let code = IdentifierCode::parse_loose(&input);
        if code.is_valid() {
            prop_assert!(code.digits().len() >= 10);
        } else {
            prop_assert_eq!(code.text(), input.as_str());
            prop_assert!(code.digits().is_empty());
        }
    }

    #[test]
    fn x_only_ends_ten_digit_codes(input in "[0-9X]{9,17}") {
        let code = IdentifierCode::parse_loose(&input);
        if let Some(pos) = code.digits().iter().position(|&d| d == 10) {
            prop_assert_eq!(pos, 9);
            prop_assert_eq!(code.digits().len(), 10);
        }
    }
}
