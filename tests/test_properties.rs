//! Property-based tests for checksum and conversion invariants.
//!
//! Bodies are generated as plain decimal digit strings of the body length
//! for each scheme.

use isbn_checksum::domain::checksum::{isbn10_check_digit, isbn13_check_digit};
use isbn_checksum::{Isbn10, Isbn13, IsbnError};
use proptest::prelude::*;

/// Generate nine digit ISBN-10 bodies.
fn arb_isbn10_body() -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..=9, 9)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Generate twelve digit ISBN-13 bodies.
fn arb_isbn13_body() -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..=9, 12)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

proptest! {
    #[test]
    fn isbn10_calculated_checksum_validates(body in arb_isbn10_body()) {
        let mut isbn = Isbn10::new(body.clone()).unwrap();
        isbn.calculate_checksum(false).unwrap();

        prop_assert!(isbn.validate().unwrap());
        prop_assert_eq!(isbn.body().unwrap(), body.as_str());
    }

    #[test]
    fn isbn13_calculated_checksum_validates(body in arb_isbn13_body()) {
        let mut isbn = Isbn13::new(body.clone()).unwrap();
        isbn.calculate_checksum(false).unwrap();

        prop_assert!(isbn.validate().unwrap());
        prop_assert!(isbn.digits().unwrap().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn isbn10_exactly_one_check_character_validates(body in arb_isbn10_body()) {
        let valid = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'X']
            .into_iter()
            .filter(|check| {
                Isbn10::new(format!("{}{}", body, check))
                    .unwrap()
                    .validate()
                    .unwrap()
            })
            .count();
        prop_assert_eq!(valid, 1);
    }

    #[test]
    fn checksum_is_deterministic(body10 in arb_isbn10_body(), body13 in arb_isbn13_body()) {
        prop_assert_eq!(
            isbn10_check_digit(&body10).unwrap(),
            isbn10_check_digit(&body10).unwrap()
        );
        prop_assert_eq!(
            isbn13_check_digit(&body13).unwrap(),
            isbn13_check_digit(&body13).unwrap()
        );
    }

    #[test]
    fn round_trip_preserves_body_and_recomputes_check(
        body in arb_isbn10_body(),
        claimed in prop::sample::select(vec!['0', '5', '9', 'X']),
    ) {
        let original = Isbn10::new(format!("{}{}", body, claimed)).unwrap();
        let round_trip = original
            .convert_to_isbn13()
            .unwrap()
            .convert_to_isbn10()
            .unwrap();

        let expected_check = isbn10_check_digit(&body).unwrap();
        prop_assert_eq!(round_trip.digits().unwrap(), format!("{}{}", body, expected_check));
        prop_assert_eq!(original.digits().unwrap(), format!("{}{}", body, claimed));
    }

    #[test]
    fn force_recomputes_from_first_nine(body in arb_isbn10_body(), last in 0u8..=9) {
        let mut isbn = Isbn10::new(format!("{}{}", body, last)).unwrap();
        isbn.calculate_checksum(true).unwrap();

        let expected = isbn10_check_digit(&body).unwrap();
        prop_assert_eq!(isbn.digits().unwrap(), format!("{}{}", body, expected));
    }

    #[test]
    fn construction_rejects_other_lengths(len in 0usize..20) {
        let candidate = "1".repeat(len);
        let accepted10 = len == 9 || len == 10;
        let accepted13 = len == 12 || len == 13;

        match Isbn10::new(candidate.as_str()) {
            Ok(_) => prop_assert!(accepted10),
            Err(err) => {
                prop_assert!(!accepted10);
                let is_invalid_length = matches!(err, IsbnError::InvalidLength { .. });
                prop_assert!(is_invalid_length);
            }
        }
        prop_assert_eq!(Isbn13::new(candidate).is_ok(), accepted13);
    }
}
