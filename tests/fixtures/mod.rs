//! Known ISBN pairs shared by the integration tests.
//!
//! Each entry is an ISBN-10 and its 978-prefixed ISBN-13 counterpart, both
//! with correct check digits.

#![allow(dead_code)]

/// (ISBN-10, ISBN-13) pairs with correct check digits.
pub const KNOWN_PAIRS: &[(&str, &str)] = &[
    ("0306406152", "9780306406157"),
    ("080442957X", "9780804429573"),
    ("1853261580", "9781853261589"),
    ("0201379627", "9780201379624"),
    ("0596520689", "9780596520687"),
    ("0140449132", "9780140449136"),
    ("067978327X", "9780679783275"),
    ("0000000000", "9780000000002"),
    ("9999999999", "9789999999991"),
    ("123456789X", "9781234567897"),
];

/// Every character that can sit in the check position of an ISBN-10.
pub const ISBN10_CHECK_CHARS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'X'];

/// Strip the trailing check character.
pub fn body_of(isbn: &str) -> &str {
    &isbn[..isbn.len() - 1]
}

/// Replace the trailing check character.
pub fn with_check(isbn: &str, check: char) -> String {
    format!("{}{}", body_of(isbn), check)
}
