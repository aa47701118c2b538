//! Checksum digit computation for both ISBN schemes.
//!
//! ISBN-10 uses mod-11 weighting with weights 2..=10 applied right to left
//! across the nine body digits. ISBN-13 uses mod-10 weighting with weights
//! alternating 1, 3 from the left across the twelve body digits.
//!
//! Lengths are counted in characters, so the slicing helpers here work on
//! character boundaries rather than byte offsets.

use super::errors::{IsbnError, IsbnResult};

/// Number of characters in an ISBN-10 body (without check digit).
pub const ISBN10_BODY_LEN: usize = 9;

/// Number of characters in an ISBN-13 body (without check digit).
pub const ISBN13_BODY_LEN: usize = 12;

/// GS1 "Bookland" prefix used when widening an ISBN-10 to ISBN-13.
pub const BOOKLAND_PREFIX: &str = "978";

/// Compute the ISBN-10 check character for a nine character body.
///
/// Returns `'X'` when the check value is 10 and `'0'` when it is 11.
///
/// # Errors
///
/// - `IsbnError::WrongLength` if `body` is not nine characters long.
/// - `IsbnError::InvalidDigit` if any body character is not `0`-`9`.
///
/// # Example
///
/// ```
/// use isbn_checksum::domain::checksum::isbn10_check_digit;
///
/// assert_eq!(isbn10_check_digit("020137962").unwrap(), '7');
/// ```
pub fn isbn10_check_digit(body: &str) -> IsbnResult<char> {
    let digits = digit_values(body, ISBN10_BODY_LEN, "isbn10_check_digit")?;

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| (i as u32 + 2) * d)
        .sum();

    let check = match 11 - sum % 11 {
        10 => 'X',
        11 => '0',
        n => ascii_digit(n),
    };

    tracing::trace!(body = %body, sum, check = %check, "Computed ISBN-10 check digit");
    Ok(check)
}

/// Compute the ISBN-13 check character for a twelve character body.
///
/// # Errors
///
/// - `IsbnError::WrongLength` if `body` is not twelve characters long.
/// - `IsbnError::InvalidDigit` if any body character is not `0`-`9`.
///
/// # Example
///
/// ```
/// use isbn_checksum::domain::checksum::isbn13_check_digit;
///
/// assert_eq!(isbn13_check_digit("978020137962").unwrap(), '4');
/// ```
pub fn isbn13_check_digit(body: &str) -> IsbnResult<char> {
    let digits = digit_values(body, ISBN13_BODY_LEN, "isbn13_check_digit")?;

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| (i as u32 % 2 * 2 + 1) * d)
        .sum();

    let check = match 10 - sum % 10 {
        10 => '0',
        n => ascii_digit(n),
    };

    tracing::trace!(body = %body, sum, check = %check, "Computed ISBN-13 check digit");
    Ok(check)
}

/// Convert a body into numeric digit values, checking its length first.
fn digit_values(body: &str, expected: usize, operation: &'static str) -> IsbnResult<Vec<u32>> {
    let actual = char_len(body);
    if actual != expected {
        return Err(IsbnError::WrongLength {
            operation,
            expected,
            actual,
        });
    }

    body.chars()
        .enumerate()
        .map(|(position, character)| {
            character
                .to_digit(10)
                .ok_or(IsbnError::InvalidDigit {
                    character,
                    position,
                })
        })
        .collect()
}

// n is always in 0..=9 here
fn ascii_digit(n: u32) -> char {
    char::from(b'0' + n as u8)
}

/// Length of `s` in characters.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split off the final character, returning the remainder and that character.
pub(crate) fn split_last(s: &str) -> Option<(&str, char)> {
    s.char_indices()
        .next_back()
        .map(|(idx, last)| (&s[..idx], last))
}

/// Split a stored value into body and claimed check character, requiring the
/// full body+checksum length.
pub(crate) fn split_check_digit<'a>(
    digits: &'a str,
    operation: &'static str,
    expected: usize,
) -> IsbnResult<(&'a str, char)> {
    let actual = char_len(digits);
    match split_last(digits) {
        Some(parts) if actual == expected => Ok(parts),
        _ => Err(IsbnError::WrongLength {
            operation,
            expected,
            actual,
        }),
    }
}

/// Everything except the final character (empty for an empty string).
pub(crate) fn without_last(s: &str) -> &str {
    split_last(s).map_or("", |(rest, _)| rest)
}

/// The first `n` characters of `s`.
pub(crate) fn take_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(idx, _)| &s[..idx])
}

/// `s` with its first `n` characters removed.
pub(crate) fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(idx, _)| &s[idx..])
}
