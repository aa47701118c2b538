//! Isbn10 value object.

use super::checksum::{
    char_len, isbn10_check_digit, split_check_digit, without_last, BOOKLAND_PREFIX,
    ISBN10_BODY_LEN,
};
use super::errors::{IsbnError, IsbnResult};
use super::isbn13::Isbn13;
use super::json_str;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

const FULL_LEN: usize = ISBN10_BODY_LEN + 1;
const ACCEPTED_LENGTHS: &str = "9 or 10";

/// A ten digit ISBN, with or without its trailing check character.
///
/// The stored characters are kept verbatim: no case folding, no hyphen or
/// whitespace removal. Construction only checks the length (9 or 10); the
/// check character is computed by [`Isbn10::calculate_checksum`] and verified
/// by [`Isbn10::validate`].
///
/// # Example
///
/// ```
/// use isbn_checksum::domain::Isbn10;
///
/// let mut isbn = Isbn10::new("020137962").unwrap();
/// isbn.calculate_checksum(false).unwrap();
/// assert_eq!(isbn.digits().unwrap(), "0201379627");
/// assert!(isbn.validate().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn10 {
    digits: Option<String>,
}

impl Isbn10 {
    /// Create a new Isbn10 from a 9 or 10 character candidate.
    ///
    /// # Errors
    ///
    /// Returns `IsbnError::InvalidLength` if the candidate has any other length.
    pub fn new(candidate: impl Into<String>) -> IsbnResult<Self> {
        let digits = Self::checked(candidate.into())?;
        Ok(Self {
            digits: Some(digits),
        })
    }

    /// Create a new Isbn10 from an untyped JSON value.
    ///
    /// # Errors
    ///
    /// - `IsbnError::InvalidType` if the value is not a JSON string.
    /// - `IsbnError::InvalidLength` if the string has the wrong length.
    pub fn from_json(value: &Value) -> IsbnResult<Self> {
        Self::new(json_str(value)?)
    }

    /// Check a candidate against the accepted lengths.
    fn checked(candidate: String) -> IsbnResult<String> {
        let actual = char_len(&candidate);
        if actual != ISBN10_BODY_LEN && actual != FULL_LEN {
            return Err(IsbnError::InvalidLength {
                expected: ACCEPTED_LENGTHS,
                actual,
            });
        }
        Ok(candidate)
    }

    /// Check if a candidate is a complete ISBN-10 with a correct check character.
    ///
    /// Every error (wrong length, non-digit body) counts as invalid.
    pub fn is_valid(candidate: &str) -> bool {
        Self::new(candidate)
            .and_then(|isbn| isbn.validate())
            .unwrap_or(false)
    }

    /// Replace the stored value, re-running the construction check.
    ///
    /// On failure the previous value (or cleared state) is kept.
    pub fn set_digits(&mut self, candidate: impl Into<String>) -> IsbnResult<()> {
        let digits = Self::checked(candidate.into())?;
        tracing::trace!(digits = %digits, "ISBN-10 value assigned");
        self.digits = Some(digits);
        Ok(())
    }

    /// Get the stored characters.
    ///
    /// # Errors
    ///
    /// Returns `IsbnError::NoValue` after [`Isbn10::clear`].
    pub fn digits(&self) -> IsbnResult<&str> {
        self.digits.as_deref().ok_or(IsbnError::NoValue)
    }

    /// Drop the stored value. Reads fail with `NoValue` until the next
    /// [`Isbn10::set_digits`].
    pub fn clear(&mut self) {
        self.digits = None;
    }

    /// Whether the stored value has been cleared.
    pub fn is_cleared(&self) -> bool {
        self.digits.is_none()
    }

    /// Whether the stored value carries a check character (length 10).
    pub fn has_checksum(&self) -> IsbnResult<bool> {
        Ok(char_len(self.digits()?) == FULL_LEN)
    }

    /// The nine body characters, without any check character.
    pub fn body(&self) -> IsbnResult<&str> {
        let digits = self.digits()?;
        if char_len(digits) == FULL_LEN {
            Ok(without_last(digits))
        } else {
            Ok(digits)
        }
    }

    /// Check whether the trailing character matches the checksum of the body.
    ///
    /// A mismatch returns `Ok(false)`. The comparison is exact, so a
    /// lowercase `x` never matches a computed `X`.
    ///
    /// # Errors
    ///
    /// - `IsbnError::WrongLength` unless the stored value has 10 characters.
    /// - `IsbnError::InvalidDigit` if a body character is not a decimal digit.
    /// - `IsbnError::NoValue` if the value was cleared.
    pub fn validate(&self) -> IsbnResult<bool> {
        let (body, claimed) = split_check_digit(self.digits()?, "validate", FULL_LEN)?;
        let expected = isbn10_check_digit(body)?;
        Ok(expected == claimed)
    }

    /// Append the check character to a nine character body.
    ///
    /// With `force` the last stored character is dropped first, so an
    /// existing check character is recomputed. The stored value is only
    /// replaced when every step succeeds.
    ///
    /// # Errors
    ///
    /// - `IsbnError::WrongLength` if the body is not 9 characters (for
    ///   example calling without `force` on a 10 character value).
    /// - `IsbnError::InvalidLength` if `force` leaves fewer than 9 characters.
    /// - `IsbnError::InvalidDigit` if a body character is not a decimal digit.
    /// - `IsbnError::NoValue` if the value was cleared.
    pub fn calculate_checksum(&mut self, force: bool) -> IsbnResult<()> {
        let current = self.digits()?;

        let body = if force {
            let stripped = without_last(current);
            Self::checked(stripped.to_string())?;
            stripped
        } else {
            current
        };

        let actual = char_len(body);
        if actual != ISBN10_BODY_LEN {
            return Err(IsbnError::WrongLength {
                operation: "calculate_checksum",
                expected: ISBN10_BODY_LEN,
                actual,
            });
        }

        let check = isbn10_check_digit(body)?;
        let mut updated = String::with_capacity(body.len() + 1);
        updated.push_str(body);
        updated.push(check);

        tracing::debug!(isbn = %updated, force, "Calculated ISBN-10 checksum");
        self.digits = Some(updated);
        Ok(())
    }

    /// Convert to an ISBN-13 under the `978` prefix.
    ///
    /// The ISBN-10 check character is discarded and the ISBN-13 check digit
    /// is computed fresh. `self` is left untouched.
    ///
    /// # Errors
    ///
    /// - `IsbnError::InvalidDigit` if a body character is not a decimal digit.
    /// - `IsbnError::NoValue` if the value was cleared.
    pub fn convert_to_isbn13(&self) -> IsbnResult<Isbn13> {
        let body = self.body()?;

        let mut converted = Isbn13::new(format!("{}{}", BOOKLAND_PREFIX, body))?;
        converted.calculate_checksum(false)?;

        tracing::debug!(
            isbn10 = %self,
            isbn13 = %converted,
            "Converted ISBN-10 to ISBN-13"
        );
        Ok(converted)
    }
}

impl FromStr for Isbn10 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Isbn10 {
    type Error = IsbnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Isbn10 {
    type Error = IsbnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Serde support - serialize as string
impl Serialize for Isbn10 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let digits = self.digits().map_err(serde::ser::Error::custom)?;
        digits.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Isbn10 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Isbn10::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.digits {
            Some(digits) => write!(f, "{}", digits),
            None => write!(f, "<cleared>"),
        }
    }
}
