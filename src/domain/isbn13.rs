//! Isbn13 value object.

use super::checksum::{
    char_len, isbn13_check_digit, skip_chars, split_check_digit, take_chars, without_last,
    BOOKLAND_PREFIX, ISBN13_BODY_LEN,
};
use super::errors::{IsbnError, IsbnResult};
use super::isbn10::Isbn10;
use super::json_str;
use super::prefix_policy::PrefixPolicy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

const FULL_LEN: usize = ISBN13_BODY_LEN + 1;
const ACCEPTED_LENGTHS: &str = "12 or 13";
const PREFIX_LEN: usize = 3;

/// A thirteen digit ISBN, with or without its trailing check digit.
///
/// Like [`Isbn10`], the characters are stored verbatim and only the length
/// (12 or 13) is checked at construction.
///
/// # Example
///
/// ```
/// use isbn_checksum::domain::Isbn13;
///
/// let isbn = Isbn13::new("9780306406157").unwrap();
/// assert!(isbn.validate().unwrap());
///
/// let isbn10 = isbn.convert_to_isbn10().unwrap();
/// assert_eq!(isbn10.digits().unwrap(), "0306406152");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn13 {
    digits: Option<String>,
}

impl Isbn13 {
    /// Create a new Isbn13 from a 12 or 13 character candidate.
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

    /// Create a new Isbn13 from an untyped JSON value.
    ///
    /// # Errors
    ///
    /// - `IsbnError::InvalidType` if the value is not a JSON string.
    /// - `IsbnError::InvalidLength` if the string has the wrong length.
    pub fn from_json(value: &Value) -> IsbnResult<Self> {
        Self::new(json_str(value)?)
    }

    fn checked(candidate: String) -> IsbnResult<String> {
        let actual = char_len(&candidate);
        if actual != ISBN13_BODY_LEN && actual != FULL_LEN {
            return Err(IsbnError::InvalidLength {
                expected: ACCEPTED_LENGTHS,
                actual,
            });
        }
        Ok(candidate)
    }

    /// Check if a candidate is a complete ISBN-13 with a correct check digit.
    pub fn is_valid(candidate: &str) -> bool {
        Self::new(candidate)
            .and_then(|isbn| isbn.validate())
            .unwrap_or(false)
    }

    /// Replace the stored value, re-running the construction check.
    pub fn set_digits(&mut self, candidate: impl Into<String>) -> IsbnResult<()> {
        let digits = Self::checked(candidate.into())?;
        tracing::trace!(digits = %digits, "ISBN-13 value assigned");
        self.digits = Some(digits);
        Ok(())
    }

    /// Get the stored characters, or `IsbnError::NoValue` once cleared.
    pub fn digits(&self) -> IsbnResult<&str> {
        self.digits.as_deref().ok_or(IsbnError::NoValue)
    }

    /// Drop the stored value.
    pub fn clear(&mut self) {
        self.digits = None;
    }

    /// Whether the stored value has been cleared.
    pub fn is_cleared(&self) -> bool {
        self.digits.is_none()
    }

    /// Whether the stored value carries a check digit (length 13).
    pub fn has_checksum(&self) -> IsbnResult<bool> {
        Ok(char_len(self.digits()?) == FULL_LEN)
    }

    /// The twelve body characters, without any check digit.
    pub fn body(&self) -> IsbnResult<&str> {
        let digits = self.digits()?;
        if char_len(digits) == FULL_LEN {
            Ok(without_last(digits))
        } else {
            Ok(digits)
        }
    }

    /// The three character GS1 prefix (`978` or `979` for real ISBNs).
    pub fn prefix(&self) -> IsbnResult<&str> {
        Ok(take_chars(self.digits()?, PREFIX_LEN))
    }

    /// Check whether the trailing digit matches the checksum of the body.
    ///
    /// # Errors
    ///
    /// - `IsbnError::WrongLength` unless the stored value has 13 characters.
    /// - `IsbnError::InvalidDigit` if a body character is not a decimal digit.
    /// - `IsbnError::NoValue` if the value was cleared.
    pub fn validate(&self) -> IsbnResult<bool> {
        let (body, claimed) = split_check_digit(self.digits()?, "validate", FULL_LEN)?;
        let expected = isbn13_check_digit(body)?;
        Ok(expected == claimed)
    }

    /// Append the check digit to a twelve character body.
    ///
    /// With `force` the last stored character is dropped first. The stored
    /// value is only replaced when every step succeeds.
    ///
    /// # Errors
    ///
    /// - `IsbnError::WrongLength` if the body is not 12 characters.
    /// - `IsbnError::InvalidLength` if `force` leaves fewer than 12 characters.
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
        if actual != ISBN13_BODY_LEN {
            return Err(IsbnError::WrongLength {
                operation: "calculate_checksum",
                expected: ISBN13_BODY_LEN,
                actual,
            });
        }

        let check = isbn13_check_digit(body)?;
        let mut updated = String::with_capacity(body.len() + 1);
        updated.push_str(body);
        updated.push(check);

        tracing::debug!(isbn = %updated, force, "Calculated ISBN-13 checksum");
        self.digits = Some(updated);
        Ok(())
    }

    /// Convert to an ISBN-10, stripping any three character prefix.
    ///
    /// Equivalent to `convert_to_isbn10_with(PrefixPolicy::Permissive)`.
    pub fn convert_to_isbn10(&self) -> IsbnResult<Isbn10> {
        self.convert_to_isbn10_with(PrefixPolicy::Permissive)
    }

    /// Convert to an ISBN-10 under the given prefix policy.
    ///
    /// The ISBN-13 check digit is discarded, the prefix is removed and the
    /// ISBN-10 check character is computed for the remaining nine characters.
    ///
    /// # Errors
    ///
    /// - `IsbnError::PrefixMismatch` under `PrefixPolicy::RequireBookland`
    ///   when the prefix is not `978`.
    /// - `IsbnError::InvalidDigit` if a body character is not a decimal digit.
    /// - `IsbnError::NoValue` if the value was cleared.
    pub fn convert_to_isbn10_with(&self, policy: PrefixPolicy) -> IsbnResult<Isbn10> {
        let body = self.body()?;
        let prefix = take_chars(body, PREFIX_LEN);

        if policy == PrefixPolicy::RequireBookland && prefix != BOOKLAND_PREFIX {
            tracing::debug!(prefix = %prefix, "Refusing ISBN-10 conversion");
            return Err(IsbnError::PrefixMismatch {
                found: prefix.to_string(),
            });
        }

        let mut converted = Isbn10::new(skip_chars(body, PREFIX_LEN))?;
        converted.calculate_checksum(false)?;

        tracing::debug!(
            isbn13 = %self,
            isbn10 = %converted,
            policy = %policy,
            "Converted ISBN-13 to ISBN-10"
        );
        Ok(converted)
    }
}

impl FromStr for Isbn13 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Isbn13 {
    type Error = IsbnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Isbn13 {
    type Error = IsbnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Serde support - serialize as string
impl Serialize for Isbn13 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let digits = self.digits().map_err(serde::ser::Error::custom)?;
        digits.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Isbn13 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Isbn13::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.digits {
            Some(digits) => write!(f, "{}", digits),
            None => write!(f, "<cleared>"),
        }
    }
}
