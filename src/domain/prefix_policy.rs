//! Prefix handling for ISBN-13 to ISBN-10 conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How ISBN-13 to ISBN-10 conversion treats the three character GS1 prefix.
///
/// Only `978` ISBN-13 values have an ISBN-10 counterpart. `Permissive`
/// strips whatever three characters are present; `RequireBookland` refuses
/// anything but `978`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixPolicy {
    /// Strip any three character prefix without looking at it.
    #[default]
    Permissive,

    /// Fail with `IsbnError::PrefixMismatch` unless the prefix is `978`.
    #[serde(rename = "strict")]
    RequireBookland,
}

impl PrefixPolicy {
    /// Name used in configuration and serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::RequireBookland => "strict",
        }
    }
}

impl FromStr for PrefixPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::RequireBookland),
            other => Err(format!(
                "Unknown prefix policy '{}', expected 'permissive' or 'strict'",
                other
            )),
        }
    }
}

impl fmt::Display for PrefixPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        assert_eq!(PrefixPolicy::default(), PrefixPolicy::Permissive);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "permissive".parse::<PrefixPolicy>().unwrap(),
            PrefixPolicy::Permissive
        );
        assert_eq!(
            " Strict ".parse::<PrefixPolicy>().unwrap(),
            PrefixPolicy::RequireBookland
        );
        assert!("lenient".parse::<PrefixPolicy>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PrefixPolicy::RequireBookland).unwrap();
        assert_eq!(json, "\"strict\"");

        let policy: PrefixPolicy = serde_json::from_str("\"permissive\"").unwrap();
        assert_eq!(policy, PrefixPolicy::Permissive);
    }

    #[test]
    fn test_display_matches_config_name() {
        assert_eq!(PrefixPolicy::RequireBookland.to_string(), "strict");
        assert_eq!(PrefixPolicy::Permissive.to_string(), "permissive");
    }
}
