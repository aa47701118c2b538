//! Domain value objects and types.
//!
//! This module contains the two ISBN value objects, the checksum rules they
//! share, and the error type every domain operation reports. Values are
//! length-checked at construction; checksum digits are only computed or
//! verified when the caller asks for it.

pub mod checksum;
pub mod errors;
pub mod isbn10;
pub mod isbn13;
pub mod prefix_policy;

pub use errors::{IsbnError, IsbnResult};
pub use isbn10::Isbn10;
pub use isbn13::Isbn13;
pub use prefix_policy::PrefixPolicy;

use serde_json::Value;

/// Borrow the string inside a JSON value, rejecting every other JSON type.
pub(crate) fn json_str(value: &Value) -> IsbnResult<&str> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        Value::Null => Err(IsbnError::InvalidType { found: "null" }),
        Value::Bool(_) => Err(IsbnError::InvalidType { found: "boolean" }),
        Value::Number(_) => Err(IsbnError::InvalidType { found: "number" }),
        Value::Array(_) => Err(IsbnError::InvalidType { found: "array" }),
        Value::Object(_) => Err(IsbnError::InvalidType { found: "object" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_str_accepts_strings() {
        assert_eq!(json_str(&json!("020137962")).unwrap(), "020137962");
    }

    #[test]
    fn test_json_str_names_the_rejected_type() {
        assert_eq!(
            json_str(&json!(20137962)),
            Err(IsbnError::InvalidType { found: "number" })
        );
        assert_eq!(
            json_str(&json!(null)),
            Err(IsbnError::InvalidType { found: "null" })
        );
        assert_eq!(
            json_str(&json!(["0", "2"])),
            Err(IsbnError::InvalidType { found: "array" })
        );
    }
}
