//! ISBN Checksum - ISBN-10 and ISBN-13 value types.
//!
//! This library represents book identification numbers, computes and checks
//! their check digits, and converts between the ten and thirteen digit forms.
//! It does not look anything up: a checksum-consistent ISBN may still be
//! unassigned.
//!
//! # Architecture
//!
//! - **domain**: The `Isbn10` and `Isbn13` value objects, checksum rules and
//!   domain errors
//! - **error**: Configuration error types
//! - **config**: Configuration management from environment variables
//! - **observability**: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use isbn_checksum::Isbn10;
//!
//! let isbn10 = Isbn10::new("0306406152").unwrap();
//! assert!(isbn10.validate().unwrap());
//!
//! let isbn13 = isbn10.convert_to_isbn13().unwrap();
//! assert_eq!(isbn13.digits().unwrap(), "9780306406157");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod observability;

pub use config::Config;
pub use domain::{Isbn10, Isbn13, IsbnError, IsbnResult, PrefixPolicy};
pub use error::{ConfigError, ConfigResult};
pub use observability::init_tracing;
