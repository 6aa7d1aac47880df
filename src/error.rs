//! Error types for collection operations.
//!
//! Every error carries a stable numeric code so callers can match on it the
//! same way regardless of the message wording.
//!
//! ## Error Kinds
//!
//! | Variant | Raised by | Code |
//! |---------|-----------|------|
//! | [`Error::KeyAlreadyAdded`] | `add_with_key` on an existing key | 100 |
//! | [`Error::KeyInvalid`] | `get`, `replace`, `drop` on a missing key or value | 101 |
//! | [`Error::MethodDoesNotExist`] | `call` with an unknown alias | 102 |
//! | [`Error::InvalidPattern`] | `contains_with_regex` with a bad pattern | 103 |
//! | [`Error::NextKeyUnavailable`] | `add`, `push_only_values` after `i64::MAX` was used as a key | 104 |
//!
//! ## Examples
//!
//! ```rust
//! use keyed_collection::{Collection, Error};
//!
//! let collection = Collection::new();
//! let err = collection.get("missing").unwrap_err();
//!
//! assert!(matches!(err, Error::KeyInvalid { .. }));
//! assert_eq!(err.code(), 101);
//! ```

use crate::Key;
use thiserror::Error;

/// Represents all possible errors raised by a [`Collection`](crate::Collection).
///
/// None of these are fatal: each one is scoped to the call that raised it and
/// the collection is left exactly as it was before that call.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// An explicit key was added twice
    #[error("Key {key} already added.")]
    KeyAlreadyAdded { key: Key },

    /// The key (or value, for `drop`) is not present in the collection
    #[error("The key {key} does not exist in the collection.")]
    KeyInvalid { key: String },

    /// Alias dispatch was asked for a name that is not in the alias table
    #[error("Method or alias {name} does not exist.")]
    MethodDoesNotExist { name: String },

    /// The regular expression could not be compiled
    #[error("Invalid pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// No integer key is left for an appended value
    #[error("Cannot add element, the next integer key is unavailable.")]
    NextKeyUnavailable,
}

impl Error {
    pub const KEY_ALREADY_ADDED: u16 = 100;
    pub const KEY_INVALID: u16 = 101;
    pub const METHOD_DOES_NOT_EXIST: u16 = 102;
    pub const INVALID_PATTERN: u16 = 103;
    pub const NEXT_KEY_UNAVAILABLE: u16 = 104;

    /// Creates a [`Error::KeyAlreadyAdded`] error.
    pub fn key_already_added(key: &Key) -> Self {
        Error::KeyAlreadyAdded { key: key.clone() }
    }

    /// Creates a [`Error::KeyInvalid`] error.
    ///
    /// Takes anything displayable since `drop` reports values as well as keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Error;
    ///
    /// let err = Error::key_invalid("foobar");
    /// assert_eq!(err.to_string(), "The key foobar does not exist in the collection.");
    /// ```
    pub fn key_invalid<T: std::fmt::Display>(key: T) -> Self {
        Error::KeyInvalid {
            key: key.to_string(),
        }
    }

    /// Creates a [`Error::MethodDoesNotExist`] error.
    pub fn method_does_not_exist(name: &str) -> Self {
        Error::MethodDoesNotExist {
            name: name.to_string(),
        }
    }

    /// Creates a [`Error::InvalidPattern`] error.
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns the stable numeric code of this error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Error;
    ///
    /// assert_eq!(Error::method_does_not_exist("unknown").code(), 102);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Error::KeyAlreadyAdded { .. } => Self::KEY_ALREADY_ADDED,
            Error::KeyInvalid { .. } => Self::KEY_INVALID,
            Error::MethodDoesNotExist { .. } => Self::METHOD_DOES_NOT_EXIST,
            Error::InvalidPattern { .. } => Self::INVALID_PATTERN,
            Error::NextKeyUnavailable => Self::NEXT_KEY_UNAVAILABLE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
