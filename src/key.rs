//! Keys of a collection entry.
//!
//! A [`Key`] is either an integer or a string, and both kinds can live side by
//! side in one collection. Strings that spell a canonical decimal integer are
//! stored as integers, so `"5"` and `5` address the same entry:
//!
//! ```rust
//! use keyed_collection::Key;
//!
//! assert_eq!(Key::from("5"), Key::Int(5));
//! assert_eq!(Key::from("-12"), Key::Int(-12));
//!
//! // Not canonical, kept as strings
//! assert_eq!(Key::from("05"), Key::Str("05".to_string()));
//! assert_eq!(Key::from("-0"), Key::Str("-0".to_string()));
//! assert_eq!(Key::from("+1"), Key::Str("+1".to_string()));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A scalar key: integer or string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Returns `true` if this is an integer key.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns `true` if this is a string key.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    /// If the key is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// If the key is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// Normalizes a string key: canonical decimal integers become [`Key::Int`].
    fn normalize(s: &str) -> Self {
        match parse_canonical_int(s) {
            Some(i) => Key::Int(i),
            None => Key::Str(s.to_string()),
        }
    }
}

/// Parses `s` only if it is the exact decimal rendering of an `i64`.
fn parse_canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let bytes = digits.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    // leading zeros and "-0" are not canonical
    if bytes[0] == b'0' && (bytes.len() > 1 || s.starts_with('-')) {
        return None;
    }
    s.parse::<i64>().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i8> for Key {
    fn from(value: i8) -> Self {
        Key::Int(value as i64)
    }
}

impl From<i16> for Key {
    fn from(value: i16) -> Self {
        Key::Int(value as i64)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<u8> for Key {
    fn from(value: u8) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u16> for Key {
    fn from(value: u16) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

/// Values above `i64::MAX` become string keys, like their decimal text would.
impl From<u64> for Key {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Key::Str(value.to_string()), Key::Int)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::from(value as u64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::normalize(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match parse_canonical_int(&value) {
            Some(i) => Key::Int(i),
            None => Key::Str(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::normalize(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or string key")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Key::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Key::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Key::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Key::from(value))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
