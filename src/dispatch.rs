//! Name-based dispatch of collection aliases.
//!
//! Some operations are reachable under a second name. [`Collection::call`]
//! resolves such a name through [`ALIASES`] and runs the matching operation;
//! any name missing from the table is an error.
//!
//! | Alias | Operation |
//! |-------|-----------|
//! | `count` | `length` |
//! | `size` | `length` |
//! | `all` | `getAll` |
//! | `first` | `getFirst` |
//! | `last` | `getLast` |

use crate::error::{Error, Result};
use crate::{Collection, Value};
use std::fmt;

/// An operation reachable through an alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Length,
    GetAll,
    GetFirst,
    GetLast,
}

/// Alias name → target operation.
pub const ALIASES: [(&str, Method); 5] = [
    ("count", Method::Length),
    ("size", Method::Length),
    ("all", Method::GetAll),
    ("first", Method::GetFirst),
    ("last", Method::GetLast),
];

impl Method {
    /// Looks up the operation an alias points to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Method;
    ///
    /// assert_eq!(Method::resolve("size"), Some(Method::Length));
    /// assert_eq!(Method::resolve("length"), None);
    /// ```
    #[must_use]
    pub fn resolve(alias: &str) -> Option<Method> {
        ALIASES
            .iter()
            .find(|(name, _)| *name == alias)
            .map(|(_, method)| *method)
    }

    /// Returns the canonical name of the operation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Method::Length => "length",
            Method::GetAll => "getAll",
            Method::GetFirst => "getFirst",
            Method::GetLast => "getLast",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Collection {
    /// Runs the operation behind an alias and returns its result as a [`Value`].
    ///
    /// An absent first or last value comes back as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MethodDoesNotExist`] if `name` is not an alias.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Collection, Value};
    ///
    /// let mut collection = Collection::new();
    /// collection.add("foo").add("bar");
    ///
    /// assert_eq!(collection.call("count").unwrap(), Value::from(2));
    /// assert_eq!(collection.call("last").unwrap(), Value::from("bar"));
    /// assert_eq!(collection.call("unknown").unwrap_err().code(), 102);
    /// ```
    pub fn call(&self, name: &str) -> Result<Value> {
        let method = match Method::resolve(name) {
            Some(method) => method,
            None => return Err(self.report(Error::method_does_not_exist(name))),
        };
        tracing::trace!(alias = name, %method, "dispatching alias");

        Ok(match method {
            Method::Length => Value::from(self.length() as i64),
            Method::GetAll => Value::Map(self.get_all()),
            Method::GetFirst => self.get_first().cloned().unwrap_or_default(),
            Method::GetLast => self.get_last().cloned().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Key;

    #[test]
    fn test_every_alias_resolves() {
        let targets: Vec<_> = ALIASES
            .iter()
            .map(|(alias, _)| Method::resolve(alias).unwrap().name())
            .collect();
        assert_eq!(targets, vec!["length", "length", "getAll", "getFirst", "getLast"]);
    }

    #[test]
    fn test_canonical_names_are_not_aliases() {
        for name in ["length", "getAll", "getFirst", "getLast", "Count", ""] {
            assert_eq!(Method::resolve(name), None, "{:?}", name);
        }
    }

    #[test]
    fn test_call_matches_direct_operations() {
        let mut collection = Collection::new();
        collection.add("foo").add_with_key("bar", "k").unwrap();

        assert_eq!(collection.call("size").unwrap(), Value::from(2));
        assert_eq!(collection.call("first").unwrap(), Value::from("foo"));

        let all = collection.call("all").unwrap();
        assert_eq!(all.as_map(), Some(collection.entries()));
        assert_eq!(
            all.as_map().unwrap().keys().cloned().collect::<Vec<_>>(),
            vec![Key::Int(0), Key::from("k")]
        );
    }

    #[test]
    fn test_call_on_empty() {
        let collection = Collection::new();
        assert_eq!(collection.call("first").unwrap(), Value::Null);
        assert_eq!(collection.call("last").unwrap(), Value::Null);
        assert_eq!(collection.call("count").unwrap(), Value::from(0));
    }

    #[test]
    fn test_unknown_alias() {
        let err = Collection::new().call("unknown").unwrap_err();
        assert!(matches!(err, Error::MethodDoesNotExist { ref name } if name == "unknown"));
        assert_eq!(err.code(), 102);
    }
}
