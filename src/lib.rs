//! # keyed_collection
//!
//! An ordered associative collection with mixed integer and string keys.
//!
//! ## What is a Collection?
//!
//! A [`Collection`] is an ordered list of key-value entries that behaves like a
//! native ordered array: values can be appended without a key and get the next
//! free integer key, or be stored under an explicit integer or string key. Both
//! kinds of key live side by side and insertion order is always preserved.
//!
//! ## Key Features
//!
//! - **Chainable**: in-place mutators return `&mut Self`; fallible ones return
//!   `Result<&mut Self>` and chain with `?`
//! - **Non-mutating transforms**: `map`, `filter`, `reverse` and `flatten`
//!   return a new collection
//! - **Stable error codes**: every [`Error`] carries a numeric code
//! - **Pluggable diagnostics**: errors are reported to a [`DiagnosticSink`]
//!   before they are returned
//! - **Alias dispatch**: `count`, `size`, `all`, `first` and `last` can be
//!   called by name through [`Collection::call`]
//!
//! ## Quick Start
//!
//! ```rust
//! use keyed_collection::{Collection, Key, Value};
//!
//! # fn main() -> keyed_collection::Result<()> {
//! let mut collection = Collection::new();
//! collection
//!     .add_with_key("foo", "bar")?
//!     .add_with_key("foo2", "bar2")?;
//!
//! assert_eq!(collection.keys(), vec![Key::from("bar"), Key::from("bar2")]);
//!
//! let reversed = collection.reverse();
//! assert_eq!(reversed.get_first(), Some(&Value::from("foo2")));
//! # Ok(())
//! # }
//! ```
//!
//! ### Push versus Merge
//!
//! ```rust
//! use keyed_collection::{collection, Value};
//!
//! let mut base = collection! { "key" => "foo", "key2" => "bar" };
//!
//! base.push(&collection! { "key" => "ignored", "key3" => "test" });
//! assert_eq!(base.get("key").unwrap(), &Value::from("foo"));
//! assert_eq!(base.length(), 3);
//!
//! base.merge(&collection! { "key" => "test" });
//! assert_eq!(base.get("key").unwrap(), &Value::from("test"));
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use keyed_collection::{Collection, Error};
//!
//! let mut collection = Collection::new();
//! collection.add_with_key("value", "key").unwrap();
//!
//! match collection.add_with_key("value2", "key") {
//!     Err(Error::KeyAlreadyAdded { key }) => assert_eq!(key.to_string(), "key"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! ## Logging
//!
//! By default errors go to [`NoopSink`]. Use [`CollectionOptions::tracing`] to
//! forward them to the `tracing` ecosystem, or implement [`DiagnosticSink`].

pub mod collection;
pub mod dispatch;
pub mod error;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod sink;
pub mod value;

pub use collection::Collection;
pub use dispatch::{Method, ALIASES};
pub use error::{Error, Result};
pub use key::Key;
pub use map::OrderedMap;
pub use options::{CollectionOptions, DEFAULT_CATEGORY};
pub use sink::{DiagnosticSink, Level, NoopSink, TracingSink};
pub use value::{Number, Value};
