//! The [`Collection`] type.
//!
//! A collection wraps an [`OrderedMap`] and layers convenience operations on
//! top of it. Mutators work in place and return `&mut Self` so calls can be
//! chained; fallible mutators return `Result<&mut Self>` and chain with `?`.
//! Transformations (`map`, `filter`, `reverse`, `flatten`) leave the receiver
//! untouched and return a new collection.
//!
//! ## Examples
//!
//! ```rust
//! use keyed_collection::{Collection, Key, Value};
//!
//! # fn main() -> keyed_collection::Result<()> {
//! let mut fruits = Collection::new();
//! fruits.add("apple").add("pear");
//! fruits.add_with_key("kiwi", "green")?.add("plum");
//!
//! assert_eq!(
//!     fruits.keys(),
//!     vec![Key::Int(0), Key::Int(1), Key::from("green"), Key::Int(2)]
//! );
//! assert_eq!(fruits.get("green")?, &Value::from("kiwi"));
//! assert_eq!(fruits.join(", "), "apple, pear, kiwi, plum");
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every error is reported to the configured
//! [`DiagnosticSink`](crate::DiagnosticSink) before it is returned, and a
//! failed call never leaves the collection partially modified.

use crate::error::{Error, Result};
use crate::options::CollectionOptions;
use crate::sink::Level;
use crate::{Key, OrderedMap, Value};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered collection of key-value entries.
///
/// Keys are unique and may mix integers and strings. Values appended without a
/// key get the next free integer key (see [`OrderedMap`]).
#[derive(Clone, Default)]
pub struct Collection {
    items: OrderedMap,
    options: CollectionOptions,
}

impl Collection {
    /// Creates an empty collection with default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Collection;
    ///
    /// let collection = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with the given options.
    #[must_use]
    pub fn with_options(options: CollectionOptions) -> Self {
        Collection {
            items: OrderedMap::new(),
            options,
        }
    }

    /// Creates a collection holding a copy of every entry of `source`.
    ///
    /// The copy shares `source`'s options and its next auto key.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from(source: &Collection) -> Self {
        source.clone()
    }

    /// Creates a collection seeded with `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Collection, Key, OrderedMap, Value};
    ///
    /// let mut items = OrderedMap::new();
    /// items.insert(Key::from("name"), Value::from("Alice"));
    /// items.push(Value::from(30));
    ///
    /// let collection = Collection::of(items);
    /// assert_eq!(collection.length(), 2);
    /// ```
    #[must_use]
    pub fn of(items: OrderedMap) -> Self {
        Collection {
            items,
            options: CollectionOptions::default(),
        }
    }

    /// Builds a collection sharing this one's options.
    fn derive(&self, items: OrderedMap) -> Self {
        Collection {
            items,
            options: self.options.clone(),
        }
    }

    /// Sends `err` to the diagnostic sink and hands it back.
    pub(crate) fn report(&self, err: Error) -> Error {
        let message = format!("{} Code : {}", err, err.code());
        self.options
            .sink
            .write(Level::Error, &self.options.category, &message);
        err
    }

    /// Returns the options of this collection.
    #[must_use]
    pub fn options(&self) -> &CollectionOptions {
        &self.options
    }

    /// Returns the underlying entries without copying them.
    #[must_use]
    pub fn entries(&self) -> &OrderedMap {
        &self.items
    }

    /// Returns `true` if the collection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn length(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`length`](Self::length).
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.length()
    }

    /// Alias of [`length`](Self::length).
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.length()
    }

    /// Sums every integer value. Other values are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Collection;
    ///
    /// let mut numbers = Collection::new();
    /// numbers.add(10).add(15).add("five").add(2.5).add(5);
    /// assert_eq!(numbers.sum(), 30);
    /// ```
    #[must_use]
    pub fn sum(&self) -> i64 {
        self.sum_with(None)
    }

    /// Sums the integers stored under `key` in nested values.
    ///
    /// Top-level integer values are still counted; nested values without an
    /// integer under `key` contribute nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Collection, Value};
    ///
    /// let mut orders = Collection::new();
    /// orders
    ///     .add(collection! { "qty" => 2, "price" => 10 })
    ///     .add(collection! { "qty" => 3, "price" => "n/a" });
    ///
    /// assert_eq!(orders.sum_by("qty"), 5);
    /// assert_eq!(orders.sum_by("price"), 10);
    /// ```
    #[must_use]
    pub fn sum_by(&self, key: impl Into<Key>) -> i64 {
        self.sum_with(Some(&key.into()))
    }

    fn sum_with(&self, key: Option<&Key>) -> i64 {
        self.items.values().fold(0i64, |total, item| {
            let amount = match (item.entries(), key) {
                (Some(nested), Some(key)) => nested.get(key).and_then(Value::as_i64),
                _ => item.as_i64(),
            };
            total.saturating_add(amount.unwrap_or(0))
        })
    }

    /// Returns `true` if some entry's value equals `value`.
    #[must_use]
    pub fn contains(&self, value: impl Into<Value>) -> bool {
        let value = value.into();
        self.items.values().any(|v| *v == value)
    }

    /// Returns `true` if some string value matches the regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` does not compile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Collection;
    ///
    /// let mut tags = Collection::new();
    /// tags.add("rust-2021").add(2024);
    ///
    /// assert!(tags.contains_with_regex(r"^rust-\d+$").unwrap());
    /// assert!(!tags.contains_with_regex(r"^2024$").unwrap());
    /// assert!(tags.contains_with_regex("(").is_err());
    /// ```
    pub fn contains_with_regex(&self, pattern: &str) -> Result<bool> {
        let re = Regex::new(pattern)
            .map_err(|e| self.report(Error::invalid_pattern(pattern, &e.to_string())))?;
        Ok(self.contains_matching(&re))
    }

    /// Returns `true` if some string value matches `re`.
    #[must_use]
    pub fn contains_matching(&self, re: &Regex) -> bool {
        self.find(|value, _, _| value.as_str().is_some_and(|s| re.is_match(s)))
            .is_some()
    }

    /// Returns `true` if some string value contains `needle`.
    ///
    /// An empty `needle` matches any string value.
    #[must_use]
    pub fn contains_string(&self, needle: &str) -> bool {
        self.find(|value, _, _| value.as_str().is_some_and(|s| s.contains(needle)))
            .is_some()
    }

    /// Returns `true` if an entry has exactly this key.
    #[must_use]
    pub fn key_exists(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Returns all keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.items.keys().cloned().collect()
    }

    /// Returns a copy of every entry.
    #[must_use]
    pub fn get_all(&self) -> OrderedMap {
        self.items.clone()
    }

    /// Alias of [`get_all`](Self::get_all).
    #[inline]
    #[must_use]
    pub fn all(&self) -> OrderedMap {
        self.get_all()
    }

    /// Returns the value of the earliest entry.
    #[must_use]
    pub fn get_first(&self) -> Option<&Value> {
        self.items.first().map(|(_, v)| v)
    }

    /// Alias of [`get_first`](Self::get_first).
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.get_first()
    }

    /// Returns the value of the latest entry in insertion order.
    ///
    /// This is not necessarily the entry with the highest key.
    #[must_use]
    pub fn get_last(&self) -> Option<&Value> {
        self.items.last().map(|(_, v)| v)
    }

    /// Alias of [`get_last`](Self::get_last).
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.get_last()
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyInvalid`] if there is no such key.
    pub fn get(&self, key: impl Into<Key>) -> Result<&Value> {
        let key = key.into();
        match self.items.get(&key) {
            Some(value) => Ok(value),
            None => Err(self.report(Error::key_invalid(&key))),
        }
    }

    /// Returns the first value for which `predicate(value, key, entries)` holds.
    ///
    /// Stops at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Collection, Value};
    ///
    /// let mut letters = Collection::new();
    /// letters.add("a").add("b").add("c");
    ///
    /// let found = letters.find(|value, _, _| value.as_str() == Some("b"));
    /// assert_eq!(found, Some(&Value::from("b")));
    /// assert_eq!(letters.find(|value, _, _| value.as_str() == Some("x")), None);
    /// ```
    pub fn find<F>(&self, mut predicate: F) -> Option<&Value>
    where
        F: FnMut(&Value, &Key, &OrderedMap) -> bool,
    {
        self.items
            .iter()
            .find(|&(key, value)| predicate(value, key, &self.items))
            .map(|(_, value)| value)
    }

    /// Concatenates every value with `separator` in between.
    ///
    /// Values are coerced with their `Display` form; nested values render as
    /// `"Array"`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.items
            .iter()
            .map(|(key, value)| {
                if value.is_nested() {
                    tracing::warn!(%key, "Array to string conversion");
                }
                value.to_string()
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Appends `value` under the next free integer key.
    ///
    /// When no integer key is left (after `i64::MAX` was used) the value is
    /// not added and [`Error::NextKeyUnavailable`] goes to the diagnostic sink.
    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        self.append(value.into());
        self
    }

    fn append(&mut self, value: Value) {
        if self.items.push(value).is_none() {
            self.report(Error::NextKeyUnavailable);
        }
    }

    /// Appends `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyAlreadyAdded`] if `key` is already present; the
    /// collection is left unchanged.
    pub fn add_with_key(&mut self, value: impl Into<Value>, key: impl Into<Key>) -> Result<&mut Self> {
        let key = key.into();
        if self.items.contains_key(&key) {
            return Err(self.report(Error::key_already_added(&key)));
        }
        self.items.insert(key, value.into());
        Ok(self)
    }

    /// Overwrites the value under an existing `key`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyInvalid`] if there is no such key.
    pub fn replace(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<&mut Self> {
        let key = key.into();
        match self.items.get_mut(&key) {
            Some(slot) => {
                *slot = value.into();
                Ok(self)
            }
            None => Err(self.report(Error::key_invalid(&key))),
        }
    }

    /// Removes an entry by key, or every entry holding an equal value.
    ///
    /// A key match wins: only that one entry is removed. Otherwise every entry
    /// whose value equals `key_or_value` is removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyInvalid`] if neither a key nor a value matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// collection.add("foo").add("foo2").add("foo");
    ///
    /// collection.drop(1).unwrap();        // by key
    /// assert_eq!(collection.length(), 2);
    ///
    /// collection.drop("foo").unwrap();    // by value, every match
    /// assert!(collection.is_empty());
    ///
    /// assert_eq!(collection.drop("foo").unwrap_err().code(), 101);
    /// ```
    pub fn drop(&mut self, key_or_value: impl Into<Value>) -> Result<&mut Self> {
        let target = key_or_value.into();

        if let Some(key) = target.as_key() {
            if self.items.remove(&key).is_some() {
                return Ok(self);
            }
        }

        if !self.items.values().any(|v| *v == target) {
            return Err(self.report(Error::key_invalid(&target)));
        }
        self.items.retain(|_, v| *v != target);
        Ok(self)
    }

    /// Keeps only the entries in the ordinal range, without renumbering keys.
    ///
    /// `start` counts from the end when negative. `length` of `None` runs to
    /// the end; a negative `length` stops that many entries before the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Collection, Key};
    ///
    /// let mut collection = Collection::new();
    /// collection.add("foo").add("bar").add("foo2").add("bar2");
    ///
    /// collection.slice(1, Some(2));
    /// assert_eq!(collection.keys(), vec![Key::Int(1), Key::Int(2)]);
    ///
    /// collection.slice(-1, None);
    /// assert_eq!(collection.keys(), vec![Key::Int(2)]);
    /// ```
    pub fn slice(&mut self, start: i64, length: Option<i64>) -> &mut Self {
        self.items = self.items.slice(start, length);
        self
    }

    /// Removes every entry.
    pub fn purge(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Copies in the entries of `other` whose keys are not present yet.
    ///
    /// Existing entries are never overwritten.
    pub fn push(&mut self, other: &Collection) -> &mut Self {
        for (key, value) in other.entries() {
            if !self.items.contains_key(key) {
                self.items.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Appends every value of `other` under fresh integer keys.
    ///
    /// Values that find no free integer key are skipped and reported like in
    /// [`add`](Self::add).
    pub fn push_only_values(&mut self, other: &Collection) -> &mut Self {
        for value in other.entries().values() {
            self.append(value.clone());
        }
        self
    }

    /// Copies in every entry of `other`, overwriting on key collision.
    pub fn merge(&mut self, other: &Collection) -> &mut Self {
        self.merge_map(other.entries());
        self
    }

    fn merge_map(&mut self, other: &OrderedMap) {
        for (key, value) in other {
            self.items.insert(key.clone(), value.clone());
        }
    }

    /// Returns a new collection with the entries in reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Collection, Key};
    ///
    /// # fn main() -> keyed_collection::Result<()> {
    /// let mut collection = Collection::new();
    /// collection.add_with_key("foo", "bar")?.add_with_key("foo2", "bar2")?;
    ///
    /// let reversed = collection.reverse();
    /// assert_eq!(reversed.keys(), vec![Key::from("bar2"), Key::from("bar")]);
    /// assert_eq!(collection.keys(), vec![Key::from("bar"), Key::from("bar2")]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Collection {
        self.derive(self.items.reversed())
    }

    /// Returns a new collection with `transform(value, key)` applied to every value.
    ///
    /// Keys and order are unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Collection, Value};
    ///
    /// let mut collection = Collection::new();
    /// collection.add("foo").add("bar");
    ///
    /// let shouted = collection.map(|value, _| {
    ///     Value::from(format!("{}!", value.to_string().to_uppercase()))
    /// });
    /// assert_eq!(shouted.join(" "), "FOO! BAR!");
    /// assert_eq!(collection.join(" "), "foo bar");
    /// ```
    #[must_use]
    pub fn map<F>(&self, mut transform: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> Value,
    {
        let items = self
            .items
            .iter()
            .map(|(key, value)| (key.clone(), transform(value, key)))
            .collect();
        self.derive(items)
    }

    /// Returns a new collection with the entries whose value satisfies `predicate`.
    ///
    /// Keys are kept as they are, gaps included.
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Collection
    where
        F: FnMut(&Value) -> bool,
    {
        let items = self
            .items
            .iter()
            .filter(|&(_, value)| predicate(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        self.derive(items)
    }

    /// Returns a new collection with every nested map or collection expanded.
    ///
    /// Nested entries are merged into the result in order, so a later entry
    /// overwrites an earlier one with the same key. Scalar values keep their
    /// own key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Key, Value};
    ///
    /// let nested = collection! {
    ///     "a" => 1,
    ///     "inner" => collection! { "b" => 2, "a" => 3 },
    /// };
    ///
    /// let flat = nested.flatten();
    /// assert_eq!(flat.keys(), vec![Key::from("a"), Key::from("b")]);
    /// assert_eq!(flat.get("a").unwrap(), &Value::from(3));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Collection {
        let mut flat = self.derive(OrderedMap::new());
        flatten_into(&mut flat, &self.items);
        flat
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.items.iter()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.items.values()
    }
}

fn flatten_into(target: &mut Collection, source: &OrderedMap) {
    for (key, value) in source {
        match value {
            Value::Collection(nested) => flatten_into(target, nested.entries()),
            Value::Map(nested) => flatten_into(target, nested),
            scalar => {
                target.items.insert(key.clone(), scalar.clone());
            }
        }
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.items)
            .field("category", &self.options.category)
            .finish()
    }
}

/// Collections are equal when their entries are; options are ignored.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<(Key, Value)> for Collection {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Collection::of(iter.into_iter().collect())
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Collection::of(iter.into_iter().collect())
    }
}

impl From<&Collection> for Collection {
    fn from(source: &Collection) -> Self {
        source.clone()
    }
}

impl Extend<Value> for Collection {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        for value in iter {
            self.append(value);
        }
    }
}

impl Serialize for Collection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        OrderedMap::deserialize(deserializer).map(Collection::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagnosticSink;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(Level, String, String)>>);

    impl DiagnosticSink for Recorder {
        fn write(&self, level: Level, category: &str, message: &str) {
            self.0
                .lock()
                .unwrap()
                .push((level, category.to_string(), message.to_string()));
        }
    }

    fn recorded() -> (Arc<Recorder>, Collection) {
        let recorder = Arc::new(Recorder::default());
        let options = CollectionOptions::new()
            .with_sink(recorder.clone())
            .with_category("TEST");
        (recorder, Collection::with_options(options))
    }

    #[test]
    fn test_auto_keys_are_sequential() {
        let mut collection = Collection::new();
        for i in 0..5 {
            collection.add(i * 10);
        }
        assert_eq!(
            collection.keys(),
            (0..5).map(Key::Int).collect::<Vec<_>>()
        );
        assert_eq!(collection.length(), 5);
    }

    #[test]
    fn test_auto_key_after_explicit_int_key() {
        let mut collection = Collection::new();
        collection.add("a");
        collection.add_with_key("b", 10).unwrap();
        collection.add("c");
        assert_eq!(collection.keys(), vec![Key::Int(0), Key::Int(10), Key::Int(11)]);
    }

    #[test]
    fn test_auto_key_not_reused_after_drop() {
        let mut collection = Collection::new();
        collection.add("a").add("b");
        collection.drop(1).unwrap();
        collection.add("c");
        assert_eq!(collection.keys(), vec![Key::Int(0), Key::Int(2)]);
    }

    #[test]
    fn test_add_after_max_key_keeps_existing_entry() {
        let (recorder, mut collection) = recorded();
        collection.add_with_key("max", i64::MAX).unwrap();
        collection.add("next");

        assert_eq!(collection.length(), 1);
        assert_eq!(collection.get(i64::MAX).unwrap(), &Value::from("max"));

        let lines = recorder.0.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::Error);
        assert_eq!(lines[0].1, "TEST");
        assert_eq!(
            lines[0].2,
            "Cannot add element, the next integer key is unavailable. Code : 104"
        );
    }

    #[test]
    fn test_push_only_values_after_max_key_skips_values() {
        let (recorder, mut collection) = recorded();
        collection.add_with_key("max", i64::MAX).unwrap();

        let mut other = Collection::new();
        other.add("a").add("b");
        collection.push_only_values(&other);

        assert_eq!(collection.keys(), vec![Key::Int(i64::MAX)]);
        assert_eq!(recorder.0.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_purge_restores_auto_keys_after_max_key() {
        let mut collection = Collection::new();
        collection.add_with_key("max", i64::MAX).unwrap();
        collection.purge().add("a");
        assert_eq!(collection.keys(), vec![Key::Int(0)]);
    }

    #[test]
    fn test_from_trait_copies_entries_and_options() {
        let (_, mut source) = recorded();
        source.add("a");
        let copy: Collection = (&source).into();
        assert_eq!(copy, source);
        assert_eq!(copy.options().category, "TEST");
    }

    #[test]
    fn test_purge_resets_auto_keys() {
        let mut collection = Collection::new();
        collection.add("a").add("b").purge().add("c");
        assert_eq!(collection.keys(), vec![Key::Int(0)]);
    }

    #[test]
    fn test_duplicate_key_reports_and_keeps_state() {
        let (recorder, mut collection) = recorded();
        collection.add_with_key("value", "key").unwrap();

        let err = collection.add_with_key("value2", "key").unwrap_err();
        assert_eq!(err.code(), 100);
        assert_eq!(collection.get("key").unwrap(), &Value::from("value"));
        assert_eq!(collection.length(), 1);

        let log = recorder.0.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].0, Level::Error);
        assert_eq!(log[0].1, "TEST");
        assert_eq!(log[0].2, "Key key already added. Code : 100");
    }

    #[test]
    fn test_numeric_string_key_collides_with_int_key() {
        let mut collection = Collection::new();
        collection.add("zero");
        assert!(collection.add_with_key("again", "0").is_err());
        assert!(collection.key_exists("0"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut collection = Collection::new();
        collection.add("foo").add("bar");
        collection.replace(0, "fooUpdated").unwrap();

        assert_eq!(collection.get_first(), Some(&Value::from("fooUpdated")));
        assert_eq!(collection.keys(), vec![Key::Int(0), Key::Int(1)]);
    }

    #[test]
    fn test_replace_missing_key() {
        let (recorder, mut collection) = recorded();
        let err = collection.replace("foobar", 10).unwrap_err();
        assert_eq!(err.code(), 101);
        assert!(collection.is_empty());
        assert_eq!(
            recorder.0.lock().unwrap()[0].2,
            "The key foobar does not exist in the collection. Code : 101"
        );
    }

    #[test]
    fn test_drop_prefers_key_over_value() {
        let mut collection = Collection::new();
        // key 1 holds "x", and the value 1 sits under key 0
        collection.add(1).add("x");
        collection.drop(1).unwrap();
        assert_eq!(collection.keys(), vec![Key::Int(0)]);
        assert_eq!(collection.get_first(), Some(&Value::from(1)));
    }

    #[test]
    fn test_drop_value_removes_every_match() {
        let mut collection = Collection::new();
        collection.add("a").add("b").add("a").add("c");
        collection.drop("a").unwrap();
        assert_eq!(collection.keys(), vec![Key::Int(1), Key::Int(3)]);
    }

    #[test]
    fn test_drop_missing_reports() {
        let (recorder, mut collection) = recorded();
        collection.add("a");
        assert_eq!(collection.drop("foobar").unwrap_err().code(), 101);
        assert_eq!(collection.length(), 1);
        assert_eq!(recorder.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_get_last_is_insertion_order() {
        let mut collection = Collection::new();
        collection.add_with_key("high", 100).unwrap();
        collection.add_with_key("low", 1).unwrap();
        assert_eq!(collection.get_last(), Some(&Value::from("low")));
        assert_eq!(collection.last(), Some(&Value::from("low")));
    }

    #[test]
    fn test_first_last_empty() {
        let collection = Collection::new();
        assert_eq!(collection.get_first(), None);
        assert_eq!(collection.get_last(), None);
    }

    #[test]
    fn test_find_short_circuits() {
        let mut collection = Collection::new();
        collection.add(1).add(2).add(3).add(4);

        let mut calls = 0;
        let found = collection.find(|value, _, _| {
            calls += 1;
            value.as_i64() == Some(2)
        });
        assert_eq!(found, Some(&Value::from(2)));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_find_sees_keys_and_entries() {
        let mut collection = Collection::new();
        collection.add_with_key("v", "k").unwrap().add("w");

        let found = collection.find(|_, key, all| *key == Key::Int(0) && all.len() == 2);
        assert_eq!(found, Some(&Value::from("w")));
    }

    #[test]
    fn test_sum_skips_non_integers() {
        let mut collection = Collection::new();
        collection.add(10).add("20").add(1.5).add(true).add(5);
        assert_eq!(collection.sum(), 15);
        assert_eq!(Collection::new().sum(), 0);
    }

    #[test]
    fn test_sum_by_counts_top_level_integers() {
        let mut nested = OrderedMap::new();
        nested.insert(Key::from("n"), Value::from(4));

        let mut collection = Collection::new();
        collection.add(Value::Map(nested)).add(6).add(Value::Map(OrderedMap::new()));
        assert_eq!(collection.sum_by("n"), 10);
        assert_eq!(collection.sum(), 6);
    }

    #[test]
    fn test_contains_uses_value_equality() {
        let mut collection = Collection::new();
        collection.add("foo").add(2);
        assert!(collection.contains("foo"));
        assert!(collection.contains(2.0));
        assert!(!collection.contains("bar"));
    }

    #[test]
    fn test_contains_string() {
        let mut collection = Collection::new();
        collection.add("hello world").add(42);
        assert!(collection.contains_string("lo wo"));
        assert!(collection.contains_string(""));
        assert!(!collection.contains_string("42"));
        assert!(!Collection::new().contains_string(""));
    }

    #[test]
    fn test_invalid_regex_reports() {
        let (recorder, collection) = recorded();
        let err = collection.contains_with_regex("[").unwrap_err();
        assert_eq!(err.code(), 103);
        assert_eq!(recorder.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_join_coercion() {
        let mut collection = Collection::new();
        collection
            .add("a")
            .add(1)
            .add(2.5)
            .add(true)
            .add(false)
            .add(Value::Null)
            .add(Collection::new());
        assert_eq!(collection.join("-"), "a-1-2.5-1---Array");
        assert_eq!(Collection::new().join(","), "");
    }

    #[test]
    fn test_slice_negative_length() {
        let mut collection = Collection::new();
        collection.add("a").add("b").add("c").add("d");
        collection.slice(1, Some(-1));
        assert_eq!(collection.keys(), vec![Key::Int(1), Key::Int(2)]);
    }

    #[test]
    fn test_slice_past_end_empties() {
        let mut collection = Collection::new();
        collection.add("a");
        collection.slice(5, None);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_push_only_values_ignores_keys() {
        let mut collection = Collection::new();
        collection.add("foo").add("bar");

        let mut other = Collection::new();
        other.add_with_key("test", "named").unwrap();
        collection.push_only_values(&other);

        assert_eq!(collection.keys(), vec![Key::Int(0), Key::Int(1), Key::Int(2)]);
        assert_eq!(collection.get_last(), Some(&Value::from("test")));
    }

    #[test]
    fn test_map_passes_keys() {
        let mut collection = Collection::new();
        collection.add_with_key("x", "k").unwrap();
        let mapped = collection.map(|value, key| Value::from(format!("{}={}", key, value)));
        assert_eq!(mapped.get("k").unwrap(), &Value::from("k=x"));
    }

    #[test]
    fn test_filter_keeps_gaps() {
        let mut collection = Collection::new();
        collection.add(15).add(20).add(25).add(30);
        let even = collection.filter(|value| value.as_i64().is_some_and(|n| n % 2 == 0));
        assert_eq!(even.keys(), vec![Key::Int(1), Key::Int(3)]);
        assert_eq!(collection.length(), 4);
    }

    #[test]
    fn test_flatten_scalar_keys_collide() {
        let mut collection = Collection::new();
        collection.add("a").add(Value::from(vec![Value::from("x"), Value::from("y")]));
        let flat = collection.flatten();
        // the nested key 0 overwrites the outer entry at key 0
        assert_eq!(flat.keys(), vec![Key::Int(0), Key::Int(1)]);
        assert_eq!(flat.get(0).unwrap(), &Value::from("x"));
        assert_eq!(flat.get(1).unwrap(), &Value::from("y"));
    }

    #[test]
    fn test_flatten_deep() {
        let mut inner = Collection::new();
        inner.add_with_key(1, "deep").unwrap();
        let mut middle = Collection::new();
        middle.add_with_key(inner, "inner").unwrap();
        let mut outer = Collection::new();
        outer.add_with_key(middle, "middle").unwrap().add_with_key(2, "top").unwrap();

        let flat = outer.flatten();
        assert_eq!(flat.keys(), vec![Key::from("deep"), Key::from("top")]);
        assert!(outer.key_exists("middle"));
    }

    #[test]
    fn test_derived_collections_inherit_options() {
        let (recorder, mut collection) = recorded();
        collection.add("a");

        let reversed = collection.reverse();
        assert_eq!(reversed.options().category, "TEST");
        assert!(reversed.get("missing").is_err());
        assert_eq!(recorder.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_of_uses_default_options() {
        let collection = Collection::of(OrderedMap::new());
        assert_eq!(collection.options().category, "COLLECTION");
    }

    #[test]
    fn test_equality_ignores_options() {
        let (_, mut a) = recorded();
        a.add("x");
        let mut b = Collection::new();
        b.add("x");
        assert_eq!(a, b);
    }
}
