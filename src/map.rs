//! Ordered key-value storage behind every collection.
//!
//! This module provides [`OrderedMap`], a wrapper around [`IndexMap`] that
//! behaves like a native ordered array: entries keep their insertion order,
//! integer and string keys can be mixed, and values appended without a key get
//! the next free integer key.
//!
//! ## Auto Keys
//!
//! The map tracks the next free integer key. It starts at `0`, and inserting a
//! non-negative integer key `k` at or above it moves it to `k + 1`. Negative
//! keys never move it, and removing entries never lowers it. Once `i64::MAX`
//! has been used as a key there is no next key and [`OrderedMap::push`]
//! refuses to append:
//!
//! ```rust
//! use keyed_collection::{Key, OrderedMap, Value};
//!
//! let mut map = OrderedMap::new();
//! assert_eq!(map.push(Value::from("a")), Some(Key::Int(0)));
//!
//! map.insert(Key::Int(10), Value::from("b"));
//! assert_eq!(map.push(Value::from("c")), Some(Key::Int(11)));
//!
//! map.remove(&Key::Int(11));
//! assert_eq!(map.push(Value::from("d")), Some(Key::Int(12)));
//!
//! map.insert(Key::Int(i64::MAX), Value::from("e"));
//! assert_eq!(map.push(Value::from("f")), None);
//! assert_eq!(map.len(), 4);
//! ```
//!
//! ## Equality
//!
//! Two maps are equal when they hold the same entries in the same order. The
//! auto-key counter is not part of equality.

use crate::{Key, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An insertion-ordered map of [`Key`] to [`Value`] with auto-key tracking.
#[derive(Clone, Debug)]
pub struct OrderedMap {
    entries: IndexMap<Key, Value>,
    /// `None` once `i64::MAX` has been taken.
    next_index: Option<i64>,
}

impl OrderedMap {
    /// Creates an empty `OrderedMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        OrderedMap {
            entries: IndexMap::new(),
            next_index: Some(0),
        }
    }

    /// Creates an empty `OrderedMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            entries: IndexMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Inserts a key-value pair.
    ///
    /// An existing key keeps its position and gets the new value; the old value
    /// is returned. A new key is appended at the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Key, OrderedMap, Value};
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(map.insert(Key::from("key"), Value::from(42)).is_none());
    /// assert!(map.insert(Key::from("key"), Value::from(43)).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        if let Key::Int(i) = key {
            if self.next_index.is_some_and(|next| i >= next) {
                self.next_index = i.checked_add(1);
            }
        }
        self.entries.insert(key, value)
    }

    /// Appends a value under the next free integer key and returns that key.
    ///
    /// Returns `None` and leaves the map unchanged when no integer key is left.
    pub fn push(&mut self, value: Value) -> Option<Key> {
        let key = Key::Int(self.next_index?);
        self.insert(key.clone(), value);
        Some(key)
    }

    /// Returns the key the next [`push`](Self::push) would use, if any.
    #[must_use]
    pub fn next_index(&self) -> Option<i64> {
        self.next_index
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns `true` if the map holds an entry for this key.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes an entry, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        self.entries.retain(|k, v| keep(k, &*v));
    }

    /// Removes every entry and resets the auto-key counter.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_index = Some(0);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first entry in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first()
    }

    /// Returns the last entry in insertion order.
    #[must_use]
    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.entries.last()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Returns the entries in reverse order, keys unchanged.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.iter()
            .rev()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns the entries between ordinal positions, keys unchanged.
    ///
    /// `offset` counts from the end when negative. `length` of `None` runs to
    /// the end; a negative `length` stops that many entries before the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Key, OrderedMap, Value};
    ///
    /// let map: OrderedMap = ["a", "b", "c", "d"].into_iter().map(Value::from).collect();
    ///
    /// let keys = |m: &OrderedMap| m.keys().cloned().collect::<Vec<_>>();
    /// assert_eq!(keys(&map.slice(1, Some(2))), vec![Key::Int(1), Key::Int(2)]);
    /// assert_eq!(keys(&map.slice(-1, None)), vec![Key::Int(3)]);
    /// assert_eq!(keys(&map.slice(0, Some(-3))), vec![Key::Int(0)]);
    /// ```
    #[must_use]
    pub fn slice(&self, offset: i64, length: Option<i64>) -> Self {
        let (start, count) = slice_bounds(self.len(), offset, length);
        self.iter()
            .skip(start)
            .take(count)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Resolves array-slice arguments to a `(start, count)` pair over `len` items.
fn slice_bounds(len: usize, offset: i64, length: Option<i64>) -> (usize, usize) {
    let len = len as i64;
    if offset > len {
        return (0, 0);
    }
    let start = if offset < 0 {
        (len + offset).max(0)
    } else {
        offset
    };
    let remaining = len - start;
    let count = match length {
        None => remaining,
        Some(l) if l < 0 => (remaining + l).max(0),
        Some(l) => l.min(remaining),
    };
    (start as usize, count as usize)
}

impl Default for OrderedMap {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl PartialEq for OrderedMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl IntoIterator for OrderedMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(Key, Value)> for OrderedMap {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl FromIterator<Value> for OrderedMap {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl Extend<(Key, Value)> for OrderedMap {
    fn extend<T: IntoIterator<Item = (Key, Value)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Values arriving after the auto keys run out are discarded.
impl Extend<Value> for OrderedMap {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl Serialize for OrderedMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OrderedMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct OrderedMapVisitor;

        impl<'de> Visitor<'de> for OrderedMapVisitor {
            type Value = OrderedMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map or a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut map = OrderedMap::new();
                while let Some(elem) = seq.next_element::<Value>()? {
                    map.push(elem);
                }
                Ok(map)
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<Key, Value>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_any(OrderedMapVisitor)
    }
}
