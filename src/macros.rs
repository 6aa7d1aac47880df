/// Builds a [`Collection`](crate::Collection) from a list of values or of
/// `key => value` pairs.
///
/// Values go through [`Value::from`](crate::Value) and keys through
/// [`Key::from`](crate::Key). In the keyed form a repeated key keeps its first
/// position and takes the last value.
///
/// ```rust
/// use keyed_collection::{collection, Key, Value};
///
/// let list = collection!["foo", "bar"];
/// assert_eq!(list.keys(), vec![Key::Int(0), Key::Int(1)]);
///
/// let keyed = collection! { "name" => "Alice", 7 => 30 };
/// assert_eq!(keyed.get(7).unwrap(), &Value::from(30));
/// ```
#[macro_export]
macro_rules! collection {
    // Handle empty collection
    () => {
        $crate::Collection::new()
    };

    // Handle key => value pairs
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut items = $crate::OrderedMap::new();
        $(
            items.insert($crate::Key::from($key), $crate::Value::from($value));
        )+
        $crate::Collection::of(items)
    }};

    // Handle plain values with auto keys
    ($($value:expr),+ $(,)?) => {{
        let mut items = $crate::OrderedMap::new();
        $(
            items.push($crate::Value::from($value));
        )+
        $crate::Collection::of(items)
    }};
}
