use keyed_collection::{collection, Collection, Key, Number, Value};

#[test]
fn test_collection_macro_empty() {
    let empty = collection!();
    assert_eq!(empty, Collection::new());
    assert!(empty.is_empty());
}

#[test]
fn test_collection_macro_values() {
    let list = collection![1, "hello", true, 2.5];
    assert_eq!(
        list.keys(),
        vec![Key::Int(0), Key::Int(1), Key::Int(2), Key::Int(3)]
    );
    assert_eq!(list.get(0).unwrap(), &Value::Number(Number::Integer(1)));
    assert_eq!(list.get(1).unwrap(), &Value::String("hello".to_string()));
    assert_eq!(list.get(2).unwrap(), &Value::Bool(true));
    assert_eq!(list.get(3).unwrap(), &Value::Number(Number::Float(2.5)));
}

#[test]
fn test_collection_macro_keyed() {
    let keyed = collection! {
        "name" => "Alice",
        "age" => 30,
        10 => "ten",
    };

    assert_eq!(
        keyed.keys(),
        vec![Key::from("name"), Key::from("age"), Key::Int(10)]
    );

    // the auto key continues after the explicit integer key
    let mut keyed = keyed;
    keyed.add("next");
    assert_eq!(keyed.keys().last(), Some(&Key::Int(11)));
}

#[test]
fn test_collection_macro_repeated_key() {
    let keyed = collection! { "a" => 1, "b" => 2, "a" => 3 };
    assert_eq!(keyed.keys(), vec![Key::from("a"), Key::from("b")]);
    assert_eq!(keyed.get("a").unwrap(), &Value::from(3));
}

#[test]
fn test_collection_macro_nested() {
    let nested = collection! {
        "user" => collection! { "id" => 123, "active" => true },
        "tags" => collection!["admin", "developer"],
    };

    let user = nested.get("user").unwrap().as_collection().unwrap();
    assert_eq!(user.get("id").unwrap(), &Value::from(123));

    let tags = nested.get("tags").unwrap().as_collection().unwrap();
    assert_eq!(tags.join(","), "admin,developer");
}

#[test]
fn test_collection_macro_expressions() {
    let base = 20;
    let name = String::from("computed");
    let keyed = collection! { name.clone() => base + 1 };
    assert_eq!(keyed.get("computed").unwrap(), &Value::from(21));
}
