//! A tour of the collection operations.
//!
//! Run with: cargo run --example basic

use keyed_collection::{collection, Collection, CollectionOptions, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    // Errors are logged through `tracing` before being returned
    let mut cart = Collection::with_options(CollectionOptions::tracing().with_category("CART"));
    cart.add(collection! { "sku" => "A1", "qty" => 2 })
        .add(collection! { "sku" => "B2", "qty" => 1 });
    cart.add_with_key(collection! { "sku" => "C3", "qty" => 4 }, "gift")?;

    println!("Items: {}", cart.length());
    println!("Total quantity: {}", cart.sum_by("qty"));
    println!("Keys: {:?}", cart.keys());

    if let Err(err) = cart.add_with_key(Value::Null, "gift") {
        println!("Rejected duplicate (code {}): {}", err.code(), err);
    }

    // Derived collections leave the original untouched
    let skus = cart.map(|item, _| {
        item.entries()
            .and_then(|entries| entries.get(&"sku".into()).cloned())
            .unwrap_or_default()
    });
    println!("SKUs: {}", skus.join(", "));
    println!("Reversed SKUs: {}", skus.reverse().join(", "));

    // Alias dispatch by name
    for name in ["count", "first", "size", "missing"] {
        match cart.call(name) {
            Ok(value) => println!("call({}) -> {}", name, serde_json::to_string(&value)?),
            Err(err) => println!("call({}) failed: {}", name, err),
        }
    }

    println!("Flattened: {}", serde_json::to_string(&cart.flatten())?);

    Ok(())
}
