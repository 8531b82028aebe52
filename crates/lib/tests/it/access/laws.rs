//! Laws that tie the operations together, checked over a spread of paths.

use keypath::{Container, Value};

use crate::helpers::*;

#[test]
fn test_has_agrees_with_get() {
    let accessor = accessor();
    let tree = settings_tree();

    for path in probe_paths() {
        let get = accessor.get(&tree, path);
        assert_eq!(
            accessor.has(&tree, path),
            get.is_ok(),
            "has/get disagree on {path:?}"
        );
        if let Err(err) = get {
            assert!(err.is_not_found(), "unexpected error for {path:?}: {err}");
        }
    }
}

#[test]
fn test_has_checks_nested_presence() {
    let accessor = accessor();
    // Every segment name exists at the root, but not along the path
    let doc = Container::new()
        .with("a", Container::new().with("x", 1))
        .with("b", 2);

    assert!(!accessor.has(&doc, "a.b"));
    assert!(accessor.has(&doc, "a.x"));
    assert!(!accessor.has(&doc, "b.a"));
}

#[test]
fn test_set_then_get_returns_scalar() {
    let accessor = accessor();
    let scalars = [
        Value::from("text"),
        Value::from(42),
        Value::from(-1.25),
        Value::from(true),
    ];

    for path in ["k", "a.b", "a.c.d", r"e\.f.g", "list.0", "x..y"] {
        for value in &scalars {
            let mut doc = settings_tree();
            accessor.set(&mut doc, path, value.clone()).unwrap();
            assert_eq!(accessor.get(&doc, path).unwrap(), value, "path {path:?}");
        }
    }
}

#[test]
fn test_set_then_get_through_existing_scalars() {
    let accessor = accessor();
    let mut doc = settings_tree();

    accessor.set(&mut doc, "app.name.first", "d").unwrap();

    assert_text(&accessor, &doc, "app.name.first", "d");
}

#[test]
fn test_remove_then_has_is_false() {
    let accessor = accessor();

    for path in probe_paths() {
        let mut tree = settings_tree();
        if accessor.remove(&mut tree, path).is_ok() {
            assert!(!accessor.has(&tree, path), "{path:?} still present");
        } else {
            assert!(!accessor.has(&settings_tree(), path));
        }
    }
}

#[test]
fn test_escape_then_set_addresses_one_key() {
    let accessor = accessor();
    let keys = ["plain", "dotted.key", ".leading", "trailing.", "a..b"];

    let mut doc = Container::new();
    for key in keys {
        accessor
            .set(&mut doc, &format!("root.{}", accessor.escape(key)), key)
            .unwrap();
    }

    let root = accessor.get(&doc, "root").unwrap().as_map().unwrap();
    assert_eq!(root.len(), keys.len());
    for (stored, key) in root.keys().zip(keys) {
        assert_eq!(stored.to_string(), key);
    }
}
