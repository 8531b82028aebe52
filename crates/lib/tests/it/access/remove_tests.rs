use keypath::{Container, Key, Value};

use crate::helpers::*;

#[test]
fn test_remove_leaf() {
    let accessor = accessor();
    let mut tree = settings_tree();

    let removed = accessor.remove(&mut tree, "app.debug").unwrap();

    assert_eq!(removed, Value::Bool(false));
    assert!(!accessor.has(&tree, "app.debug"));
    assert_text(&accessor, &tree, "app.name", "demo");
}

#[test]
fn test_remove_subtree() {
    let accessor = accessor();
    let mut tree = settings_tree();

    let removed = accessor.remove(&mut tree, "servers").unwrap();

    assert_eq!(removed.as_map().map(Container::len), Some(2));
    for path in ["servers", "servers.0", "servers.1.host"] {
        assert!(!accessor.has(&tree, path), "{path} should be gone");
    }
}

#[test]
fn test_remove_keeps_sibling_order() {
    let accessor = accessor();
    let mut doc = Container::new().with("a", 1).with("b", 2).with("c", 3);

    accessor.remove(&mut doc, "b").unwrap();

    assert_json(&doc, r#"{"a":1,"c":3}"#);
}

#[test]
fn test_remove_missing_intermediate() {
    let accessor = accessor();
    let mut tree = settings_tree();
    let before = tree.clone();

    let err = accessor.remove(&mut tree, "app.missing.leaf").unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.key(), Some("missing"));
    assert_eq!(tree, before);
}

#[test]
fn test_remove_then_append_reuses_index() {
    let accessor = accessor();
    let mut doc = Container::new();
    for item in ["a", "b", "c"] {
        accessor.set(&mut doc, "list.<i>", item).unwrap();
    }

    accessor.remove(&mut doc, "list.2").unwrap();
    accessor.set(&mut doc, "list.<i>", "d").unwrap();
    accessor.remove(&mut doc, "list.0").unwrap();
    accessor.set(&mut doc, "list.<i>", "e").unwrap();

    // Only the largest integer key matters for the next slot
    let list = accessor.get(&doc, "list").unwrap().as_map().unwrap();
    let keys: Vec<Key> = list.keys().cloned().collect();
    assert_eq!(keys, vec![Key::Index(1), Key::Index(2), Key::Index(3)]);
    assert_text(&accessor, &doc, "list.2", "d");
    assert_text(&accessor, &doc, "list.3", "e");
}

#[test]
fn test_remove_escaped_key() {
    let accessor = accessor();
    let mut tree = settings_tree();

    accessor.remove(&mut tree, r"files.logo\.png").unwrap();

    assert_json(tree.get(&Key::from("files")).and_then(Value::as_map).unwrap(), "{}");
}
