use keypath::{Container, PathAccessor, Value};

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Creates an accessor with the default tokens
pub fn accessor() -> PathAccessor {
    PathAccessor::new()
}

/// Creates a small settings tree:
///
/// ```text
/// {
///   "app": {"name": "demo", "debug": false},
///   "servers": {"0": {"host": "a.example"}, "1": {"host": "b.example"}},
///   "files": {"logo.png": 512}
/// }
/// ```
pub fn settings_tree() -> Container {
    Container::new()
        .with(
            "app",
            Container::new().with("name", "demo").with("debug", false),
        )
        .with(
            "servers",
            Value::from(vec![
                Container::new().with("host", "a.example"),
                Container::new().with("host", "b.example"),
            ]),
        )
        .with("files", Container::new().with("logo.png", 512))
}

/// A spread of paths covering plain, nested, escaped, numeric and missing cases
pub fn probe_paths() -> Vec<&'static str> {
    vec![
        "",
        "app",
        "app.name",
        "app.debug",
        "app.missing",
        "app.name.deeper",
        "servers",
        "servers.0",
        "servers.1.host",
        "servers.2.host",
        "servers.01",
        "files",
        "files.logo",
        r"files.logo\.png",
        "files.logo.png",
        "..",
        "nope.nope",
    ]
}

// ==========================
// ASSERTION HELPERS
// ==========================

/// Assert that a container serializes to the expected JSON
pub fn assert_json(container: &Container, expected: &str) {
    assert_eq!(container.to_json_string(), expected, "container: {container}");
}

/// Assert that a path resolves to a text value
pub fn assert_text(accessor: &PathAccessor, container: &Container, path: &str, expected: &str) {
    match accessor.get(container, path) {
        Ok(Value::Text(actual)) => {
            assert_eq!(actual, expected, "Value mismatch for path '{path}'");
        }
        Ok(other) => panic!("Expected text value for path '{path}', got: {other:?}"),
        Err(err) => panic!("Path '{path}' did not resolve: {err}"),
    }
}
