//! PathConfig loading and its effect on accessor behavior

use keypath::{Container, ConfigError, Error, PathAccessor, PathConfig};

use crate::helpers::*;

#[test]
fn test_load_full_config_from_json() {
    let config = PathConfig::from_json_str(
        r#"{"separator": "::", "escape": "%%", "index_identifier": "+"}"#,
    )
    .unwrap();
    let accessor = PathAccessor::try_new(config).unwrap();
    let mut doc = Container::new();

    accessor.set(&mut doc, "crate::module::+", "first").unwrap();
    accessor.set(&mut doc, "crate::module::+", "second").unwrap();
    accessor.set(&mut doc, "crate::a%%::b", true).unwrap();

    assert_json(
        &doc,
        r#"{"crate":{"module":{"0":"first","1":"second"},"a::b":true}}"#,
    );
    assert_eq!(accessor.get_as::<&str>(&doc, "crate::module::1"), Some("second"));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = PathConfig::from_json_str(r#"{"separator": "/"}"#).unwrap();

    assert_eq!(config.separator(), "/");
    assert_eq!(config.escape(), "\\");
    assert_eq!(config.index_identifier(), "<i>");
    assert_eq!(PathConfig::from_json_str("{}").unwrap(), PathConfig::default());
}

#[test]
fn test_config_serializes_all_tokens() {
    let config = PathConfig::new().with_separator("/");
    let json = serde_json::to_string(&config).unwrap();

    assert_eq!(
        json,
        r#"{"separator":"/","escape":"\\","index_identifier":"<i>"}"#
    );
    assert_eq!(PathConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_malformed_config_is_parse_error() {
    let err = PathConfig::from_json_str(r#"{"separator": 5}"#).unwrap_err();

    assert!(err.is_config_error());
    assert_eq!(err.module(), "config");
    match err {
        Error::Config(inner) => assert!(inner.is_parse_error()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_try_new_rejects_ambiguous_tokens() {
    let cases = [
        (PathConfig::new().with_separator(""), "separator"),
        (PathConfig::new().with_escape(""), "escape"),
        (PathConfig::new().with_index_identifier(""), "index_identifier"),
    ];
    for (config, name) in cases {
        let err = PathAccessor::try_new(config).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::EmptyToken { name }));
    }

    let err = PathAccessor::try_new(PathConfig::new().with_escape(".")).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::AmbiguousTokens { .. })
    ));
}

#[test]
fn test_unvalidated_empty_separator_treats_path_as_one_key() {
    let accessor = PathAccessor::with_config(PathConfig::new().with_separator(""));
    let mut doc = Container::new();

    accessor.set(&mut doc, "a.b", 1).unwrap();

    assert_json(&doc, r#"{"a.b":1}"#);
    assert_eq!(accessor.escape("a.b"), "a.b");
}

#[test]
fn test_config_mut_changes_next_call() {
    let mut accessor = accessor();
    let mut doc = Container::new();

    accessor.set(&mut doc, "a/b", 1).unwrap();
    accessor.config_mut().set_separator("/");
    accessor.set(&mut doc, "c/d", 2).unwrap();

    assert_json(&doc, r#"{"a/b":1,"c":{"d":2}}"#);
    assert!(accessor.has(&doc, "c/d"));
    assert!(!accessor.has(&doc, "c.d"));
}
