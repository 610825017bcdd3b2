// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for dialect descriptors

use dbdl_dialect::{Dialect, DialectSpec, WordClass, builtin_dialect, builtin_dialects};

#[test]
fn test_classification_is_case_insensitive_for_all_dialects() {
    for dialect in builtin_dialects() {
        for (word, class) in dialect.words() {
            assert_eq!(dialect.classify(&word.to_ascii_uppercase()), Some(class));
        }
        assert_eq!(dialect.classify("SELECT"), dialect.classify("select"));
        assert_eq!(dialect.classify("Table"), dialect.classify("table"));
    }
}

#[test]
fn test_base_vocabulary_shared_by_all_dialects() {
    for dialect in builtin_dialects() {
        for word in ["pk", "auto", "unique", "asc", "desc"] {
            assert_eq!(dialect.classify(word), Some(WordClass::Keyword), "{dialect}: {word}");
        }
        assert_eq!(dialect.classify("varchar"), Some(WordClass::Type), "{dialect}");
        assert_eq!(dialect.classify("null"), Some(WordClass::Null), "{dialect}");
    }
}

#[test]
fn test_spec_roundtrips_through_json() {
    let spec = DialectSpec {
        hash_comments: Some(true),
        keywords: Some("pk engine".to_string()),
        ..DialectSpec::named("Roundtrip")
    };
    let json = serde_json::to_string(&spec).unwrap();
    assert!(json.contains("\"hashComments\":true"));

    let dialect = Dialect::from_json(&json).unwrap();
    assert_eq!(dialect, Dialect::define(&spec));
    assert_eq!(dialect.classify("ENGINE"), Some(WordClass::Keyword));
}

#[test]
fn test_invalid_yaml_reports_error() {
    let err = Dialect::from_yaml("name: [unclosed").unwrap_err();
    assert!(err.to_string().starts_with("Invalid YAML dialect descriptor"));
}

#[test]
fn test_sqlite_identifier_quotes() {
    let sqlite = builtin_dialect("sqlite").unwrap();
    assert!(sqlite.is_identifier_quote('`'));
    assert!(sqlite.is_identifier_quote('"'));
    assert!(sqlite.is_special_var_char('$'));
    assert!(!sqlite.double_quoted_strings);
}
